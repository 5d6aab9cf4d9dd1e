//! Schema type definitions for command-line grammars.
//!
//! A [`Command`] node accumulates positional definitions, switch definitions,
//! and child subcommands through fluent builder calls, then serves as a
//! read-only schema for the evaluator and the usage renderer. Nodes form a
//! tree: each subcommand owns its own `Command`, recursively.

use std::collections::HashMap;

use crate::value::{Value, ValueType};

/// Reserved result key naming the subcommand that was invoked.
///
/// Because the chosen subcommand's name lands in the result under this key,
/// no positional or switch may be called `command`; the builder asserts on
/// it.
pub const COMMAND_KEY: &str = "command";

/// A positional argument, bound by its position in the token stream.
#[derive(Debug, Clone)]
pub struct Positional {
    pub name: String,
    pub description: String,
    pub value_type: ValueType,
    /// Fixed at creation from the builder's optional-positionals mode.
    pub optional: bool,
}

/// A switch definition, reachable through one or more alias tokens.
///
/// All aliases resolve to the same definition, so usage rendering and
/// completeness checks see each switch exactly once regardless of how many
/// spellings it has.
///
/// # Examples
///
/// ```
/// use argline_core::{Switch, ValueType};
///
/// let count = Switch::new(&["-c", "--count"], "count", "How many times", ValueType::Int)
///     .with_default(5);
/// assert_eq!(count.name, "count");
/// assert!(!count.optional);
/// ```
#[derive(Debug, Clone)]
pub struct Switch {
    /// Canonical name, the key the parsed value is stored under.
    pub name: String,
    /// Alias tokens in registration order (e.g. `-v`, `--verbose`).
    pub aliases: Vec<String>,
    pub description: String,
    pub value_type: ValueType,
    pub optional: bool,
    /// Filled in for a required switch that is absent at end of parse. A
    /// present default therefore suppresses the missing-option error even
    /// though `optional` is false.
    pub default: Option<Value>,
}

impl Switch {
    /// Creates a required switch with no default.
    ///
    /// # Panics
    ///
    /// Panics if `name` is the reserved word `command`.
    pub fn new(aliases: &[&str], name: &str, description: &str, value_type: ValueType) -> Self {
        assert!(
            name != COMMAND_KEY,
            "name 'command' is reserved for subcommands"
        );
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            description: description.to_string(),
            value_type,
            optional: false,
            default: None,
        }
    }

    /// Marks the switch optional: absence is simply absence, no error and no
    /// default fill-in.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Supplies a default used when a required switch is absent.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// One node of a command-line schema.
///
/// Built once with the fluent methods below, then treated as read-only:
/// parsing never mutates the schema, so a schema may be evaluated any number
/// of times.
///
/// # Examples
///
/// ```
/// use argline_core::{Command, Switch, Value, ValueType};
///
/// let schema = Command::new("Greets people")
///     .positional("name", "Who to greet", ValueType::String)
///     .switch(Switch::new(&["-c", "--count"], "count", "Repetitions", ValueType::Int)
///         .with_default(1))
///     .subcommand("shout", Command::new("Greets loudly"))
///     .optional_subcommands();
///
/// let argv: Vec<String> = ["greet", "alice"].iter().map(|s| s.to_string()).collect();
/// let result = schema.evaluate(&argv).unwrap();
/// assert_eq!(result["name"], Value::Str("alice".into()));
/// assert_eq!(result["count"], Value::Int(1));
/// ```
#[derive(Debug, Clone)]
pub struct Command {
    pub description: String,
    pub(crate) positionals: Vec<Positional>,
    pub(crate) switches: Vec<Switch>,
    /// Alias token → index into `switches`.
    pub(crate) aliases: HashMap<String, usize>,
    /// Subcommands in registration order; order matters for usage text.
    pub(crate) subcommands: Vec<(String, Command)>,
    pub(crate) subcommands_optional: bool,
    upcoming_positionals_optional: bool,
}

impl Command {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            positionals: Vec::new(),
            switches: Vec::new(),
            aliases: HashMap::new(),
            subcommands: Vec::new(),
            subcommands_optional: false,
            upcoming_positionals_optional: false,
        }
    }

    /// Appends a positional definition. Whether it is optional is taken from
    /// the builder mode at the time of the call (see
    /// [`optional_positionals`](Command::optional_positionals)).
    ///
    /// # Panics
    ///
    /// Panics if `name` is the reserved word `command`.
    pub fn positional(mut self, name: &str, description: &str, value_type: ValueType) -> Self {
        assert!(
            name != COMMAND_KEY,
            "name 'command' is reserved for subcommands"
        );
        self.positionals.push(Positional {
            name: name.to_string(),
            description: description.to_string(),
            value_type,
            optional: self.upcoming_positionals_optional,
        });
        self
    }

    /// All positionals added after this call default to optional. Earlier
    /// definitions are unaffected.
    pub fn optional_positionals(mut self) -> Self {
        self.upcoming_positionals_optional = true;
        self
    }

    /// Registers a switch under every one of its aliases.
    pub fn switch(mut self, switch: Switch) -> Self {
        let index = self.switches.len();
        for alias in &switch.aliases {
            self.aliases.insert(alias.clone(), index);
        }
        self.switches.push(switch);
        self
    }

    /// Attaches a pre-built child node under `name`.
    pub fn subcommand(mut self, name: &str, command: Command) -> Self {
        self.subcommands.push((name.to_string(), command));
        self
    }

    /// Makes the absence of a subcommand token legal for this node.
    pub fn optional_subcommands(mut self) -> Self {
        self.subcommands_optional = true;
        self
    }

    /// Looks up a switch definition by alias token.
    pub fn find_switch(&self, alias: &str) -> Option<&Switch> {
        self.aliases.get(alias).map(|&index| &self.switches[index])
    }

    /// Looks up a child node by subcommand name.
    pub fn find_subcommand(&self, name: &str) -> Option<&Command> {
        self.subcommands
            .iter()
            .find(|(sub, _)| sub == name)
            .map(|(_, command)| command)
    }

    /// Subcommand names in registration order.
    pub fn subcommand_names(&self) -> Vec<&str> {
        self.subcommands.iter().map(|(name, _)| name.as_str()).collect()
    }
}
