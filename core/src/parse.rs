//! Recursive-descent evaluation of a token stream against a schema.
//!
//! One pass, left to right, no backtracking. Each token is classified in
//! order: dash-prefixed tokens must match a switch alias, bare tokens are
//! checked against subcommand names before falling back to the next unfilled
//! positional. A subcommand hands the *entire* remaining stream to its child
//! node, so anything meant for the parent must appear before the subcommand
//! token.
//!
//! All recursion levels share one cursor into the full argument vector, which
//! keeps token indices globally meaningful for error highlighting.

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::types::{COMMAND_KEY, Command};
use crate::value::{ParsedArgs, Value, parse_value};

/// Top-level entry contract: no arguments beyond the binary name, or a
/// literal `--help` anywhere, means the caller should print usage instead of
/// parsing.
pub fn help_requested(argv: &[String]) -> bool {
    argv.len() <= 1 || argv.iter().any(|arg| arg == "--help")
}

impl Command {
    /// Evaluates a full argument vector against this schema.
    ///
    /// `argv[0]` is the binary name and is not parsed. On success the result
    /// is a flat name → value mapping; an invoked subcommand contributes its
    /// own nested mapping under its name plus a sibling `command` entry
    /// holding the name itself. The first fault anywhere in the descent
    /// aborts the parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use argline_core::{Command, Switch, Value, ValueType};
    ///
    /// let schema = Command::new("Demo")
    ///     .positional("name", "A name", ValueType::String)
    ///     .switch(Switch::new(&["--count"], "count", "A count", ValueType::Int)
    ///         .with_default(5))
    ///     .optional_subcommands()
    ///     .subcommand("run", Command::new("Runs"));
    ///
    /// let argv: Vec<String> =
    ///     ["demo", "alice", "run"].iter().map(|s| s.to_string()).collect();
    /// let result = schema.evaluate(&argv).unwrap();
    /// assert_eq!(result["count"], Value::Int(5));
    /// assert_eq!(result["command"], Value::Str("run".into()));
    /// assert_eq!(result["run"], Value::Map(Default::default()));
    /// ```
    pub fn evaluate(&self, argv: &[String]) -> Result<ParsedArgs, ParseError> {
        debug!(tokens = argv.len().saturating_sub(1), "evaluating argument vector");
        let mut cursor = 1;
        self.parse_from(argv, &mut cursor)
    }

    /// Parses tokens for this node starting at `*cursor`, consuming through
    /// the end of the stream (directly or via a subcommand's descent).
    fn parse_from(&self, argv: &[String], cursor: &mut usize) -> Result<ParsedArgs, ParseError> {
        let mut out = ParsedArgs::new();
        let mut positional_index = 0;

        while *cursor < argv.len() {
            let index = *cursor;
            let token = argv[index].as_str();
            *cursor += 1;

            if token.starts_with('-') {
                let (alias, raw) = match token.split_once('=') {
                    Some((alias, raw)) => (alias, Some(raw)),
                    None => (token, None),
                };
                let Some(switch) = self.find_switch(alias) else {
                    return Err(ParseError::UnknownSwitch {
                        index,
                        switch: alias.to_string(),
                    });
                };
                trace!(index, alias, "token matched switch");
                let value = parse_value(index, Some(alias), raw, &switch.value_type)?;
                out.insert(switch.name.clone(), value);
            } else if let Some(child) = self.find_subcommand(token) {
                trace!(index, subcommand = token, "descending into subcommand");
                let nested = child.parse_from(argv, cursor)?;
                out.insert(COMMAND_KEY.to_string(), Value::Str(token.to_string()));
                out.insert(token.to_string(), Value::Map(nested));
            } else {
                let Some(positional) = self.positionals.get(positional_index) else {
                    return Err(ParseError::TooManyPositionals {
                        index,
                        value: token.to_string(),
                    });
                };
                trace!(index, positional = positional.name.as_str(), "token bound to positional");
                let value = parse_value(index, None, Some(token), &positional.value_type)?;
                out.insert(positional.name.clone(), value);
                positional_index += 1;
            }
        }

        self.check_complete(&mut out)?;
        Ok(out)
    }

    /// End-of-stream validation: every required positional and switch must be
    /// present (a required switch with a default gets the default instead of
    /// an error), and a subcommand must have been chosen unless subcommands
    /// are optional.
    fn check_complete(&self, out: &mut ParsedArgs) -> Result<(), ParseError> {
        for positional in &self.positionals {
            if !positional.optional && !out.contains_key(&positional.name) {
                return Err(ParseError::MissingOption {
                    option: positional.name.clone(),
                });
            }
        }

        for switch in &self.switches {
            if !switch.optional && !out.contains_key(&switch.name) {
                match &switch.default {
                    Some(default) => {
                        out.insert(switch.name.clone(), default.clone());
                    }
                    None => {
                        return Err(ParseError::MissingOption {
                            option: format!("{} ({})", switch.name, switch.aliases.join(", ")),
                        });
                    }
                }
            }
        }

        if !self.subcommands.is_empty()
            && !self.subcommands_optional
            && !out.contains_key(COMMAND_KEY)
        {
            return Err(ParseError::MissingOption {
                option: format!("command ({})", self.subcommand_names().join(", ")),
            });
        }

        Ok(())
    }
}
