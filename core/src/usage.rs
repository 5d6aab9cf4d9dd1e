//! Usage-text rendering.
//!
//! Walks the same schema tree the parser reads and produces human-readable
//! usage text: one summary line per node (bold name, positionals, distinct
//! switches, a trailing `command` slot when subcommands exist), followed by
//! an indented description row per entry, then each subcommand rendered
//! recursively one indent level deeper.
//!
//! Rendering is independent of parsing and never fails for a valid schema.

use crate::style::bold;
use crate::types::{Command, Positional, Switch};

/// Column width of the name field in description rows. Names that do not
/// fit push their description onto the next line.
const NAME_COLUMN: usize = 8;

/// Renders the usage tree for `command`, labelled `name` (normally the
/// binary name), with subcommand blocks indented by `indent_incr`.
///
/// # Examples
///
/// ```
/// use argline_core::{render_usage, Command, ValueType};
///
/// let schema = Command::new("Demo")
///     .positional("name", "A name", ValueType::String)
///     .subcommand("run", Command::new("Runs"));
///
/// let usage = render_usage(&schema, "demo", 2);
/// assert!(usage.contains(" name command"));
/// assert!(usage.contains("A name"));
/// ```
pub fn render_usage(command: &Command, name: &str, indent_incr: usize) -> String {
    let mut out = String::new();
    render_node(&mut out, command, name, 0, indent_incr);
    out
}

fn render_node(out: &mut String, command: &Command, name: &str, indent: usize, indent_incr: usize) {
    let mut line = bold(name);
    for positional in &command.positionals {
        line.push_str(&wrap_optional(&positional.name, positional.optional));
    }
    for switch in &command.switches {
        line.push_str(&wrap_optional(&summary_token(switch), switch.optional));
    }
    if !command.subcommands.is_empty() {
        line.push_str(&wrap_optional("command", command.subcommands_optional));
    }
    out.push_str(&" ".repeat(indent));
    out.push_str(&line);
    out.push('\n');

    for positional in &command.positionals {
        entry_rows(out, positional, indent + indent_incr);
    }
    for switch in &command.switches {
        switch_rows(out, switch, indent + indent_incr);
    }

    if !command.subcommands.is_empty() {
        for (sub_name, child) in &command.subcommands {
            out.push('\n');
            render_node(out, child, sub_name, indent + indent_incr, indent_incr);
        }
        out.push('\n');
    }
}

/// Summary-line token for a switch: slash-joined aliases plus a `=type`
/// suffix for anything with a hint except booleans.
fn summary_token(switch: &Switch) -> String {
    let mut token = switch.aliases.join("/");
    if !switch.value_type.is_bool() {
        if let Some(hint) = switch.value_type.hint() {
            token.push('=');
            token.push_str(&hint);
        }
    }
    token
}

fn wrap_optional(token: &str, optional: bool) -> String {
    if optional {
        format!(" [{token}]")
    } else {
        format!(" {token}")
    }
}

fn entry_rows(out: &mut String, positional: &Positional, indent: usize) {
    rows(
        out,
        &positional.name,
        &positional.description,
        positional.value_type.hint(),
        indent,
    );
}

fn switch_rows(out: &mut String, switch: &Switch, indent: usize) {
    // Shortest spelling first, the conventional short-then-long order.
    let mut aliases = switch.aliases.clone();
    aliases.sort_by_key(String::len);
    rows(
        out,
        &aliases.join(", "),
        &switch.description,
        switch.value_type.hint(),
        indent,
    );
}

fn rows(out: &mut String, name: &str, description: &str, hint: Option<String>, indent: usize) {
    out.push_str(&pad(name, NAME_COLUMN, indent));
    out.push_str(description);
    out.push('\n');
    if let Some(hint) = hint {
        out.push_str(&pad("", NAME_COLUMN, indent));
        out.push_str(&hint);
        out.push('\n');
    }
}

/// Left-pads with `indent` spaces and right-pads `s` to `column`; an
/// over-long `s` spills onto its own line with the continuation aligned to
/// the column.
fn pad(s: &str, column: usize, indent: usize) -> String {
    let lead = " ".repeat(indent);
    if s.len() < column {
        format!("{lead}{s}{}", " ".repeat(column - s.len()))
    } else {
        format!("{lead}{s}\n{}", " ".repeat(indent + column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Command, Switch};
    use crate::value::ValueType;

    fn sample() -> Command {
        Command::new("Sample tool")
            .positional("name", "A name", ValueType::String)
            .switch(
                Switch::new(&["-c", "--count"], "count", "A count", ValueType::Int)
                    .with_default(5),
            )
            .optional_subcommands()
            .subcommand("run", Command::new("Runs"))
    }

    #[test]
    fn test_full_rendering() {
        let usage = render_usage(&sample(), "tool", 2);
        let expected = format!(
            "{tool} name -c/--count=int [command]\n\
             \x20 name    A name\n\
             \x20         str\n\
             \x20 -c, --count\n\
             \x20         A count\n\
             \x20         int\n\
             \n\
             \x20 {run}\n\
             \n",
            tool = bold("tool"),
            run = bold("run"),
        );
        assert_eq!(usage, expected);
    }

    #[test]
    fn test_multi_alias_switch_rendered_once() {
        let usage = render_usage(&sample(), "tool", 2);
        assert_eq!(usage.matches("-c/--count=int").count(), 1);
        assert_eq!(usage.matches("-c, --count").count(), 1);
    }

    #[test]
    fn test_optional_entries_are_bracketed() {
        let schema = Command::new("tool")
            .optional_positionals()
            .positional("target", "A target", ValueType::String)
            .switch(
                Switch::new(&["--force"], "force", "Skip checks", ValueType::Bool).optional(),
            );

        let usage = render_usage(&schema, "tool", 2);
        assert!(usage.contains(" [target]"));
        assert!(usage.contains(" [--force]"));
    }

    #[test]
    fn test_bool_switch_has_no_summary_suffix_but_a_hint_row() {
        let schema = Command::new("tool").switch(Switch::new(
            &["-v", "--verbose"],
            "verbose",
            "Noisy",
            ValueType::Bool,
        ));

        let usage = render_usage(&schema, "tool", 2);
        assert!(usage.contains(" -v/--verbose\n"));
        assert!(!usage.contains("-v/--verbose=bool"));
        assert!(usage.ends_with("bool\n"));
    }

    #[test]
    fn test_choice_switch_shows_allowed_values() {
        let schema = Command::new("tool").switch(Switch::new(
            &["--format"],
            "format",
            "Output format",
            ValueType::choice(["json", "yaml"]),
        ));

        let usage = render_usage(&schema, "tool", 2);
        assert!(usage.contains("--format=json/yaml"));
    }

    #[test]
    fn test_custom_parser_has_no_hint() {
        let schema = Command::new("tool").positional(
            "when",
            "A point in time",
            ValueType::custom(|_, _, raw| Ok(crate::Value::Str(raw.to_string()))),
        );

        let usage = render_usage(&schema, "tool", 2);
        assert!(usage.contains("  when    A point in time\n"));
        // No hint row between the entry and the end of the rendering.
        assert!(usage.ends_with("A point in time\n"));
    }

    #[test]
    fn test_nested_subcommands_indent_further() {
        let schema = Command::new("tool").subcommand(
            "remote",
            Command::new("Remotes").subcommand("add", Command::new("Adds")),
        );

        let usage = render_usage(&schema, "tool", 2);
        assert!(usage.contains(&format!("\n  {} command\n", bold("remote"))));
        assert!(usage.contains(&format!("\n    {}\n", bold("add"))));
    }
}
