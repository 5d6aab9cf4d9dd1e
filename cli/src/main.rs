//! Demo binary: a toy task tracker wired through the argline schema parser.
//!
//! This is the thin process-facing wrapper the core library deliberately
//! excludes: it reads `std::env::args`, applies the help contract, prints the
//! parse result as JSON on success, and prints the rendered error on failure,
//! exiting non-zero on every non-success path.

use std::env;
use std::process::ExitCode;

use argline_core::{
    Command, ParseError, Switch, Value, ValueType, help_requested, render_usage,
};

const INDENT: usize = 2;

/// Schema for the demo tool. Touches every feature class: required and
/// optional positionals, multi-alias switches, all value types, defaults,
/// and nested subcommands.
fn build_schema() -> Command {
    let add = Command::new("Adds a task")
        .positional("title", "Task title", ValueType::String)
        .switch(
            Switch::new(
                &["-p", "--priority"],
                "priority",
                "Task priority",
                ValueType::choice(["low", "med", "high"]),
            )
            .with_default("med"),
        )
        .switch(
            Switch::new(
                &["--estimate"],
                "estimate",
                "Time estimate, in minutes or hours",
                ValueType::custom(parse_estimate),
            )
            .optional(),
        );

    let list = Command::new("Lists tasks")
        .optional_positionals()
        .positional("filter", "Substring filter", ValueType::String)
        .switch(Switch::new(&["-l", "--limit"], "limit", "Max rows", ValueType::Int).with_default(10))
        .switch(Switch::new(&["-a", "--all"], "all", "Include done tasks", ValueType::Bool).optional());

    let done = Command::new("Marks a task done")
        .positional("id", "Task id", ValueType::Int);

    Command::new("A tiny task tracker")
        .switch(
            Switch::new(&["-v", "--verbose"], "verbose", "Noisy output", ValueType::Bool)
                .optional(),
        )
        .subcommand("add", add)
        .subcommand("list", list)
        .subcommand("done", done)
}

/// Parses `30m` / `2h` style estimates into minutes.
fn parse_estimate(index: usize, _alias: Option<&str>, raw: &str) -> Result<Value, ParseError> {
    let minutes = match raw.split_at_checked(raw.len().saturating_sub(1)) {
        Some((n, "m")) => n.parse::<i64>().ok(),
        Some((n, "h")) => n.parse::<i64>().ok().map(|h| h * 60),
        _ => None,
    };
    minutes.map(Value::Int).ok_or(ParseError::InvalidOption {
        index,
        expected: "duration (e.g. 30m, 2h)".into(),
        got: raw.into(),
    })
}

fn main() -> ExitCode {
    let argv: Vec<String> = env::args().collect();
    let binary = argv
        .first()
        .map(String::as_str)
        .unwrap_or("argline-demo")
        .to_string();
    let schema = build_schema();

    if help_requested(&argv) {
        println!();
        print!("{}", render_usage(&schema, &binary, INDENT));
        return ExitCode::FAILURE;
    }

    match schema.evaluate(&argv) {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("failed to serialize result: {error}");
                ExitCode::FAILURE
            }
        },
        Err(error) => {
            println!();
            println!("{}", error.render_message(&argv));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        std::iter::once("argline-demo")
            .chain(tokens.iter().copied())
            .map(|t| t.to_string())
            .collect()
    }

    #[test]
    fn test_demo_schema_parses_a_full_invocation() {
        let result = build_schema()
            .evaluate(&argv(&["-v", "add", "write docs", "--estimate=2h"]))
            .unwrap();

        assert_eq!(result["verbose"], Value::Bool(true));
        let add = result["add"].as_map().unwrap();
        assert_eq!(add["title"], Value::Str("write docs".into()));
        assert_eq!(add["priority"], Value::Str("med".into()));
        assert_eq!(add["estimate"], Value::Int(120));
    }

    #[test]
    fn test_estimate_units() {
        assert_eq!(parse_estimate(1, None, "45m").unwrap(), Value::Int(45));
        assert_eq!(parse_estimate(1, None, "2h").unwrap(), Value::Int(120));
        assert!(parse_estimate(1, None, "soon").is_err());
        assert!(parse_estimate(1, None, "h").is_err());
    }

    #[test]
    fn test_demo_usage_renders() {
        let usage = render_usage(&build_schema(), "argline-demo", INDENT);
        assert!(usage.contains("-p/--priority=low/med/high"));
        assert!(usage.contains("Task id"));
    }
}
