//! Declarative command-line parsing: schema, evaluator, and usage renderer.
//!
//! This crate has three cooperating layers sharing one schema tree:
//!
//! - [`Command`] — a schema node built fluently from positional definitions,
//!   multi-alias [`Switch`] definitions, and nested subcommands.
//! - [`Command::evaluate`] — recursive descent over a token stream producing
//!   a flat [`ParsedArgs`] mapping, or the first [`ParseError`] hit.
//! - [`render_usage`] — walks the same tree into human-readable usage text.
//!
//! The library is pure: rendering returns `String`s and nothing here touches
//! stdout or the process exit code. The thin binary wrapper that prints
//! usage, prints errors, and exits lives in the companion cli crate.
//!
//! # Example
//!
//! ```
//! use argline_core::{Command, Switch, Value, ValueType};
//!
//! let schema = Command::new("Greeting tool")
//!     .positional("name", "Who to greet", ValueType::String)
//!     .switch(
//!         Switch::new(&["-c", "--count"], "count", "Repetitions", ValueType::Int)
//!             .with_default(5),
//!     )
//!     .optional_subcommands()
//!     .subcommand("shout", Command::new("Greets loudly"));
//!
//! let argv: Vec<String> = ["greet", "--count=3", "alice"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let result = schema.evaluate(&argv).unwrap();
//! assert_eq!(result["name"], Value::Str("alice".into()));
//! assert_eq!(result["count"], Value::Int(3));
//! ```

mod error;
mod parse;
pub mod style;
mod types;
mod usage;
mod value;

pub use error::ParseError;
pub use parse::help_requested;
pub use types::{COMMAND_KEY, Command, Positional, Switch};
pub use usage::render_usage;
pub use value::{ParsedArgs, Value, ValueParser, ValueType};
