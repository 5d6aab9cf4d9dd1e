//! Parse-time error model and terminal error rendering.
//!
//! Every fault the evaluator can hit is one of the five [`ParseError`]
//! variants. The first error encountered anywhere in the recursive descent
//! aborts the whole parse; there is no recovery and no partial result.
//!
//! Variants that point at a specific token carry its index into the full
//! argument vector (binary name at index 0), which lets
//! [`render_message`](ParseError::render_message) reproduce the command line
//! with the offending token highlighted. Missing-option errors have no single
//! offending token and render without highlighting.
//!
//! Misuse of the schema builder itself (e.g. the reserved name `command`) is
//! a panic, not a `ParseError`: a broken CLI definition is a programming
//! error, not a runtime input error.

use thiserror::Error;

use crate::style::red;

/// Errors produced while evaluating a token stream against a schema.
///
/// # Examples
///
/// ```
/// use argline_core::{Command, ParseError};
///
/// let schema = Command::new("Demo tool");
/// let argv: Vec<String> = ["demo", "--bogus"].iter().map(|s| s.to_string()).collect();
///
/// let err = schema.evaluate(&argv).unwrap_err();
/// assert_eq!(
///     err,
///     ParseError::UnknownSwitch { index: 1, switch: "--bogus".into() }
/// );
/// assert_eq!(err.token_index(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A dash-prefixed token did not match any registered switch alias.
    #[error("Unknown switch: {switch}")]
    UnknownSwitch { index: usize, switch: String },
    /// A required positional, switch, or subcommand was absent at end of
    /// stream. Carries no token index: absence has no offending token.
    #[error("Missing option: {option}")]
    MissingOption { option: String },
    /// A bare token arrived after every declared positional was consumed.
    #[error("Too many arguments received: {value}")]
    TooManyPositionals { index: usize, value: String },
    /// A value failed its type, choice-set, or custom parser.
    #[error("Expected {expected}, got {got}")]
    InvalidOption {
        index: usize,
        expected: String,
        got: String,
    },
    /// A non-boolean switch or positional was given without a value.
    #[error("Value not provided for a non-boolean option")]
    ValueNotProvided { index: usize },
}

impl ParseError {
    /// Index of the offending token in the full argument vector, if the
    /// variant points at one.
    pub fn token_index(&self) -> Option<usize> {
        match self {
            ParseError::UnknownSwitch { index, .. }
            | ParseError::TooManyPositionals { index, .. }
            | ParseError::InvalidOption { index, .. }
            | ParseError::ValueNotProvided { index } => Some(*index),
            ParseError::MissingOption { .. } => None,
        }
    }

    /// Renders the error for terminal display: a red `Error: ` prefix, the
    /// message, and (when a token index is attached) the original argument
    /// line with the offending token highlighted in red.
    ///
    /// `argv` must be the same full vector the parse ran against, binary
    /// name included, so the stored index lines up.
    pub fn render_message(&self, argv: &[String]) -> String {
        let correction = match self.token_index() {
            Some(index) => highlight_token(argv, index),
            None => String::new(),
        };
        format!("{}{self}\n\n{correction}", red("Error: "))
    }
}

/// Reproduces the argument line with the token at `index` wrapped in red.
///
/// Tokens before and after are rejoined with single spaces; the binary name
/// leads the line unhighlighted.
fn highlight_token(argv: &[String], index: usize) -> String {
    let binary = argv.first().map(String::as_str).unwrap_or_default();
    let before = argv[1..index].join(" ");
    let wrong = red(&argv[index]);
    let after = argv
        .get(index + 1..)
        .map(|rest| rest.join(" "))
        .unwrap_or_default();

    format!("{binary} {}", [before, wrong, after].join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_token_index_by_variant() {
        let err = ParseError::InvalidOption {
            index: 3,
            expected: "int".into(),
            got: "abc".into(),
        };
        assert_eq!(err.token_index(), Some(3));

        let err = ParseError::MissingOption {
            option: "name".into(),
        };
        assert_eq!(err.token_index(), None);
    }

    #[test]
    fn test_render_message_highlights_offending_token() {
        let argv = argv(&["tool", "alice", "--bogus", "run"]);
        let err = ParseError::UnknownSwitch {
            index: 2,
            switch: "--bogus".into(),
        };

        let rendered = err.render_message(&argv);
        assert!(rendered.starts_with(&red("Error: ")));
        assert!(rendered.contains("Unknown switch: --bogus"));
        assert!(rendered.contains(&format!("tool alice {} run", red("--bogus"))));
    }

    #[test]
    fn test_render_message_without_index_has_no_correction_line() {
        let argv = argv(&["tool"]);
        let err = ParseError::MissingOption {
            option: "name".into(),
        };

        let rendered = err.render_message(&argv);
        assert!(rendered.ends_with("\n\n"));
    }

    #[test]
    fn test_message_texts() {
        let cases = [
            (
                ParseError::UnknownSwitch {
                    index: 1,
                    switch: "-x".into(),
                },
                "Unknown switch: -x",
            ),
            (
                ParseError::MissingOption {
                    option: "count (-c, --count)".into(),
                },
                "Missing option: count (-c, --count)",
            ),
            (
                ParseError::TooManyPositionals {
                    index: 2,
                    value: "extra".into(),
                },
                "Too many arguments received: extra",
            ),
            (
                ParseError::InvalidOption {
                    index: 1,
                    expected: "json/yaml".into(),
                    got: "xml".into(),
                },
                "Expected json/yaml, got xml",
            ),
            (
                ParseError::ValueNotProvided { index: 1 },
                "Value not provided for a non-boolean option",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }
}
