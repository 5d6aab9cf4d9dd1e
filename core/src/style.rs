//! ANSI styling helpers.
//!
//! The parser and renderers stay pure by building styled `String`s; nothing
//! in this crate writes to a terminal or inspects whether one is attached.

const BRIGHT_RED: &str = "\x1b[0;91m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Wraps `s` in bright-red escape codes.
pub fn red(s: &str) -> String {
    format!("{BRIGHT_RED}{s}{RESET}")
}

/// Wraps `s` in bold escape codes.
pub fn bold(s: &str) -> String {
    format!("{BOLD}{s}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_wrap_and_reset() {
        assert_eq!(red("oops"), "\x1b[0;91moops\x1b[0m");
        assert_eq!(bold("tool"), "\x1b[1mtool\x1b[0m");
    }
}
