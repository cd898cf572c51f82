//! Error types for bizcal.
//!
//! The library is a pure computation layer: every failure is a rejected
//! input, reported through a single `thiserror`-derived enum.  Malformed text
//! is never swallowed — parsing either yields a value or an error the caller
//! must handle.

use thiserror::Error;

/// The top-level error type used throughout bizcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text that does not match an expected date / timestamp / quarter
    /// pattern.
    #[error("format error: {0}")]
    Format(String),

    /// A structurally well-formed value that denotes an impossible or
    /// unsupported date or time (month 13, February 30, a year outside the
    /// supported range, arithmetic leaving that range).
    #[error("date error: {0}")]
    Date(String),

    /// An argument outside the domain of an operation, e.g. a negative
    /// business-day count.
    #[error("range error: {0}")]
    Range(String),
}

/// Shorthand `Result` type used throughout bizcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = Error::Format("expected yyyy-MM-dd, got \"x\"".into());
        assert_eq!(e.to_string(), "format error: expected yyyy-MM-dd, got \"x\"");

        let e = Error::Range("business-day count must be non-negative".into());
        assert!(e.to_string().starts_with("range error:"));
    }
}
