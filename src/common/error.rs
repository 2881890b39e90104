//! Error types for the B+ tree index.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All caller-visible errors.
///
/// Duplicate insertion is deliberately absent: it is a defined no-op,
/// not a failure.
#[derive(Debug, Error)]
pub enum Error {
    /// The tree was constructed with an unsupported order.
    ///
    /// This is a configuration error; there is no recovery.
    #[error("invalid tree order {order}: order must be {}", crate::common::config::ORDER)]
    InvalidOrder { order: usize },

    /// A non-blank input line could not be parsed as an integer key.
    #[error("line {line}: invalid integer key {content:?}")]
    InvalidKey { line: usize, content: String },

    /// I/O error while reading a key file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tree structure violates one of its invariants.
    ///
    /// Only produced by [`BPlusTree::validate`](crate::BPlusTree::validate).
    #[error("corrupted tree: {0}")]
    Corrupted(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidOrder { order: 3 };
        assert_eq!(format!("{}", err), "invalid tree order 3: order must be 5");

        let err = Error::InvalidKey {
            line: 7,
            content: "abc".to_string(),
        };
        assert_eq!(format!("{}", err), "line 7: invalid integer key \"abc\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = Error::from(io_err);
        assert!(err.source().is_some());

        assert!(Error::Corrupted("x".into()).source().is_none());
    }
}
