//! Error types for traversal and command-line handling

use std::io;

use thiserror::Error;

/// Errors raised while walking a directory tree.
///
/// Per-path failures (`Open`, `Stat`, `PathTooLong`) are recovered at the frame
/// where they occur: the walker reports them and abandons only that subtree.
/// The remaining variants abort the whole walk.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Path does not exist, is not accessible, or could not be listed
    #[error("cannot open {0}")]
    Open(String),

    /// Metadata query failed after the path was found
    #[error("cannot stat {0}")]
    Stat(String),

    /// Joining a child name would overflow the path buffer
    #[error("path too long")]
    PathTooLong,

    /// Nesting is deeper than the ancestor flag arena can record
    #[error("maximum depth of {0} levels exceeded")]
    DepthExceeded(usize),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    /// Whether the walker can report this error and carry on with siblings.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TreeError::Open(_) | TreeError::Stat(_) | TreeError::PathTooLong
        )
    }
}

/// Malformed command-line input, detected before any traversal starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("invalid value for -F: '{0}' (extension must start with '.')")]
    InvalidFilter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_path_errors_are_recoverable() {
        assert!(TreeError::Open("a".into()).is_recoverable());
        assert!(TreeError::Stat("a".into()).is_recoverable());
        assert!(TreeError::PathTooLong.is_recoverable());
        assert!(!TreeError::DepthExceeded(128).is_recoverable());
        assert!(!TreeError::Output(io::Error::other("closed")).is_recoverable());
    }

    #[test]
    fn test_diagnostic_messages() {
        assert_eq!(TreeError::Open("x/y".into()).to_string(), "cannot open x/y");
        assert_eq!(TreeError::Stat("x/y".into()).to_string(), "cannot stat x/y");
        assert_eq!(TreeError::PathTooLong.to_string(), "path too long");
    }
}
