//! Error types for line buffer operations.

use std::fmt;
use std::io;

/// Result type alias for line buffer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for line buffer operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from the backing source.
    Io(io::Error),
    /// Line number is zero or beyond the current line count.
    OutOfRange { line: i64, len: usize },
    /// Descriptor could not be understood.
    InvalidDescriptor(String),
    /// A singular operation matched more than one line.
    AmbiguousMatch { count: usize },
    /// A singular operation matched no line.
    NoMatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OutOfRange { line, len } => {
                write!(f, "invalid line number: {line} (buffer has {len} lines)")
            }
            Self::InvalidDescriptor(reason) => write!(f, "invalid descriptor: {reason}"),
            Self::AmbiguousMatch { count } => {
                write!(f, "too many matching lines: expected 1, found {count}")
            }
            Self::NoMatch => write!(f, "too few matching lines: expected 1, found 0"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::OutOfRange { line: 3, len: 2 };
        assert!(err.to_string().contains("invalid line number: 3"));

        let err = Error::InvalidDescriptor("empty".to_string());
        assert!(err.to_string().contains("invalid descriptor"));

        let err = Error::AmbiguousMatch { count: 4 };
        assert!(err.to_string().contains("found 4"));

        assert!(Error::NoMatch.to_string().contains("too few"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
