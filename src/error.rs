//! Error types for markup processing.

use thiserror::Error;

/// Error type for all fallible operations of the crate
#[derive(Debug, Error)]
pub enum Error {
    /// The markup could not be parsed into a flat sequence of classed elements
    #[error("Malformed markup at byte {position}: {message}")]
    MalformedMarkup {
        /// Byte offset in the input where the problem was detected
        position: usize,
        /// What went wrong
        message: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error while loading a configuration or document file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(position: usize, message: impl Into<String>) -> Self {
        Error::MalformedMarkup {
            position,
            message: message.into(),
        }
    }
}

/// Result type for markup processing
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = Error::malformed(12, "unexpected end tag </div>");
        assert_eq!(
            err.to_string(),
            "Malformed markup at byte 12: unexpected end tag </div>"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
