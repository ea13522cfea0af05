// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the pose drawing library.

use std::fmt;

/// Result type alias for pose drawing operations.
pub type Result<T> = std::result::Result<T, PoseDrawError>;

/// Main error type for the pose drawing library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoseDrawError {
    /// The pose result carries no landmark collection.
    MissingLandmarks,
    /// A connection references a landmark index past the end of the list.
    ConnectionOutOfRange {
        /// Start index of the offending connection.
        from: usize,
        /// End index of the offending connection.
        to: usize,
        /// Number of landmarks available.
        len: usize,
    },
    /// Landmark array input has an unsupported shape.
    InvalidShape(String),
}

impl fmt::Display for PoseDrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLandmarks => write!(f, "Missing landmarks: pose result has no landmark list"),
            Self::ConnectionOutOfRange { from, to, len } => write!(
                f,
                "Landmark index is out of range: invalid connection from landmark #{from} to landmark #{to} ({len} landmarks)"
            ),
            Self::InvalidShape(msg) => write!(f, "Invalid shape: {msg}"),
        }
    }
}

impl std::error::Error for PoseDrawError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PoseDrawError::MissingLandmarks;
        assert_eq!(
            err.to_string(),
            "Missing landmarks: pose result has no landmark list"
        );

        let err = PoseDrawError::ConnectionOutOfRange {
            from: 0,
            to: 99,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Landmark index is out of range: invalid connection from landmark #0 to landmark #99 (2 landmarks)"
        );

        let err = PoseDrawError::InvalidShape("test".to_string());
        assert_eq!(err.to_string(), "Invalid shape: test");
    }
}
