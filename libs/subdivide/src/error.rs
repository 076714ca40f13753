//! # Subdivision Errors
//!
//! Error types for subdivision requests.

use thiserror::Error;

/// Errors that can occur when requesting a subdivision.
///
/// Subdivision itself is pure arithmetic and cannot fail; the only failure
/// is a request that names an impossible depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubdivideError {
    /// The requested depth is negative.
    #[error("Invalid argument: subdivision depth must be >= 0, got {depth}")]
    InvalidArgument { depth: i32 },
}

/// Result type for subdivision operations.
pub type SubdivideResult<T> = std::result::Result<T, SubdivideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SubdivideError::InvalidArgument { depth: -3 };
        let display = format!("{err}");
        assert!(display.contains("-3"));
        assert!(display.starts_with("Invalid argument"));
    }
}
