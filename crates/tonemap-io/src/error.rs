//! Error types for raw frame I/O.

use thiserror::Error;

/// Result type for raw frame I/O.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur reading or writing raw frame dumps.
///
/// A raw dump carries no header, so the only format check available is the
/// byte count against the declared frame shape. Both too-short and
/// too-long files are rejected: a partial render and a mismatched
/// width/height are indistinguishable from the file alone, and silently
/// accepting either would produce a scrambled image.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying I/O failure (unreadable input, unwritable output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File ended before the declared frame was fully read.
    #[error("truncated frame: expected {expected_bytes} bytes of f32 data")]
    TruncatedFile {
        /// Byte count the declared dimensions require
        expected_bytes: usize,
    },

    /// File holds more data than the declared frame.
    #[error("trailing data after {expected_bytes} bytes; dimensions do not match the file")]
    TrailingData {
        /// Byte count the declared dimensions require
        expected_bytes: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_message() {
        let err = IoError::TruncatedFile { expected_bytes: 32 };
        assert!(err.to_string().contains("32"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: IoError = io.into();
        assert!(matches!(err, IoError::Io(_)));
    }
}
