//! Error types for tonemap-core operations.
//!
//! # Overview
//!
//! The [`Error`] enum covers the failure modes of the frame-level
//! preconditions:
//!
//! - Dimension validation (zero extents, size overflow)
//! - Buffer length checks against the declared frame shape
//!
//! I/O failures are handled by `tonemap-io`'s own error type; this crate
//! never touches the filesystem.
//!
//! # Usage
//!
//! ```rust
//! use tonemap_core::{Error, FrameDesc};
//!
//! let desc = FrameDesc::new(2, 2).unwrap();
//! let err = desc.validate_input(&[0.0f32; 7]).unwrap_err();
//! assert!(matches!(err, Error::BufferSizeMismatch { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing or validating a raw frame.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid frame dimensions.
    ///
    /// Returned when width or height is zero, or when the dimensions would
    /// overflow the buffer size calculation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Buffer length does not match the declared frame shape.
    ///
    /// Returned when an input buffer is not exactly
    /// `width * height * channels` elements long.
    #[error("buffer size mismatch: expected {expected} elements, got {got}")]
    BufferSizeMismatch {
        /// Expected element count
        expected: usize,
        /// Actual element count
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BufferSizeMismatch`] error.
    #[inline]
    pub fn buffer_size_mismatch(expected: usize, got: usize) -> Self {
        Self::BufferSizeMismatch { expected, got }
    }
}
