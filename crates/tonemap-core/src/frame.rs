//! Frame descriptors and buffer-shape validation.
//!
//! A [`FrameDesc`] pins down the dimensions of one raw frame and derives the
//! expected input/output buffer lengths, with overflow-checked arithmetic.
//!
//! # Usage
//!
//! ```rust
//! use tonemap_core::FrameDesc;
//!
//! let desc = FrameDesc::new(1920, 1080).unwrap();
//! assert_eq!(desc.input_len(), 1920 * 1080 * 4);
//! assert_eq!(desc.output_len(), 1920 * 1080 * 3);
//! ```

use crate::{Error, Result};

/// Channels in a raw input frame (RGBA).
pub const INPUT_CHANNELS: usize = 4;

/// Channels in a quantized output frame (RGB, alpha dropped).
pub const OUTPUT_CHANNELS: usize = 3;

/// Dimensions of one raw frame.
///
/// Construction validates that both extents are positive and that the
/// element counts fit in `usize`, so a valid `FrameDesc` guarantees
/// [`input_len`](Self::input_len) and [`output_len`](Self::output_len)
/// never overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDesc {
    width: u32,
    height: u32,
}

impl FrameDesc {
    /// Creates a frame descriptor, validating the dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when either extent is zero or
    /// when `width * height * 4` would overflow `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be > 0",
            ));
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(INPUT_CHANNELS))
            .ok_or_else(|| Error::invalid_dimensions(width, height, "buffer size overflows"))?;
        Ok(Self { width, height })
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Expected element count of the raw RGBA input buffer.
    #[inline]
    pub fn input_len(&self) -> usize {
        self.pixel_count() * INPUT_CHANNELS
    }

    /// Element count of the quantized RGB output buffer.
    #[inline]
    pub fn output_len(&self) -> usize {
        self.pixel_count() * OUTPUT_CHANNELS
    }

    /// Checks that `input` has exactly [`input_len`](Self::input_len)
    /// elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] otherwise.
    pub fn validate_input(&self, input: &[f32]) -> Result<()> {
        let expected = self.input_len();
        if input.len() != expected {
            return Err(Error::buffer_size_mismatch(expected, input.len()));
        }
        Ok(())
    }
}
