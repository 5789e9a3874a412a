//! Quantization of encoded floats to u8.
//!
//! Truncating, not rounding: the original scripts cast through numpy's
//! `astype(uint8)` after a clip, which truncates toward zero. Rounding
//! would shift roughly half of all output values by one code.

/// Scale factor used by the max-luma and ACES-gamma paths.
pub const SCALE_255: f32 = 255.0;

/// Scale factor used by the ACES-sRGB path (0x100).
///
/// The original script scaled by 256 rather than 255. An input that
/// encodes to exactly 1.0 would produce 256 before the clip; the clamp to
/// 255 below keeps the output in range. Preserved as-is.
pub const SCALE_256: f32 = 256.0;

/// Scales an encoded value in [0, 1] by `scale`, clamps to [0, 255], and
/// truncates to u8.
///
/// NaN inputs clamp to 0.
///
/// # Example
///
/// ```rust
/// use tonemap_ops::quantize::{quantize_u8, SCALE_255};
///
/// assert_eq!(quantize_u8(0.0, SCALE_255), 0);
/// assert_eq!(quantize_u8(1.0, SCALE_255), 255);
/// assert_eq!(quantize_u8(0.5, SCALE_255), 127); // truncated, not rounded
/// ```
#[inline]
pub fn quantize_u8(x: f32, scale: f32) -> u8 {
    let v = x * scale;
    if v >= 255.0 {
        255
    } else if v > 0.0 {
        v as u8
    } else {
        0
    }
}
