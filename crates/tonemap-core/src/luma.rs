//! Rec.601 luma weights.
//!
//! The renderer's normalization pass measures frame brightness with the
//! Rec.601 (SDTV) luma weights, not the Rec.709 set. Alpha carries zero
//! weight and never contributes.

/// Rec.601 luma coefficient for the red channel.
pub const REC601_LUMA_R: f32 = 0.299;

/// Rec.601 luma coefficient for the green channel.
pub const REC601_LUMA_G: f32 = 0.587;

/// Rec.601 luma coefficient for the blue channel.
pub const REC601_LUMA_B: f32 = 0.114;

/// Rec.601 luma coefficients as an array [R, G, B].
pub const REC601_LUMA: [f32; 3] = [REC601_LUMA_R, REC601_LUMA_G, REC601_LUMA_B];

/// Calculates Rec.601 luma from RGB values.
///
/// `Y = 0.299*R + 0.587*G + 0.114*B`
///
/// # Example
/// ```
/// use tonemap_core::luma_rec601;
/// let y = luma_rec601([1.0, 1.0, 1.0]);
/// assert!((y - 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn luma_rec601(rgb: [f32; 3]) -> f32 {
    rgb[0] * REC601_LUMA_R + rgb[1] * REC601_LUMA_G + rgb[2] * REC601_LUMA_B
}
