//! Frame statistics.
//!
//! The only statistic the passes need is the global peak luma used by the
//! normalization variant. The reduction is an associative `f32::max`, so
//! the parallel and serial paths produce the same value regardless of
//! traversal order.

use tonemap_core::{luma_rec601, INPUT_CHANNELS};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Peak Rec.601 luma over all pixels of a raw RGBA frame.
///
/// Alpha carries zero weight. Returns 0.0 for an all-black frame; negative
/// luma (possible with negative scene values) never raises the peak above
/// 0.0 because the fold starts there.
///
/// # Panics
///
/// Does not validate the buffer shape; trailing elements that do not fill
/// a whole pixel are ignored. Callers validate via
/// [`FrameDesc`](tonemap_core::FrameDesc) first.
///
/// # Example
///
/// ```rust
/// use tonemap_ops::stats::max_luma;
///
/// let frame = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0];
/// assert!((max_luma(&frame) - 1.0).abs() < 1e-6);
/// ```
pub fn max_luma(input: &[f32]) -> f32 {
    #[cfg(feature = "parallel")]
    {
        input
            .par_chunks_exact(INPUT_CHANNELS)
            .map(|px| luma_rec601([px[0], px[1], px[2]]))
            .reduce(|| 0.0f32, f32::max)
    }
    #[cfg(not(feature = "parallel"))]
    {
        input
            .chunks_exact(INPUT_CHANNELS)
            .map(|px| luma_rec601([px[0], px[1], px[2]]))
            .fold(0.0f32, f32::max)
    }
}
