//! Row-layout transforms for quantized output.
//!
//! These operate on interleaved 8-bit buffers, after tone mapping. The
//! passes always produce a top-down `[height][width][3]` buffer first;
//! [`apply_layout`] reorders it to the requested convention.

use tonemap_core::{OutputLayout, OUTPUT_CHANNELS};

/// Flips an interleaved u8 image vertically (top-bottom mirror).
///
/// # Example
///
/// ```rust
/// use tonemap_ops::transform::flip_v;
///
/// let src = [
///     1, 0, 0, // Top pixel
///     0, 1, 0, // Bottom pixel
/// ];
/// let flipped = flip_v(&src, 1, 2, 3);
/// assert_eq!(&flipped[..3], &[0, 1, 0]); // Was bottom, now top
/// ```
pub fn flip_v(src: &[u8], width: usize, height: usize, channels: usize) -> Vec<u8> {
    let mut dst = vec![0u8; src.len()];
    let row_size = width * channels;

    for y in 0..height {
        let src_start = y * row_size;
        let dst_start = (height - 1 - y) * row_size;
        dst[dst_start..dst_start + row_size].copy_from_slice(&src[src_start..src_start + row_size]);
    }

    dst
}

/// Swaps the row and column axes of an interleaved u8 image.
///
/// A `[height][width][c]` buffer becomes `[width][height][c]`; channel
/// interleaving is unchanged.
///
/// # Example
///
/// ```rust
/// use tonemap_ops::transform::transpose;
///
/// // 2x1 image -> 1x2 image
/// let src = [10, 11, 12, 20, 21, 22];
/// let t = transpose(&src, 2, 1, 3);
/// assert_eq!(t, vec![10, 11, 12, 20, 21, 22]);
/// ```
pub fn transpose(src: &[u8], width: usize, height: usize, channels: usize) -> Vec<u8> {
    let mut dst = vec![0u8; src.len()];

    for y in 0..height {
        for x in 0..width {
            let src_idx = (y * width + x) * channels;
            let dst_idx = (x * height + y) * channels;
            dst[dst_idx..dst_idx + channels].copy_from_slice(&src[src_idx..src_idx + channels]);
        }
    }

    dst
}

/// Reorders a top-down RGB buffer into the requested [`OutputLayout`].
pub fn apply_layout(src: Vec<u8>, width: usize, height: usize, layout: OutputLayout) -> Vec<u8> {
    match layout {
        OutputLayout::TopDown => src,
        OutputLayout::BottomUp => flip_v(&src, width, height, OUTPUT_CHANNELS),
        OutputLayout::Transposed => transpose(&src, width, height, OUTPUT_CHANNELS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_v_two_rows() {
        // 1x2, RGB
        let src = [1, 2, 3, 4, 5, 6];
        let flipped = flip_v(&src, 1, 2, 3);
        assert_eq!(flipped, vec![4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_flip_v_involution() {
        let src: Vec<u8> = (0..2 * 3 * 3).map(|i| i as u8).collect();
        let twice = flip_v(&flip_v(&src, 2, 3, 3), 2, 3, 3);
        assert_eq!(twice, src);
    }

    #[test]
    fn test_transpose_2x2() {
        // 2x2, 1 channel: [[a, b], [c, d]] -> [[a, c], [b, d]]
        let src = [1, 2, 3, 4];
        let t = transpose(&src, 2, 2, 1);
        assert_eq!(t, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_transpose_involution() {
        let src: Vec<u8> = (0..3 * 2 * 3).map(|i| i as u8).collect();
        let once = transpose(&src, 3, 2, 3);
        let twice = transpose(&once, 2, 3, 3);
        assert_eq!(twice, src);
    }

    #[test]
    fn test_apply_layout_top_down_is_identity() {
        let src = vec![9u8; 2 * 2 * 3];
        assert_eq!(apply_layout(src.clone(), 2, 2, OutputLayout::TopDown), src);
    }
}
