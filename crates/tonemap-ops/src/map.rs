//! The tone-mapping passes.
//!
//! Each pass is a single elementwise sweep over the frame producing a
//! top-down `[height][width][3]` u8 buffer, which is then reordered into
//! the requested [`OutputLayout`]. Alpha is dropped; only the RGB channels
//! reach the output.

use tonemap_core::{
    FrameDesc, OutputLayout, INPUT_CHANNELS, OUTPUT_CHANNELS, REC601_LUMA_G,
};
use tonemap_transfer::aces::{filmic, FilmicParams};
use tonemap_transfer::{gamma, srgb};
use tracing::debug;

use crate::quantize::{quantize_u8, SCALE_255, SCALE_256};
use crate::{stats, transform, OpsResult, ToneMapVariant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Tone-maps a raw RGBA frame with the variant's historical output layout.
///
/// Equivalent to [`map_with_layout`] with
/// [`ToneMapVariant::default_layout`].
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`](crate::OpsError::InvalidDimensions)
/// when either extent is zero or `input.len() != width * height * 4`.
///
/// # Example
///
/// ```rust
/// use tonemap_ops::{map, ToneMapVariant};
///
/// let input = vec![0.0f32; 4 * 3 * 4];
/// let out = map(&input, 4, 3, ToneMapVariant::AcesGamma).unwrap();
/// assert_eq!(out.len(), 4 * 3 * 3);
/// ```
pub fn map(input: &[f32], width: u32, height: u32, variant: ToneMapVariant) -> OpsResult<Vec<u8>> {
    map_with_layout(input, width, height, variant, variant.default_layout())
}

/// Tone-maps a raw RGBA frame into an explicit output layout.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`](crate::OpsError::InvalidDimensions)
/// when either extent is zero or `input.len() != width * height * 4`.
pub fn map_with_layout(
    input: &[f32],
    width: u32,
    height: u32,
    variant: ToneMapVariant,
    layout: OutputLayout,
) -> OpsResult<Vec<u8>> {
    let desc = FrameDesc::new(width, height)?;
    desc.validate_input(input)?;

    debug!(%variant, %layout, width, height, "tone mapping frame");

    let params = FilmicParams::default();
    let top_down = match variant {
        ToneMapVariant::MaxLuma => pass_max_luma(input, &desc),
        ToneMapVariant::AcesGamma => pass_elementwise(input, &desc, |x| {
            quantize_u8(gamma::oetf_22(filmic(x, &params)), SCALE_255)
        }),
        ToneMapVariant::AcesSrgb => pass_elementwise(input, &desc, |x| {
            quantize_u8(srgb::oetf(gamma::oetf_26(filmic(x, &params))), SCALE_256)
        }),
    };

    Ok(transform::apply_layout(
        top_down,
        width as usize,
        height as usize,
        layout,
    ))
}

/// Normalization pass: divide by peak luma times the green weight, clamp.
///
/// A frame with zero (or negative) peak luma maps to all zeros; the
/// original script would divide by zero here.
fn pass_max_luma(input: &[f32], desc: &FrameDesc) -> Vec<u8> {
    let peak = stats::max_luma(input);
    if peak <= 0.0 {
        debug!("zero peak luma, emitting black frame");
        return vec![0u8; desc.output_len()];
    }
    let inv = 1.0 / (peak * REC601_LUMA_G);
    pass_elementwise(input, desc, move |x| quantize_u8(x * inv, SCALE_255))
}

/// Runs a scalar channel transform over every RGB sample, row by row.
fn pass_elementwise<F>(input: &[f32], desc: &FrameDesc, f: F) -> Vec<u8>
where
    F: Fn(f32) -> u8 + Sync + Send,
{
    let width = desc.width() as usize;
    let in_row = width * INPUT_CHANNELS;
    let out_row = width * OUTPUT_CHANNELS;
    let mut out = vec![0u8; desc.output_len()];

    let process = |(y, row): (usize, &mut [u8])| {
        let src = &input[y * in_row..(y + 1) * in_row];
        for x in 0..width {
            for c in 0..OUTPUT_CHANNELS {
                row[x * OUTPUT_CHANNELS + c] = f(src[x * INPUT_CHANNELS + c]);
            }
        }
    };

    #[cfg(feature = "parallel")]
    out.par_chunks_mut(out_row).enumerate().for_each(process);
    #[cfg(not(feature = "parallel"))]
    out.chunks_mut(out_row).enumerate().for_each(process);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;

    #[test]
    fn test_max_luma_two_pixel_frame() {
        // White pixel and black pixel: peak luma is exactly 1.0, the white
        // pixel normalizes to 1/0.587 per channel and clamps to full code.
        let input = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let out = map(&input, 2, 1, ToneMapVariant::MaxLuma).unwrap();
        assert_eq!(out, vec![255, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn test_max_luma_zero_frame_is_black() {
        let input = vec![0.0f32; 3 * 2 * 4];
        let out = map(&input, 3, 2, ToneMapVariant::MaxLuma).unwrap();
        assert_eq!(out, vec![0u8; 3 * 2 * 3]);
    }

    #[test]
    fn test_max_luma_scale_invariant() {
        let input = [0.2, 0.4, 0.1, 1.0, 0.05, 0.3, 0.25, 1.0];
        let doubled: Vec<f32> = input.iter().map(|v| v * 2.0).collect();

        let a = map(&input, 2, 1, ToneMapVariant::MaxLuma).unwrap();
        let b = map(&doubled, 2, 1, ToneMapVariant::MaxLuma).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_max_luma_bottom_up_default() {
        // 1x2 frame, bright row on top. Default layout flips it to the
        // bottom of the output.
        let input = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let flipped = map(&input, 1, 2, ToneMapVariant::MaxLuma).unwrap();
        assert_eq!(flipped, vec![0, 0, 0, 255, 255, 255]);

        let top_down =
            map_with_layout(&input, 1, 2, ToneMapVariant::MaxLuma, OutputLayout::TopDown).unwrap();
        assert_eq!(top_down, vec![255, 255, 255, 0, 0, 0]);
    }

    #[test]
    fn test_aces_gamma_mid_grey() {
        // filmic(0.18) = 0.26690, ^(1/2.2) = 0.5486, x255 = 139.9
        let input = [0.18, 0.18, 0.18, 1.0];
        let out = map(&input, 1, 1, ToneMapVariant::AcesGamma).unwrap();
        assert!(
            (139..=141).contains(&out[0]),
            "mid grey mapped to {}",
            out[0]
        );
        assert_eq!(out[0], out[1]);
        assert_eq!(out[1], out[2]);
    }

    #[test]
    fn test_aces_srgb_mid_grey() {
        // filmic(0.18) = 0.26690, ^(1/2.6) = 0.6017, srgb = 0.7987, x256 = 204.5
        let input = [0.18, 0.18, 0.18, 1.0];
        let out = map(&input, 1, 1, ToneMapVariant::AcesSrgb).unwrap();
        assert!(
            (203..=205).contains(&out[0]),
            "mid grey mapped to {}",
            out[0]
        );
    }

    #[test]
    fn test_aces_variants_zero_maps_to_zero() {
        let input = [0.0f32; 4];
        for variant in [ToneMapVariant::AcesGamma, ToneMapVariant::AcesSrgb] {
            let out = map(&input, 1, 1, variant).unwrap();
            assert_eq!(out, vec![0, 0, 0], "variant {}", variant);
        }
    }

    #[test]
    fn test_aces_variants_saturate() {
        let input = [1e6, 1e6, 1e6, 1.0];
        for variant in [ToneMapVariant::AcesGamma, ToneMapVariant::AcesSrgb] {
            let out = map(&input, 1, 1, variant).unwrap();
            assert_eq!(out, vec![255, 255, 255], "variant {}", variant);
        }
    }

    #[test]
    fn test_aces_variants_diverge_on_mids() {
        // The 2.6 exponent and x256 scale make the sRGB variant brighter
        // in the mids; the divergence is intentional.
        let input = [0.18, 0.18, 0.18, 1.0];
        let g = map(&input, 1, 1, ToneMapVariant::AcesGamma).unwrap();
        let s = map(&input, 1, 1, ToneMapVariant::AcesSrgb).unwrap();
        assert!(s[0] > g[0]);
    }

    #[test]
    fn test_transposed_matches_transpose_of_top_down() {
        let input: Vec<f32> = (0..3 * 2 * 4).map(|i| i as f32 * 0.05).collect();
        let td = map_with_layout(&input, 3, 2, ToneMapVariant::AcesGamma, OutputLayout::TopDown)
            .unwrap();
        let tr = map(&input, 3, 2, ToneMapVariant::AcesGamma).unwrap();
        assert_eq!(tr, transform::transpose(&td, 3, 2, OUTPUT_CHANNELS));
    }

    #[test]
    fn test_output_length() {
        let input = vec![0.5f32; 5 * 4 * 4];
        for variant in [
            ToneMapVariant::MaxLuma,
            ToneMapVariant::AcesGamma,
            ToneMapVariant::AcesSrgb,
        ] {
            let out = map(&input, 5, 4, variant).unwrap();
            assert_eq!(out.len(), 5 * 4 * 3);
        }
    }

    #[test]
    fn test_alpha_is_dropped_not_mapped() {
        // Alpha of 1.0 must not leak into the output: a black pixel with
        // opaque alpha stays black.
        let input = [0.0, 0.0, 0.0, 1.0];
        let out = map(&input, 1, 1, ToneMapVariant::AcesGamma).unwrap();
        assert_eq!(out, vec![0, 0, 0]);
    }

    #[test]
    fn test_buffer_size_mismatch_rejected() {
        let input = vec![0.0f32; 9];
        let err = map(&input, 2, 1, ToneMapVariant::MaxLuma).unwrap_err();
        assert!(matches!(err, OpsError::InvalidDimensions(_)));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = map(&[], 0, 4, ToneMapVariant::MaxLuma).unwrap_err();
        assert!(matches!(err, OpsError::InvalidDimensions(_)));
    }
}
