//! Tone-mapping policy selection.

use std::fmt;
use std::str::FromStr;

use tonemap_core::OutputLayout;

/// Tone-mapping policy.
///
/// The three policies come from three near-duplicate conversion scripts
/// that shipped with the renderer. Their numeric differences are preserved
/// here as distinct variants rather than normalized; see the per-variant
/// docs for the divergences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToneMapVariant {
    /// Divide every channel by the frame's peak Rec.601 luma (times the
    /// green weight 0.587), then clamp to [0, 1] and scale by 255.
    ///
    /// A frame with zero peak luma maps to all-zero output.
    #[default]
    MaxLuma,
    /// ACES filmic curve followed by a gamma 2.2 encode and a x255 scale.
    AcesGamma,
    /// ACES filmic curve followed by a gamma 2.6 intermediate encode, the
    /// piecewise sRGB OETF, and a x256 scale.
    ///
    /// The 2.6 exponent (vs. 2.2 in [`AcesGamma`](Self::AcesGamma)) and
    /// the x256 scale (vs. x255) are divergences present in the original
    /// script family, kept as-is rather than silently corrected.
    AcesSrgb,
}

impl ToneMapVariant {
    /// The historical output layout of the script this variant came from.
    ///
    /// The max-luma script flipped rows bottom-up; the ACES scripts
    /// transposed the height/width axes.
    #[inline]
    pub fn default_layout(&self) -> OutputLayout {
        match self {
            ToneMapVariant::MaxLuma => OutputLayout::BottomUp,
            ToneMapVariant::AcesGamma | ToneMapVariant::AcesSrgb => OutputLayout::Transposed,
        }
    }
}

impl fmt::Display for ToneMapVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToneMapVariant::MaxLuma => "max-luma",
            ToneMapVariant::AcesGamma => "aces-gamma",
            ToneMapVariant::AcesSrgb => "aces-srgb",
        };
        f.write_str(name)
    }
}

impl FromStr for ToneMapVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "max-luma" | "maxluma" | "normalize" => Ok(ToneMapVariant::MaxLuma),
            "aces-gamma" | "acesgamma" | "aces22" => Ok(ToneMapVariant::AcesGamma),
            "aces-srgb" | "acessrgb" => Ok(ToneMapVariant::AcesSrgb),
            other => Err(format!(
                "unknown variant: '{}'. Use: max-luma, aces-gamma, aces-srgb",
                other
            )),
        }
    }
}
