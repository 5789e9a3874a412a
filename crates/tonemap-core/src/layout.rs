//! Output row layouts.
//!
//! The renderer script family disagreed about the row order of the 8-bit
//! result: the max-luminance variant flipped the image vertically (the
//! renderer writes rows bottom-up), while the ACES variants transposed the
//! height and width axes before processing. Rather than inferring the order
//! from the selected tone curve, the layout is an explicit parameter.

use std::fmt;
use std::str::FromStr;

/// Row ordering of the quantized output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// Output rows match input rows: `[height][width][3]`.
    #[default]
    TopDown,
    /// Vertically flipped: output row `i` is input row `height - 1 - i`.
    /// Corrects a bottom-up source convention.
    BottomUp,
    /// Axes 0 and 1 swapped: `[width][height][3]`, width-major.
    Transposed,
}

impl OutputLayout {
    /// Output shape `(rows, cols)` for a frame of `width x height`.
    #[inline]
    pub fn shape(&self, width: u32, height: u32) -> (u32, u32) {
        match self {
            OutputLayout::TopDown | OutputLayout::BottomUp => (height, width),
            OutputLayout::Transposed => (width, height),
        }
    }
}

impl fmt::Display for OutputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputLayout::TopDown => "top-down",
            OutputLayout::BottomUp => "bottom-up",
            OutputLayout::Transposed => "transposed",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputLayout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top-down" | "topdown" => Ok(OutputLayout::TopDown),
            "bottom-up" | "bottomup" | "flip" => Ok(OutputLayout::BottomUp),
            "transposed" | "transpose" => Ok(OutputLayout::Transposed),
            other => Err(format!(
                "unknown layout: '{}'. Use: top-down, bottom-up, transposed",
                other
            )),
        }
    }
}
