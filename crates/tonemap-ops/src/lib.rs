//! # tonemap-ops
//!
//! Tone-mapping passes that convert a raw `[height][width][4]` f32 RGBA
//! frame into an 8-bit RGB buffer.
//!
//! Three mutually exclusive policies are provided, preserved from the
//! renderer's original conversion script family:
//!
//! - [`ToneMapVariant::MaxLuma`] - normalize by the frame's peak Rec.601
//!   luma, then clamp
//! - [`ToneMapVariant::AcesGamma`] - ACES filmic curve, gamma 2.2 encode
//! - [`ToneMapVariant::AcesSrgb`] - ACES filmic curve, gamma 2.6
//!   intermediate, piecewise sRGB encode
//!
//! # Example
//!
//! ```rust
//! use tonemap_ops::{map, ToneMapVariant};
//!
//! // 2x1 frame: one white pixel, one black pixel
//! let input = [1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0];
//! let out = map(&input, 2, 1, ToneMapVariant::MaxLuma).unwrap();
//! assert_eq!(out, vec![255, 255, 255, 0, 0, 0]);
//! ```
//!
//! # Parallelism
//!
//! With the default `parallel` feature the elementwise passes run over
//! output rows with Rayon. Output is bit-identical to the serial path: the
//! per-pixel math is independent and the one global reduction
//! ([`stats::max_luma`]) is an associative `f32::max`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod map;
pub mod quantize;
pub mod stats;
pub mod transform;
mod variant;

pub use error::{OpsError, OpsResult};
pub use map::{map, map_with_layout};
pub use variant::ToneMapVariant;
