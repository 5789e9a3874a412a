//! # tonemap-core
//!
//! Core types for converting raw float renderer frames to displayable 8-bit
//! images.
//!
//! This crate provides the foundational types shared by the tonemap-rs
//! workspace:
//!
//! - [`FrameDesc`] - Dimensions and buffer-size validation for a raw frame
//! - [`OutputLayout`] - Explicit row ordering of the quantized output
//! - [`Error`] - Unified error taxonomy for dimension and buffer failures
//! - [`luma`] - Rec.601 luma weights and helpers
//!
//! ## Frame model
//!
//! A raw frame is a flat `[f32]` buffer in **row-major** `[height][width][4]`
//! RGBA order, as dumped by the renderer:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! The tone-mapped result is `[u8]` with 3 channels and one of several
//! [`OutputLayout`] row orderings (the renderer family historically used
//! both bottom-up and transposed conventions).
//!
//! ## Crate Structure
//!
//! This crate is the foundation of tonemap-rs and has no internal
//! dependencies:
//!
//! ```text
//! tonemap-core (this crate)
//!    ^
//!    |
//!    +-- tonemap-transfer (scalar transfer functions)
//!    +-- tonemap-ops (tone-mapping passes)
//!    +-- tonemap-io (raw buffer I/O)
//!    +-- tonemap-cli (binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod frame;
pub mod layout;
pub mod luma;

pub use error::{Error, Result};
pub use frame::{FrameDesc, INPUT_CHANNELS, OUTPUT_CHANNELS};
pub use layout::OutputLayout;
pub use luma::{luma_rec601, REC601_LUMA, REC601_LUMA_B, REC601_LUMA_G, REC601_LUMA_R};
