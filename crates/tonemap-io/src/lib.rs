//! # tonemap-io
//!
//! Raw frame buffer I/O.
//!
//! The renderer dumps one frame as a headerless file of little-endian
//! 32-bit floats, row-major `[height][width][4]` RGBA. The tone-mapped
//! result is written back as a headerless `[rows][cols][3]` u8 file. Both
//! formats carry no dimensions, so the caller must supply them and the
//! reader enforces the exact byte count.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tonemap_core::FrameDesc;
//! use tonemap_io::raw;
//!
//! let desc = FrameDesc::new(width, height)?;
//! let input = raw::read_f32_raw("final.bytes", desc)?;
//! // ... tone map ...
//! raw::write_u8_raw("final.data", &output)?;
//! ```
//!
//! # Dependencies
//!
//! - [`byteorder`] - Endian-explicit float reading
//! - [`tonemap-core`] - Frame descriptors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod raw;

pub use error::{IoError, IoResult};
pub use raw::{read_f32_raw, write_u8_raw};
