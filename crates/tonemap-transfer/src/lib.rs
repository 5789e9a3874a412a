//! # tonemap-transfer
//!
//! Scalar transfer functions used by the tone-mapping passes.
//!
//! Transfer functions convert between linear light values and encoded values
//! for storage or display.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **Gamma**: The exponent in a power-law transfer function
//!
//! # Supported Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`aces`] | Filmic tone compression (Narkowicz fit) | [0, inf) -> [0, 1] |
//! | [`gamma`] | Pure power-law encode (2.2, 2.6) | [0, 1] |
//! | [`srgb`] | Web, consumer displays | [0, 1] |
//!
//! # Usage
//!
//! ```rust
//! use tonemap_transfer::{aces, gamma, srgb};
//!
//! // Compress a scene-referred value into [0, 1]
//! let tone = aces::filmic(1.8, &aces::FilmicParams::default());
//!
//! // Encode for display
//! let display = srgb::oetf(tone);
//! let legacy = gamma::oetf_22(tone);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod aces;
pub mod gamma;
pub mod srgb;

pub use aces::{filmic, filmic_rgb, FilmicParams};
pub use gamma::{gamma_oetf, oetf_22, oetf_26};
pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
