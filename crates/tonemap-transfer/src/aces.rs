//! ACES filmic tone curve (Narkowicz rational fit).
//!
//! A single-channel approximation of the ACES RRT+ODT, fitted by Krzysztof
//! Narkowicz as a rational function. Maps scene-referred values in
//! `[0, inf)` into displayable `[0, 1]`.
//!
//! # Formula
//!
//! ```text
//! f(x) = clip((x * (a*x + b)) / (x * (c*x + d) + e), 0, 1)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tonemap_transfer::aces::{filmic, FilmicParams};
//!
//! let y = filmic(0.18, &FilmicParams::default());
//! assert!((y - 0.267).abs() < 0.01);
//! ```

/// Parameters of the filmic rational curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilmicParams {
    /// Shoulder strength
    pub a: f32,
    /// Linear section strength
    pub b: f32,
    /// Linear angle
    pub c: f32,
    /// Toe strength
    pub d: f32,
    /// Toe numerator
    pub e: f32,
}

impl Default for FilmicParams {
    /// The Narkowicz fitted ACES curve.
    fn default() -> Self {
        Self {
            a: 2.51,
            b: 0.03,
            c: 2.43,
            d: 0.59,
            e: 0.14,
        }
    }
}

/// Applies the filmic curve to a single channel.
///
/// Negative inputs clamp to 0 before evaluation, so the result is always
/// in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use tonemap_transfer::aces::{filmic, FilmicParams};
///
/// let p = FilmicParams::default();
/// assert_eq!(filmic(0.0, &p), 0.0);
/// assert!(filmic(20.0, &p) > 0.98);
/// ```
#[inline]
pub fn filmic(x: f32, params: &FilmicParams) -> f32 {
    let x = x.max(0.0);
    let num = x * (params.a * x + params.b);
    let den = x * (params.c * x + params.d) + params.e;
    (num / den).clamp(0.0, 1.0)
}

/// Applies the filmic curve to an RGB triplet.
#[inline]
pub fn filmic_rgb(rgb: [f32; 3], params: &FilmicParams) -> [f32; 3] {
    [
        filmic(rgb[0], params),
        filmic(rgb[1], params),
        filmic(rgb[2], params),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_black_is_black() {
        assert_eq!(filmic(0.0, &FilmicParams::default()), 0.0);
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(filmic(-3.5, &FilmicParams::default()), 0.0);
    }

    #[test]
    fn test_highlights_approach_one() {
        let p = FilmicParams::default();
        let y = filmic(100.0, &p);
        assert!(y > 0.99);
        assert!(y <= 1.0);
    }

    #[test]
    fn test_mid_grey() {
        // f(0.18) = 0.086724 / 0.324932
        let y = filmic(0.18, &FilmicParams::default());
        assert_relative_eq!(y, 0.26690, epsilon = 1e-3);
    }

    #[test]
    fn test_monotonic() {
        let p = FilmicParams::default();
        let mut prev = 0.0;
        for i in 0..=1000 {
            let x = i as f32 / 100.0;
            let y = filmic(x, &p);
            assert!(y >= prev, "not monotonic at x={}: {} < {}", x, y, prev);
            prev = y;
        }
    }

    #[test]
    fn test_rgb_matches_scalar() {
        let p = FilmicParams::default();
        let rgb = filmic_rgb([0.1, 0.5, 2.0], &p);
        assert_eq!(rgb[0], filmic(0.1, &p));
        assert_eq!(rgb[1], filmic(0.5, &p));
        assert_eq!(rgb[2], filmic(2.0, &p));
    }
}
