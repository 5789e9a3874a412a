//! Pure gamma transfer functions.
//!
//! Simple power-law curves with no linear segment.
//!
//! - 2.2: Legacy CRT approximation
//! - 2.6: DCI theatrical projection
//!
//! # Range
//!
//! - Input/Output: [0, 1]

/// EOTF for arbitrary gamma: `v^gamma`
#[inline]
pub fn gamma_eotf(v: f32, gamma: f32) -> f32 {
    if v <= 0.0 {
        0.0
    } else {
        v.powf(gamma)
    }
}

/// OETF for arbitrary gamma: `l^(1/gamma)`
///
/// # Example
///
/// ```rust
/// use tonemap_transfer::gamma::gamma_oetf;
///
/// let encoded = gamma_oetf(0.218, 2.2);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn gamma_oetf(l: f32, gamma: f32) -> f32 {
    if l <= 0.0 {
        0.0
    } else {
        l.powf(1.0 / gamma)
    }
}

/// Gamma 2.2 OETF.
#[inline]
pub fn oetf_22(l: f32) -> f32 {
    gamma_oetf(l, 2.2)
}

/// Gamma 2.6 OETF (DCI theatrical).
#[inline]
pub fn oetf_26(l: f32) -> f32 {
    gamma_oetf(l, 2.6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma22_roundtrip() {
        for i in 0..=100 {
            let v = i as f32 / 100.0;
            let linear = gamma_eotf(v, 2.2);
            let back = oetf_22(linear);
            assert!((v - back).abs() < 1e-5);
        }
    }

    #[test]
    fn test_gamma_identity() {
        assert_eq!(gamma_eotf(0.5, 1.0), 0.5);
        assert_eq!(gamma_oetf(0.5, 1.0), 0.5);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(oetf_22(0.0), 0.0);
        assert_eq!(oetf_26(0.0), 0.0);
        assert!((oetf_22(1.0) - 1.0).abs() < 1e-6);
        assert!((oetf_26(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_26_lifts_more_than_22() {
        // A larger gamma exponent brightens mids more on encode.
        let l = 0.18;
        assert!(oetf_26(l) > oetf_22(l));
    }
}
