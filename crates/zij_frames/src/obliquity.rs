//! Mean obliquity of the ecliptic.
//!
//! ε = 23°26'21.448" − 46.8150"·T − 0.00059"·T² + 0.001813"·T³
//!
//! Source: Lieske et al. 1977 (IAU 1976 system), as tabulated in the
//! Astronomical Almanac. T is Julian centuries since J2000.0.

use crate::ARCSEC_TO_RAD;

/// Mean obliquity at J2000.0, 23°26'21.448", in arcseconds.
pub const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.448;

/// Mean obliquity of the ecliptic in arcseconds.
pub fn mean_obliquity_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    OBLIQUITY_J2000_ARCSEC - 46.8150 * t - 0.00059 * t2 + 0.001813 * t3
}

/// Mean obliquity of the ecliptic in degrees.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    mean_obliquity_arcsec(t) / 3600.0
}

/// Mean obliquity of the ecliptic in radians.
pub fn mean_obliquity_rad(t: f64) -> f64 {
    mean_obliquity_arcsec(t) * ARCSEC_TO_RAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        let eps = mean_obliquity_deg(0.0);
        assert!((eps - 23.439_291_1).abs() < 1e-6, "ε(J2000) = {eps}");
    }

    #[test]
    fn decreasing_over_century() {
        let drop = mean_obliquity_arcsec(0.0) - mean_obliquity_arcsec(1.0);
        assert!((drop - 46.8138).abs() < 0.01, "drop = {drop}");
    }

    #[test]
    fn value_2030() {
        // T = 0.3 → 84367.4034" → 23.435390°
        let eps = mean_obliquity_deg(0.3);
        assert!((eps - 23.435_390).abs() < 1e-5, "ε(2030) = {eps}");
    }

    #[test]
    fn units_consistent() {
        let t = 0.24;
        assert!((mean_obliquity_rad(t).to_degrees() - mean_obliquity_deg(t)).abs() < 1e-12);
    }
}
