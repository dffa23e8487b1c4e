//! Ayanamsa: the offset between the tropical and a sidereal zodiac.
//!
//! The tropical zodiac is anchored to the vernal equinox, which precesses
//! westward against the stars by ~50.29″ per year, so the ayanamsa grows
//! over time. Two ways of fixing it are supported:
//!
//! - **Fixed epoch with drift**: a published value at a reference year plus a
//!   constant annual rate (Fagan-Allen: 25°00′ in 2019).
//! - **Star anchored**: a reference star is defined to sit at a canonical
//!   sidereal longitude (Lahiri: Spica at 0° Libra = 180°), so the ayanamsa
//!   is that star's tropical longitude of date minus its sidereal one. This
//!   must be re-evaluated at every instant.

use zij_frames::general_precession_longitude_deg;
use zij_time::Epoch;

use crate::util::{normalize_360, wrap_180};

/// Ayanamsa defined by a value at a reference year and a linear drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEpochAyanamsa {
    /// Calendar year at which `reference_deg` holds.
    pub reference_year: f64,
    /// Ayanamsa at the reference year, degrees.
    pub reference_deg: f64,
    /// Annual drift, degrees per year.
    pub rate_deg_per_year: f64,
}

/// Fagan-Allen: 25°00′00″ in 2019, drifting 50.29″ per year.
pub const FAGAN_ALLEN_2019: FixedEpochAyanamsa = FixedEpochAyanamsa {
    reference_year: 2019.0,
    reference_deg: 25.0,
    rate_deg_per_year: 50.29 / 3600.0,
};

impl FixedEpochAyanamsa {
    /// Ayanamsa at a calendar year, by linear extrapolation.
    ///
    /// No range check: centuries away from the reference the constant rate
    /// drifts from true precession by more than a degree.
    pub fn at_year(&self, year: f64) -> f64 {
        self.reference_deg + (year - self.reference_year) * self.rate_deg_per_year
    }

    /// Ayanamsa at an epoch, using its decimal Julian year.
    pub fn at_epoch(&self, epoch: Epoch) -> f64 {
        self.at_year(epoch.julian_epoch_year())
    }

    /// Ayanamsa at a calendar year with the drift taken from the IAU 2006
    /// general precession polynomial instead of the constant rate.
    pub fn iau_drift_at(&self, year: f64) -> f64 {
        let t_ref = (self.reference_year - 2000.0) / 100.0;
        let t = (year - 2000.0) / 100.0;
        self.reference_deg + general_precession_longitude_deg(t)
            - general_precession_longitude_deg(t_ref)
    }
}

/// A star pinned to a canonical sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarAnchor {
    /// Catalog name of the reference star.
    pub star: &'static str,
    /// Sidereal longitude the star is defined to occupy, degrees.
    pub sidereal_lon_deg: f64,
}

/// Lahiri (Chitrapaksha): Spica at 0° sidereal Libra.
pub const LAHIRI_SPICA: StarAnchor = StarAnchor {
    star: "Spica",
    sidereal_lon_deg: 180.0,
};

impl StarAnchor {
    /// Ayanamsa given the star's observed tropical longitude of date.
    pub fn ayanamsa(&self, tropical_lon_deg: f64) -> f64 {
        star_anchored_ayanamsa(tropical_lon_deg, self.sidereal_lon_deg)
    }
}

/// Which policy a table uses to fix its ayanamsa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AyanamsaSource {
    /// Reference value plus linear drift.
    FixedEpoch(FixedEpochAyanamsa),
    /// Reference star at a canonical sidereal longitude.
    StarAnchored(StarAnchor),
}

impl AyanamsaSource {
    /// Short human-readable name.
    pub fn describe(&self) -> String {
        match self {
            Self::FixedEpoch(f) => format!(
                "fixed epoch {:.0}, {:.2}\"/yr",
                f.reference_year,
                f.rate_deg_per_year * 3600.0
            ),
            Self::StarAnchored(a) => format!("{} at {:.0}° sidereal", a.star, a.sidereal_lon_deg),
        }
    }
}

/// Ayanamsa from a star's tropical longitude `L` and its canonical sidereal
/// longitude `S`: `L − S`, wrapped to (−180, 180].
pub fn star_anchored_ayanamsa(tropical_lon_deg: f64, sidereal_lon_deg: f64) -> f64 {
    wrap_180(tropical_lon_deg - sidereal_lon_deg)
}

/// Tropical longitude of a sidereal longitude, in [0, 360).
pub fn sidereal_to_tropical(sidereal_lon_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(sidereal_lon_deg + ayanamsa_deg)
}

/// Sidereal longitude of a tropical longitude, in [0, 360).
pub fn tropical_to_sidereal(tropical_lon_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsa_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fagan_allen_reference() {
        assert_eq!(FAGAN_ALLEN_2019.at_year(2019.0), 25.0);
    }

    #[test]
    fn fagan_allen_2024() {
        let aya = FAGAN_ALLEN_2019.at_year(2024.0);
        assert!((aya - 25.069_847).abs() < 1e-6, "aya = {aya}");
    }

    #[test]
    fn fixed_epoch_is_linear() {
        let a = FAGAN_ALLEN_2019.at_year(2030.0);
        let b = FAGAN_ALLEN_2019.at_year(2050.0);
        let expected = 20.0 * FAGAN_ALLEN_2019.rate_deg_per_year;
        assert!(((b - a) - expected).abs() < 1e-12);
    }

    #[test]
    fn fixed_epoch_backwards() {
        assert!(FAGAN_ALLEN_2019.at_year(1900.0) < 25.0);
    }

    #[test]
    fn iau_drift_close_to_linear() {
        // Over decades the IAU polynomial and the constant rate agree to
        // well under an arc-minute.
        let linear = FAGAN_ALLEN_2019.at_year(2050.0);
        let iau = FAGAN_ALLEN_2019.iau_drift_at(2050.0);
        assert!((linear - iau).abs() < 1.0 / 60.0, "linear {linear}, iau {iau}");
        assert!((FAGAN_ALLEN_2019.iau_drift_at(2019.0) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn at_epoch_matches_year() {
        let aya = FAGAN_ALLEN_2019.at_epoch(Epoch::new_year(2030));
        assert!((aya - FAGAN_ALLEN_2019.at_year(2030.0)).abs() < 1e-4);
    }

    #[test]
    fn star_anchored_lahiri() {
        let aya = LAHIRI_SPICA.ayanamsa(204.1748);
        assert!((aya - 24.1748).abs() < 1e-9);
    }

    #[test]
    fn star_anchored_wraps_to_nearest() {
        assert!((star_anchored_ayanamsa(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((star_anchored_ayanamsa(350.0, 10.0) + 20.0).abs() < 1e-12);
    }

    #[test]
    fn sidereal_tropical_inverse() {
        let trop = sidereal_to_tropical(350.0, 24.2);
        assert!((trop - 14.2).abs() < 1e-12);
        assert!((tropical_to_sidereal(trop, 24.2) - 350.0).abs() < 1e-9);
    }

    #[test]
    fn describe_sources() {
        let s = AyanamsaSource::StarAnchored(LAHIRI_SPICA).describe();
        assert_eq!(s, "Spica at 180° sidereal");
        let s = AyanamsaSource::FixedEpoch(FAGAN_ALLEN_2019).describe();
        assert_eq!(s, "fixed epoch 2019, 50.29\"/yr");
    }
}
