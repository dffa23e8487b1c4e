//! Hour-circle projection of a right ascension onto the ecliptic.
//!
//! Chinese lunar lodges are bounded by hour circles through their
//! determinative stars. The lodge boundary on the ecliptic is where that
//! hour circle crosses it:
//!
//! ```text
//! λ = atan2(sin α · cos ε, cos α)
//! ```
//!
//! This depends on right ascension alone, so it generally differs from the
//! star's own ecliptic longitude unless the star sits on the ecliptic.

use zij_frames::mean_obliquity_rad;
use zij_time::Epoch;

use crate::util::{normalize_360, wrap_180};

/// Ecliptic longitude (degrees, [0, 360)) where the hour circle at
/// `ra_rad` crosses an ecliptic inclined by `obliquity_rad`.
pub fn hour_circle_longitude(ra_rad: f64, obliquity_rad: f64) -> f64 {
    let lon = (ra_rad.sin() * obliquity_rad.cos()).atan2(ra_rad.cos());
    normalize_360(lon.to_degrees())
}

/// [`hour_circle_longitude`] using the mean obliquity at `epoch`.
pub fn hour_circle_longitude_at(ra_rad: f64, epoch: Epoch) -> f64 {
    hour_circle_longitude(ra_rad, mean_obliquity_rad(epoch.centuries()))
}

/// Projected minus direct ecliptic longitude, wrapped to (−180, 180].
pub fn ecliptic_offset(projected_deg: f64, direct_deg: f64) -> f64 {
    wrap_180(projected_deg - direct_deg)
}
