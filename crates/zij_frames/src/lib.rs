//! Frame helpers for star positions of date.
//!
//! Provides the mean obliquity of the ecliptic, IAU 2006 precession (as an
//! accumulated longitude and as a rotation matrix), IAU 2000B nutation,
//! elementary rotations, and unit-vector ↔ spherical conversion.

pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod rotation;
pub mod spherical;

/// Arcseconds to radians.
pub const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / 648_000.0;

pub use nutation::{Nutation, nutation};
pub use obliquity::{mean_obliquity_arcsec, mean_obliquity_deg, mean_obliquity_rad};
pub use precession::{
    general_precession_longitude_arcsec, general_precession_longitude_deg, precession_matrix,
};
pub use rotation::{Mat3, mat_mul, mat_transpose, mat_vec, nutation_matrix, rot_x, rot_z};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
