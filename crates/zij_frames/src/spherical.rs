//! Cartesian ↔ spherical conversion for direction vectors.

use std::f64::consts::PI;

/// Spherical direction: longitude and latitude in degrees.
///
/// Used both for right ascension/declination and for ecliptic
/// longitude/latitude; the frame is implied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
}

/// Convert a Cartesian vector to spherical direction.
///
/// The vector need not be normalized. The zero vector maps to (0, 0).
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
        };
    }

    let lon = y.atan2(x);
    let lat = (z / r).clamp(-1.0, 1.0).asin();
    let lon_deg = if lon < 0.0 { lon + 2.0 * PI } else { lon }.to_degrees();

    SphericalCoords {
        // atan2 can return -0.0 → 2π which rounds to exactly 360.0
        lon_deg: if lon_deg >= 360.0 { 0.0 } else { lon_deg },
        lat_deg: lat.to_degrees(),
    }
}

/// Convert a spherical direction to a unit Cartesian vector.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon = s.lon_deg.to_radians();
    let lat = s.lat_deg.to_radians();
    let cos_lat = lat.cos();
    [cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin()]
}
