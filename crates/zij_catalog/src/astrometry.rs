//! Catalog star → apparent direction on the true equator and ecliptic of date.
//!
//! Pipeline:
//! 1. J2000.0 unit vector from catalog RA/Dec.
//! 2. Linear proper motion over the elapsed Julian years.
//! 3. IAU 2006 precession to the mean equator of date.
//! 4. IAU 2000B nutation to the true equator of date.
//! 5. Rotation by the true obliquity for ecliptic coordinates.
//!
//! Annual parallax, aberration and light deflection are not applied: these
//! are astrometric positions referred to the equinox of date.

use zij_frames::{
    ARCSEC_TO_RAD, SphericalCoords, cartesian_to_spherical, mat_mul, mat_vec, mean_obliquity_rad,
    nutation, nutation_matrix, precession_matrix, rot_x, spherical_to_cartesian,
};
use zij_time::Epoch;

use crate::catalog::CatalogStar;

/// Milliarcseconds to radians.
const MAS_TO_RAD: f64 = ARCSEC_TO_RAD / 1000.0;

/// A star's position of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPosition {
    /// Right ascension on the true equator of date, degrees [0, 360).
    pub ra_deg: f64,
    /// Declination on the true equator of date, degrees.
    pub dec_deg: f64,
    /// Distance in parsecs, infinite when the parallax is not positive.
    pub distance_pc: f64,
    /// Longitude on the true ecliptic of date, degrees [0, 360).
    pub ecl_lon_deg: f64,
    /// Latitude on the true ecliptic of date, degrees.
    pub ecl_lat_deg: f64,
}

impl StarPosition {
    /// Right ascension in radians.
    pub fn ra_rad(&self) -> f64 {
        self.ra_deg.to_radians()
    }
}

/// J2000.0 unit vector advanced by proper motion over `years`.
fn space_motion(star: &CatalogStar, years: f64) -> [f64; 3] {
    let (sa, ca) = star.ra_deg.to_radians().sin_cos();
    let (sd, cd) = star.dec_deg.to_radians().sin_cos();
    let pm_ra = star.pm_ra_mas_yr * MAS_TO_RAD;
    let pm_dec = star.pm_dec_mas_yr * MAS_TO_RAD;
    // d(unit vector)/dt along the local east and north directions
    let v = [
        -pm_ra * sa - pm_dec * sd * ca,
        pm_ra * ca - pm_dec * sd * sa,
        pm_dec * cd,
    ];
    let p = spherical_to_cartesian(&SphericalCoords {
        lon_deg: star.ra_deg,
        lat_deg: star.dec_deg,
    });
    [p[0] + v[0] * years, p[1] + v[1] * years, p[2] + v[2] * years]
}

/// Position of `star` at `epoch`.
pub fn position_of_date(star: &CatalogStar, epoch: Epoch) -> StarPosition {
    let t = epoch.centuries();
    let p = space_motion(star, epoch.julian_years());

    let eps = mean_obliquity_rad(t);
    let nut = nutation(t);
    let dpsi = nut.delta_psi_arcsec * ARCSEC_TO_RAD;
    let deps = nut.delta_eps_arcsec * ARCSEC_TO_RAD;

    let npb = mat_mul(&nutation_matrix(eps, dpsi, deps), &precession_matrix(t));
    let equatorial = mat_vec(&npb, &p);
    let ecliptic = mat_vec(&rot_x(eps + deps), &equatorial);

    let eq = cartesian_to_spherical(&equatorial);
    let ecl = cartesian_to_spherical(&ecliptic);

    StarPosition {
        ra_deg: eq.lon_deg,
        dec_deg: eq.lat_deg,
        distance_pc: distance_pc(star.parallax_mas),
        ecl_lon_deg: ecl.lon_deg,
        ecl_lat_deg: ecl.lat_deg,
    }
}

/// Distance in parsecs from a parallax in milliarcseconds.
pub fn distance_pc(parallax_mas: f64) -> f64 {
    if parallax_mas > 0.0 {
        1000.0 / parallax_mas
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StarGroup;

    fn star(ra_deg: f64, dec_deg: f64, pm_ra: f64, pm_dec: f64) -> CatalogStar {
        CatalogStar {
            name: "Test".into(),
            hip: None,
            group: StarGroup::Bright,
            designation: String::new(),
            ra_deg,
            dec_deg,
            pm_ra_mas_yr: pm_ra,
            pm_dec_mas_yr: pm_dec,
            parallax_mas: 10.0,
        }
    }

    #[test]
    fn j2000_near_catalog_position() {
        // At J2000.0 precession is the identity; nutation moves the star by
        // well under an arc-minute.
        let s = star(201.298_25, -11.161_333, 0.0, 0.0);
        let p = position_of_date(&s, Epoch::J2000);
        assert!((p.ra_deg - s.ra_deg).abs() < 1.0 / 60.0, "ra {}", p.ra_deg);
        assert!((p.dec_deg - s.dec_deg).abs() < 1.0 / 60.0, "dec {}", p.dec_deg);
    }

    #[test]
    fn ecliptic_pole_latitude() {
        // The north ecliptic pole, RA 18h, Dec 66.56°.
        let s = star(270.0, 66.560_708, 0.0, 0.0);
        let p = position_of_date(&s, Epoch::J2000);
        assert!(p.ecl_lat_deg > 89.9, "lat {}", p.ecl_lat_deg);
    }

    #[test]
    fn longitude_advances_with_precession() {
        let s = star(201.298_25, -11.161_333, 0.0, 0.0);
        let a = position_of_date(&s, Epoch::new_year(2000)).ecl_lon_deg;
        let b = position_of_date(&s, Epoch::new_year(2100)).ecl_lon_deg;
        // ~5029″ per century, nutation adds at most ±20″
        assert!(((b - a) * 3600.0 - 5029.0).abs() < 40.0, "drift {}", (b - a) * 3600.0);
    }

    #[test]
    fn proper_motion_moves_north() {
        let still = star(100.0, 0.0, 0.0, 0.0);
        let moving = star(100.0, 0.0, 0.0, 1000.0);
        let e = Epoch::new_year(2100);
        let d = position_of_date(&moving, e).dec_deg - position_of_date(&still, e).dec_deg;
        // 1″/yr for 100 years
        assert!((d * 3600.0 - 100.0).abs() < 0.5, "d = {}", d * 3600.0);
    }

    #[test]
    fn distances() {
        assert!((distance_pc(100.0) - 10.0).abs() < 1e-12);
        assert!(distance_pc(0.0).is_infinite());
        assert!(distance_pc(-1.0).is_infinite());
    }
}
