//! IAU 2006 precession.
//!
//! Two views of the same model:
//! - the general precession in ecliptic longitude p_A, the accumulated
//!   westward motion of the equinox that drives every ayanamsa, and
//! - the rotation matrix carrying a mean J2000.0 equatorial vector to the
//!   mean equator and equinox of date.
//!
//! Source: Capitaine, Wallace & Chapront 2003, _Astronomy & Astrophysics_
//! 412, 567-586 (Tables 1 and 3). Public domain (IAU standard).

use crate::ARCSEC_TO_RAD;
use crate::rotation::{Mat3, mat_mul, rot_x, rot_z};

/// Mean obliquity at J2000.0 used by the IAU 2006 angles (ε₀), arcseconds.
const EPS0_ARCSEC: f64 = 84_381.406;

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// `t` is Julian centuries since J2000.0. Positive values mean the equinox
/// has moved westward, so tropical longitudes of stars have increased.
/// The dominant linear term is ~5028.80″/century ≈ 50.29″/year.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// IAU 2006 general precession in ecliptic longitude, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Precession matrix from the mean J2000.0 frame to the mean frame of date.
///
/// Four-angle form `P = R3(χ_A)·R1(−ω_A)·R3(−ψ_A)·R1(ε₀)`.
pub fn precession_matrix(t: f64) -> Mat3 {
    let psi_a = ((((-0.000_000_095_1 * t + 0.000_132_851) * t - 0.001_140_45) * t - 1.079_006_9)
        * t
        + 5038.481_507)
        * t;
    let omega_a = ((((0.000_000_333_7 * t - 0.000_000_467) * t - 0.007_725_03) * t + 0.051_262_3)
        * t
        - 0.025_754)
        * t
        + EPS0_ARCSEC;
    let chi_a = ((((-0.000_000_056_0 * t + 0.000_170_663) * t - 0.001_211_97) * t - 2.381_429_2)
        * t
        + 10.556_403)
        * t;

    let r = mat_mul(&rot_z(-psi_a * ARCSEC_TO_RAD), &rot_x(EPS0_ARCSEC * ARCSEC_TO_RAD));
    let r = mat_mul(&rot_x(-omega_a * ARCSEC_TO_RAD), &r);
    mat_mul(&rot_z(chi_a * ARCSEC_TO_RAD), &r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::{mat_transpose, mat_vec};

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn rate_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn negative_century() {
        assert!(general_precession_longitude_arcsec(-1.0) < 0.0);
    }

    #[test]
    fn matrix_identity_at_j2000() {
        let p = precession_matrix(0.0);
        for (i, row) in p.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((v - expected).abs() < 1e-12, "P[{i}][{j}] = {v}");
            }
        }
    }

    #[test]
    fn matrix_orthonormal() {
        let p = precession_matrix(0.5);
        let pt = mat_transpose(&p);
        let prod = mat_mul(&pt, &p);
        for (i, row) in prod.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((v - expected).abs() < 1e-14, "PᵀP[{i}][{j}] = {v}");
            }
        }
    }

    #[test]
    fn equinox_moves_along_ecliptic() {
        // The J2000 equinox direction, seen in the frame of date one century
        // later, has right ascension ≈ +1.28° (p_A·cos ε for a point on the
        // equator near the equinox).
        let v = mat_vec(&precession_matrix(1.0), &[1.0, 0.0, 0.0]);
        let ra = v[1].atan2(v[0]).to_degrees();
        assert!((ra - 1.2812).abs() < 0.01, "RA = {ra}");
    }
}
