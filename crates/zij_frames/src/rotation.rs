//! Elementary frame rotations on plain 3×3 arrays.
//!
//! Sign convention follows SOFA: `rot_x(φ)` and `rot_z(φ)` rotate the
//! coordinate frame (not the vector) by +φ, so a vector expressed in the old
//! frame is re-expressed in the rotated one.

/// Row-major 3×3 matrix.
pub type Mat3 = [[f64; 3]; 3];

/// Frame rotation about the x-axis.
pub fn rot_x(phi: f64) -> Mat3 {
    let (s, c) = phi.sin_cos();
    [[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]]
}

/// Frame rotation about the z-axis.
pub fn rot_z(phi: f64) -> Mat3 {
    let (s, c) = phi.sin_cos();
    [[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]]
}

/// Matrix product `a · b`.
pub fn mat_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

/// Matrix-vector product `m · v`.
pub fn mat_vec(m: &Mat3, v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Transpose (the inverse, for a rotation).
pub fn mat_transpose(m: &Mat3) -> Mat3 {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Nutation matrix from the mean to the true equator and equinox of date.
///
/// `N = R1(−(ε + Δε))·R3(−Δψ)·R1(ε)`, all angles in radians.
pub fn nutation_matrix(mean_obliquity: f64, delta_psi: f64, delta_eps: f64) -> Mat3 {
    let r = mat_mul(&rot_z(-delta_psi), &rot_x(mean_obliquity));
    mat_mul(&rot_x(-(mean_obliquity + delta_eps)), &r)
}
