//! Vector helpers glam doesn't provide in the form the tracer needs.

use crate::Vec3;

/// Per-component magnitude below which a vector is treated as degenerate.
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Returns true if every component of `v` is within [`NEAR_ZERO_EPSILON`] of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.abs().max_element() < NEAR_ZERO_EPSILON
}

/// Mirror `v` about the surface normal `n`.
///
/// `n` is expected to be unit length.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Bend the unit vector `uv` through a surface with normal `n` by Snell's law.
///
/// `etai_over_etat` is the ratio of the refractive index on the incident side
/// to the index on the transmitted side. The result is split into the parts
/// perpendicular and parallel to `n`.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}
