//! Random sampling primitives.
//!
//! Every sampler takes the generator explicitly so callers decide how
//! entropy is seeded and shared. Render tasks each own a generator.

use crate::Vec3;
use rand::{Rng, RngCore};

/// Lower bound on the squared length accepted by [`random_unit_vector`].
/// Keeps the normalization away from a near-zero divisor.
const UNIT_VECTOR_MIN_LEN_SQ: f64 = 1e-160;

/// Uniform value in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen::<f64>()
}

/// Uniform value in [min, max).
#[inline]
pub fn gen_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    min + (max - min) * gen_f64(rng)
}

/// Vector with each component uniform in [0, 1).
pub fn random_vec3(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng))
}

/// Vector with each component uniform in [min, max).
pub fn random_vec3_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        gen_range(rng, min, max),
        gen_range(rng, min, max),
        gen_range(rng, min, max),
    )
}

/// Uniform point inside the unit disk in the XY plane.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_range(rng, -1.0, 1.0), gen_range(rng, -1.0, 1.0), 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Uniform direction on the unit sphere, by rejection from the enclosing cube.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = random_vec3_range(rng, -1.0, 1.0);
        let len_sq = p.length_squared();
        if UNIT_VECTOR_MIN_LEN_SQ < len_sq && len_sq <= 1.0 {
            return p / len_sq.sqrt();
        }
    }
}
