//! Glint math: vectors, intervals and random sampling for the path tracer.
//!
//! Everything is double precision. `Vec3`, `Point3` and the renderer's
//! `Color` are all the same glam `DVec3`; the aliases only document intent.

pub use glam::DVec3;

mod interval;
mod random;
mod vector;

pub use interval::Interval;
pub use random::{
    gen_f64, gen_range, random_in_unit_disk, random_unit_vector, random_vec3, random_vec3_range,
};
pub use vector::{near_zero, reflect, refract, NEAR_ZERO_EPSILON};

/// A direction or displacement in world space.
pub type Vec3 = DVec3;

/// A position in world space.
pub type Point3 = DVec3;
