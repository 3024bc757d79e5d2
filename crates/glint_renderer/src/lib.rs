//! Glint renderer - CPU path tracing
//!
//! A brute-force Monte Carlo path tracer over analytic spheres. Rays are
//! tested against every surface in the scene, scattered by one of three
//! materials, and averaged per pixel across a rayon worker pool.

mod camera;
mod demo;
mod framebuffer;
mod hittable;
mod material;
mod ray;
mod renderer;
mod scene;
mod scene_file;
mod sphere;

pub use camera::Camera;
pub use demo::{demo_camera, ground_sphere, random_scene};
pub use framebuffer::{color_to_rgb, linear_to_gamma, FrameBuffer};
pub use hittable::{HitRecord, Hittable};
pub use material::{Color, Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use ray::Ray;
pub use renderer::{
    ray_color, render, render_pixel, sky_gradient, Progress, RenderConfig, RenderError,
};
pub use scene::{Scene, Surface};
pub use scene_file::{load_scene_file, parse_scene, write_scene_file, SceneFileError};
pub use sphere::Sphere;

/// Re-export the math types from glint_math
pub use glint_math::{Interval, Point3, Vec3};
