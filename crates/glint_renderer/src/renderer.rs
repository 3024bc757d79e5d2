//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with configurable depth
//! - Anti-aliasing via multi-sampling
//! - One task per pixel on a bounded rayon pool

use crate::{Camera, Color, FrameBuffer, Hittable, Ray};
use glint_math::Interval;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;
use thiserror::Error;

/// Nearest hit distance accepted, to avoid re-hitting the surface a ray left.
const T_MIN: f64 = 0.001;

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Render configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Worker count; 0 uses the available hardware parallelism
    pub threads: usize,
    /// Base seed for the per-pixel generators; `None` picks one at random
    pub seed: Option<u64>,
}

impl RenderConfig {
    /// Resolve `threads` to a concrete worker count.
    pub fn worker_count(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }
}

/// Receives render progress. Informational only.
pub trait Progress: Sync {
    /// Called each time a full row of pixels is done.
    fn scanline_finished(&self, remaining: u32);
}

impl Progress for () {
    fn scanline_finished(&self, _remaining: u32) {}
}

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and multiplying in their attenuation.
pub fn ray_color(ray: &Ray, depth: u32, world: &dyn Hittable, rng: &mut dyn RngCore) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f64::INFINITY)) else {
        return sky_gradient(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, depth - 1, world, rng),
        None => Color::ZERO,
    }
}

/// Background seen by rays that escape the scene: white at the bottom
/// blending to sky blue at the top.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    white * (1.0 - a) + blue * a
}

/// Render a single pixel with multi-sampling.
///
/// `camera` must already be initialized.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, camera.max_depth, world, rng);
    }

    pixel_color * camera.pixel_samples_scale()
}

/// Generator for one pixel, independent of which worker runs it.
fn pixel_rng(seed: u64, pixel_index: u64) -> StdRng {
    StdRng::seed_from_u64(splitmix64(seed ^ splitmix64(pixel_index)))
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Render the entire scene to a frame buffer.
///
/// The camera is initialized from its configuration first. Pixels are
/// evaluated in parallel on `config.worker_count()` threads and each pixel
/// is written exactly once; the call returns after every pixel is done.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    progress: &dyn Progress,
) -> Result<FrameBuffer, RenderError> {
    let mut camera = camera.clone();
    camera.initialize();

    let width = camera.image_width;
    let height = camera.image_height();
    let mut image = FrameBuffer::new(width, height);
    if width == 0 {
        return Ok(image);
    }

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let threads = config.worker_count();
    log::debug!("Render seed: {}", seed);
    log::info!(
        "Rendering {}x{} @ {} spp, depth {} on {} threads",
        width,
        height,
        camera.samples_per_pixel,
        camera.max_depth,
        threads
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("glint-worker-{}", i))
        .build()?;

    let start = Instant::now();
    let rows_remaining = AtomicU32::new(height);
    let camera = &camera;

    pool.install(|| {
        image
            .pixels_mut()
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(j, row)| {
                row.par_iter_mut().enumerate().for_each(|(i, pixel)| {
                    let index = j as u64 * width as u64 + i as u64;
                    let mut rng = pixel_rng(seed, index);
                    *pixel = render_pixel(camera, world, i as u32, j as u32, &mut rng);
                });

                let remaining = rows_remaining.fetch_sub(1, Ordering::Relaxed) - 1;
                progress.scanline_finished(remaining);
            });
    });

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}
