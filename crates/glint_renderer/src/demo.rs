//! The classic "many spheres" demo scene.

use crate::{Camera, Color, Dielectric, Lambertian, Material, Metal, Scene, Sphere};
use glint_math::{gen_f64, gen_range, random_vec3, random_vec3_range, Point3, Vec3};
use rand::RngCore;
use std::sync::Arc;

/// The large gray sphere every scene stands on.
pub fn ground_sphere() -> Sphere {
    Sphere::new(
        Point3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)).into()),
    )
}

/// Build the demo scene: a grid of small random spheres around three big ones.
pub fn random_scene(rng: &mut dyn RngCore) -> Scene {
    let mut world = Scene::new();
    world.add(ground_sphere());

    // One glass material is enough for every glass sphere
    let glass = Arc::new(Material::from(Dielectric::new(1.5)));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f64(rng);
            let center = Point3::new(
                a as f64 + 0.9 * gen_f64(rng),
                0.2,
                b as f64 + 0.9 * gen_f64(rng),
            );

            if (center - Point3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material: Arc<Material> = if choose_mat < 0.8 {
                // Diffuse
                let albedo = random_vec3(rng) * random_vec3(rng);
                Arc::new(Lambertian::new(albedo).into())
            } else if choose_mat < 0.95 {
                // Metal
                let albedo = random_vec3_range(rng, 0.1, 1.0);
                let fuzz = gen_range(rng, 0.0, 0.5);
                Arc::new(Metal::new(albedo, fuzz).into())
            } else {
                glass.clone()
            };
            world.add(Sphere::new(center, 0.2, material));
        }
    }

    world.add(Sphere::new(Point3::new(0.0, 1.0, 0.0), 1.0, glass));
    world.add(Sphere::new(
        Point3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1)).into()),
    ));
    world.add(Sphere::new(
        Point3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0).into()),
    ));

    log::info!("Generated random scene with {} spheres", world.len());
    world
}

/// Camera framing [`random_scene`] with a shallow depth of field.
pub fn demo_camera() -> Camera {
    Camera::new()
        .with_aspect_ratio(16.0 / 9.0)
        .with_width(400)
        .with_quality(50, 10)
        .with_position(Point3::new(13.0, 2.0, 3.0), Point3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0)
}
