use glint_renderer::{
    demo_camera, ground_sphere, random_scene, render, render_pixel, sky_gradient, Camera, Color,
    Dielectric, Lambertian, Material, Metal, Point3, Ray, RenderConfig, Scene, Sphere, Vec3,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn three_sphere_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(ground_sphere());
    scene.add(Sphere::new(
        Point3::new(0.0, 0.0, -1.2),
        0.5,
        Arc::new(Material::from(Lambertian::new(Color::new(0.1, 0.2, 0.5)))),
    ));
    scene.add(Sphere::new(
        Point3::new(-1.0, 0.0, -1.0),
        0.5,
        Arc::new(Material::from(Dielectric::new(1.5))),
    ));
    scene.add(Sphere::new(
        Point3::new(1.0, 0.0, -1.0),
        0.5,
        Arc::new(Material::from(Metal::new(Color::new(0.8, 0.6, 0.2), 0.3))),
    ));
    scene
}

fn small_camera() -> Camera {
    Camera::new()
        .with_aspect_ratio(4.0 / 3.0)
        .with_width(24)
        .with_quality(4, 8)
        .with_position(Point3::new(0.0, 0.5, 1.0), Point3::new(0.0, 0.0, -1.0), Vec3::Y)
        .with_lens(60.0, 2.0, 2.0)
}

fn seeded(threads: usize, seed: u64) -> RenderConfig {
    RenderConfig {
        threads,
        seed: Some(seed),
    }
}

fn ppm_bytes(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Vec<u8> {
    let image = render(camera, scene, config, &()).unwrap();
    let mut out = Vec::new();
    image.write_ppm(&mut out).unwrap();
    out
}

#[test]
fn seeded_renders_are_byte_identical() {
    let scene = three_sphere_scene();
    let camera = small_camera();
    let config = RenderConfig {
        threads: 4,
        seed: Some(1234),
    };

    assert_eq!(
        ppm_bytes(&camera, &scene, &config),
        ppm_bytes(&camera, &scene, &config)
    );
}

#[test]
fn thread_count_does_not_change_the_image() {
    let scene = three_sphere_scene();
    let camera = small_camera();

    let single = ppm_bytes(&camera, &scene, &seeded(1, 99));
    let many = ppm_bytes(&camera, &scene, &seeded(6, 99));

    assert_eq!(single, many);
}

#[test]
fn different_seeds_give_different_noise() {
    let scene = three_sphere_scene();
    let camera = small_camera();

    let a = render(&camera, &scene, &seeded(2, 1), &()).unwrap();
    let b = render(&camera, &scene, &seeded(2, 2), &()).unwrap();

    assert_ne!(a.pixels(), b.pixels());
}

#[test]
fn ppm_layout() {
    let scene = three_sphere_scene();
    let camera = small_camera();
    let bytes = ppm_bytes(&camera, &scene, &seeded(2, 5));
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "P3");
    assert_eq!(lines[1], "24 18");
    assert_eq!(lines[2], "255");
    assert_eq!(lines.len(), 3 + 24 * 18);
    for line in &lines[3..] {
        let channels: Vec<u32> = line.split(' ').map(|c| c.parse().unwrap()).collect();
        assert_eq!(channels.len(), 3);
        assert!(channels.iter().all(|&c| c <= 255));
    }
}

#[test]
fn horizon_splits_sky_from_ground() {
    let mut scene = Scene::new();
    scene.add(ground_sphere());

    // Eye sits on top of the ground sphere, so every downward ray hits it
    // and spends its only bounce, while upward rays see the sky.
    let camera = Camera::new()
        .with_width(10)
        .with_quality(1, 1)
        .with_lens(90.0, 0.0, 1.0);

    let image = render(&camera, &scene, &seeded(3, 7), &()).unwrap();
    assert_eq!((image.width(), image.height()), (10, 10));

    // Top row footprint: y in [0.8, 1.0], |x| <= 1 on the plane z = -1
    let a_of = |x: f64, y: f64| 0.5 * (Vec3::new(x, y, -1.0).normalize().y + 1.0);
    let a_min = a_of(1.0, 0.8);
    let a_max = a_of(0.0, 1.0);

    for i in 0..10 {
        let color = image.get(i, 0);
        let a = 2.0 * (1.0 - color.x);
        assert!(a >= a_min - 1e-12 && a <= a_max + 1e-12, "a = {a}");
        assert!((color.y - (1.0 - 0.3 * a)).abs() < 1e-12);
        assert!((color.z - 1.0).abs() < 1e-12);
    }

    for j in 0..5 {
        for i in 0..10 {
            assert_ne!(image.get(i, j), Color::ZERO);
        }
    }
    for j in 5..10 {
        for i in 0..10 {
            assert_eq!(image.get(i, j), Color::ZERO);
        }
    }
}

#[test]
fn gradient_matches_straight_up() {
    let color = sky_gradient(&Ray::new(Point3::ZERO, Vec3::Y));
    assert_eq!(color, Color::new(0.5, 0.7, 1.0));
}

#[test]
fn pixel_error_shrinks_with_sample_count() {
    let scene = three_sphere_scene();
    let mut camera = small_camera().with_lens(60.0, 0.0, 2.0);

    let spread = |camera: &Camera| {
        let estimates: Vec<f64> = (0..300)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                render_pixel(camera, &scene, 12, 9, &mut rng).length()
            })
            .collect();
        let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;
        let variance = estimates.iter().map(|e| (e - mean).powi(2)).sum::<f64>()
            / (estimates.len() - 1) as f64;
        variance.sqrt()
    };

    camera.samples_per_pixel = 1;
    camera.initialize();
    let one = spread(&camera);

    camera.samples_per_pixel = 16;
    camera.initialize();
    let sixteen = spread(&camera);

    // 1/sqrt(n): sixteen times the samples, a quarter of the error
    let ratio = one / sixteen;
    assert!(ratio > 2.5 && ratio < 6.0, "ratio = {ratio}");
}

#[test]
fn demo_scene_renders() {
    let scene = random_scene(&mut StdRng::seed_from_u64(42));
    let camera = demo_camera().with_width(16).with_quality(1, 4);

    let image = render(&camera, &scene, &seeded(2, 42), &()).unwrap();

    assert_eq!(image.width(), 16);
    assert_eq!(image.height(), 9);
    assert!(image.pixels().iter().any(|c| *c != Color::ZERO));
}
