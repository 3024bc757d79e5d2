//! Plain-text scene description files.
//!
//! One item per line:
//!
//! ```text
//! # comment
//! c lookFrom 13 2 3
//! c vfov 20
//! 0 1 0 1 dielectric 1.5
//! -4 1 0 1 lambertian 0.4 0.2 0.1
//! 4 1 0 1 metal 0.7 0.6 0.5 0.0
//! ```
//!
//! Camera lines start with `c`; every other line is a sphere given as
//! `x y z radius material params...`. The ground sphere is implied and
//! always comes first. Lines that don't parse are skipped with a warning.

use crate::{
    demo::ground_sphere, Camera, Color, Dielectric, Lambertian, Material, Metal, Scene, Sphere,
    Surface,
};
use glint_math::{Point3, Vec3};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Widest image a scene file may request.
pub const MAX_IMAGE_WIDTH: u32 = 16384;

/// Errors that can occur while reading a scene file.
#[derive(Error, Debug)]
pub enum SceneFileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Why a single line was skipped.
#[derive(Error, Debug, PartialEq)]
enum LineError {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("unknown material type: {0}")]
    UnknownMaterial(String),

    #[error("unknown camera parameter: {0}")]
    UnknownCameraParameter(String),
}

type LineResult<T> = Result<T, LineError>;

/// Load a scene and camera from a file on disk.
pub fn load_scene_file(path: impl AsRef<Path>) -> Result<(Scene, Camera), SceneFileError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let (scene, camera) = parse_scene(BufReader::new(file))?;
    log::info!("Loaded {} spheres from {}", scene.len(), path.display());
    Ok((scene, camera))
}

/// Parse a scene description, starting from the default camera.
pub fn parse_scene<R: BufRead>(reader: R) -> Result<(Scene, Camera), SceneFileError> {
    let mut scene = Scene::new();
    let mut camera = Camera::default();
    scene.add(ground_sphere());

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let result = if fields[0] == "c" {
            apply_camera_parameter(&mut camera, &fields[1..])
        } else {
            parse_sphere(&fields).map(|sphere| scene.add(sphere))
        };

        if let Err(e) = result {
            log::warn!("Skipping scene line {}: {} ({:?})", index + 1, e, trimmed);
        }
    }

    Ok((scene, camera))
}

fn parse_number<T: FromStr>(field: &str) -> LineResult<T> {
    field
        .parse()
        .map_err(|_| LineError::InvalidNumber(field.to_string()))
}

/// Finite and strictly positive, as an aspect-ratio side must be.
fn parse_positive(field: &str) -> LineResult<f64> {
    let value: f64 = parse_number(field)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(LineError::InvalidNumber(field.to_string()));
    }
    Ok(value)
}

fn require(fields: &[&str], expected: usize) -> LineResult<()> {
    if fields.len() < expected {
        return Err(LineError::TooFewFields {
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn parse_vec3(fields: &[&str]) -> LineResult<Vec3> {
    require(fields, 3)?;
    Ok(Vec3::new(
        parse_number(fields[0])?,
        parse_number(fields[1])?,
        parse_number(fields[2])?,
    ))
}

fn parse_sphere(fields: &[&str]) -> LineResult<Sphere> {
    require(fields, 5)?;
    let center: Point3 = parse_vec3(&fields[0..3])?;
    let radius: f64 = parse_number(fields[3])?;
    let params = &fields[5..];

    let material = match fields[4] {
        "lambertian" => Material::from(Lambertian::new(parse_vec3(params)?)),
        "metal" => {
            require(params, 4)?;
            Material::from(Metal::new(parse_vec3(params)?, parse_number(params[3])?))
        }
        "dielectric" => {
            require(params, 1)?;
            Material::from(Dielectric::new(parse_number(params[0])?))
        }
        other => return Err(LineError::UnknownMaterial(other.to_string())),
    };

    Ok(Sphere::new(center, radius, Arc::new(material)))
}

fn apply_camera_parameter(camera: &mut Camera, fields: &[&str]) -> LineResult<()> {
    require(fields, 2)?;
    let values = &fields[1..];

    match fields[0] {
        "ratio" => {
            require(values, 2)?;
            let w = parse_positive(values[0])?;
            let h = parse_positive(values[1])?;
            camera.aspect_ratio = w / h;
        }
        "width" => {
            let width: u32 = parse_number(values[0])?;
            if width == 0 || width > MAX_IMAGE_WIDTH {
                return Err(LineError::InvalidNumber(values[0].to_string()));
            }
            camera.image_width = width;
        }
        "samplesPerPixel" => camera.samples_per_pixel = parse_number(values[0])?,
        "maxDepth" => camera.max_depth = parse_number(values[0])?,
        "vfov" => camera.vfov = parse_number(values[0])?,
        "lookFrom" => camera.look_from = parse_vec3(values)?,
        "lookAt" => camera.look_at = parse_vec3(values)?,
        "vup" => camera.vup = parse_vec3(values)?,
        "defocusAngle" => camera.defocus_angle = parse_number(values[0])?,
        "focusDist" => camera.focus_dist = parse_number(values[0])?,
        other => return Err(LineError::UnknownCameraParameter(other.to_string())),
    }

    Ok(())
}

/// Write `scene` and `camera` in the format [`parse_scene`] reads.
///
/// Spheres equal to the implied ground sphere are left out.
pub fn write_scene_file<W: Write>(scene: &Scene, camera: &Camera, mut out: W) -> io::Result<()> {
    writeln!(out, "# glint scene")?;
    writeln!(out, "c ratio {} 1", camera.aspect_ratio)?;
    writeln!(out, "c width {}", camera.image_width)?;
    writeln!(out, "c samplesPerPixel {}", camera.samples_per_pixel)?;
    writeln!(out, "c maxDepth {}", camera.max_depth)?;
    writeln!(out, "c vfov {}", camera.vfov)?;
    write_vec3_line(&mut out, "c lookFrom", camera.look_from)?;
    write_vec3_line(&mut out, "c lookAt", camera.look_at)?;
    write_vec3_line(&mut out, "c vup", camera.vup)?;
    writeln!(out, "c defocusAngle {}", camera.defocus_angle)?;
    writeln!(out, "c focusDist {}", camera.focus_dist)?;

    let ground = ground_sphere();
    for surface in scene.iter() {
        let Surface::Sphere(sphere) = surface;
        if *sphere == ground {
            continue;
        }

        let c = sphere.center();
        write!(out, "{} {} {} {} ", c.x, c.y, c.z, sphere.radius())?;
        match sphere.material().as_ref() {
            Material::Lambertian(m) => {
                let a: Color = m.albedo();
                writeln!(out, "lambertian {} {} {}", a.x, a.y, a.z)?;
            }
            Material::Metal(m) => {
                let a = m.albedo();
                writeln!(out, "metal {} {} {} {}", a.x, a.y, a.z, m.fuzz())?;
            }
            Material::Dielectric(m) => {
                writeln!(out, "dielectric {}", m.refraction_index())?;
            }
        }
    }

    out.flush()
}

fn write_vec3_line<W: Write>(out: &mut W, prefix: &str, v: Vec3) -> io::Result<()> {
    writeln!(out, "{} {} {} {}", prefix, v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random_scene;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spheres(scene: &Scene) -> Vec<Sphere> {
        scene
            .iter()
            .map(|s| match s {
                Surface::Sphere(sphere) => sphere.clone(),
            })
            .collect()
    }

    #[test]
    fn test_parse_spheres_and_camera() {
        let text = "\
# three spheres
c lookFrom 13 2 3
c lookAt 0 0 0
c ratio 16 9
c width 320
c samplesPerPixel 4
c maxDepth 7
c vfov 20
c defocusAngle 0.6
c focusDist 10

0 1 0 1 dielectric 1.5
-4 1 0 1 lambertian 0.4 0.2 0.1
4 1 0 1 metal 0.7 0.6 0.5 0.25
";
        let (scene, camera) = parse_scene(text.as_bytes()).unwrap();
        let spheres = spheres(&scene);

        assert_eq!(spheres.len(), 4);
        assert_eq!(spheres[0], ground_sphere());
        assert_eq!(
            spheres[1].material().as_ref(),
            &Material::from(Dielectric::new(1.5))
        );
        assert_eq!(spheres[2].center(), Point3::new(-4.0, 1.0, 0.0));
        assert_eq!(
            spheres[3].material().as_ref(),
            &Material::from(Metal::new(Color::new(0.7, 0.6, 0.5), 0.25))
        );

        assert_eq!(camera.look_from, Point3::new(13.0, 2.0, 3.0));
        assert_eq!(camera.aspect_ratio, 16.0 / 9.0);
        assert_eq!(camera.image_width, 320);
        assert_eq!(camera.samples_per_pixel, 4);
        assert_eq!(camera.max_depth, 7);
        assert_eq!(camera.vfov, 20.0);
        assert_eq!(camera.defocus_angle, 0.6);
        assert_eq!(camera.focus_dist, 10.0);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let text = "\
1 2 3
1 2 3 x lambertian 1 1 1
1 2 3 1 plastic 1 1 1
1 2 3 1 metal 1 1 1
1 2 3 1 dielectric
c width lots
c fov 30
c lookAt 1 2
0 0 -1 0.5 lambertian 0.1 0.2 0.3
";
        let (scene, camera) = parse_scene(text.as_bytes()).unwrap();

        assert_eq!(scene.len(), 2);
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn test_line_errors() {
        assert_eq!(
            parse_sphere(&["1", "2"]).unwrap_err(),
            LineError::TooFewFields {
                expected: 5,
                found: 2
            }
        );
        assert_eq!(
            parse_sphere(&["1", "2", "3", "1", "velvet"]).unwrap_err(),
            LineError::UnknownMaterial("velvet".to_string())
        );
        assert_eq!(
            parse_sphere(&["1", "2", "3", "1", "dielectric", "glass"]).unwrap_err(),
            LineError::InvalidNumber("glass".to_string())
        );
    }

    #[test]
    fn test_out_of_range_camera_values_are_skipped() {
        let text = "\
c ratio 0 1
c ratio 16 -9
c ratio inf 1
c ratio NaN 1
c width 0
c width 4000000000
c width 16385
";
        let (_, camera) = parse_scene(text.as_bytes()).unwrap();
        assert_eq!(camera, Camera::default());

        assert_eq!(
            apply_camera_parameter(&mut Camera::default(), &["ratio", "1", "0"]).unwrap_err(),
            LineError::InvalidNumber("0".to_string())
        );

        let (_, camera) = parse_scene("c width 16384\nc ratio 4 2\n".as_bytes()).unwrap();
        assert_eq!(camera.image_width, MAX_IMAGE_WIDTH);
        assert_eq!(camera.aspect_ratio, 2.0);
    }

    #[test]
    fn test_write_then_parse_reproduces_scene() {
        let scene = random_scene(&mut StdRng::seed_from_u64(21));
        let camera = crate::demo_camera();

        let mut out = Vec::new();
        write_scene_file(&scene, &camera, &mut out).unwrap();
        let (parsed, parsed_camera) = parse_scene(out.as_slice()).unwrap();

        assert_eq!(spheres(&parsed), spheres(&scene));
        assert_eq!(parsed_camera, camera);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_scene_file("/nonexistent/glint/scene.txt").unwrap_err();
        assert!(matches!(err, SceneFileError::Io(_)));
    }
}
