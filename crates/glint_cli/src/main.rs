mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use glint_renderer::{
    demo_camera, load_scene_file, random_scene, render, write_scene_file, Camera, Progress,
    RenderConfig, Scene,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// Scanline progress on stderr.
struct ScanlineBar(ProgressBar);

impl ScanlineBar {
    fn new(rows: u32) -> Self {
        let bar = ProgressBar::new(rows as u64);
        if let Ok(style) =
            ProgressStyle::with_template("{elapsed_precise} [{bar:40}] {pos}/{len} scanlines")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        Self(bar)
    }
}

impl Progress for ScanlineBar {
    fn scanline_finished(&self, _remaining: u32) {
        self.0.inc(1);
    }
}

fn load_or_generate(args: &Args) -> Result<(Scene, Camera)> {
    match load_scene_file(&args.scene) {
        Ok(loaded) => return Ok(loaded),
        Err(e) => log::warn!(
            "Could not read {}: {}. Generating random scene instead.",
            args.scene.display(),
            e
        ),
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = random_scene(&mut rng);
    let camera = demo_camera();

    if let Some(path) = &args.save_scene {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_scene_file(&scene, &camera, BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("Saved random scene to {}", path.display());
    }

    Ok((scene, camera))
}

fn write_output(image: &glint_renderer::FrameBuffer, output: Option<&Path>) -> Result<()> {
    let Some(path) = output else {
        return image
            .write_ppm(BufWriter::new(io::stdout().lock()))
            .context("Failed to write image to stdout");
    };

    let is_ppm = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        image
            .write_ppm(BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        image
            .to_rgb_image()
            .save(path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
    }

    log::info!("Saved to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Glint");

    let (scene, camera) = load_or_generate(&args)?;

    let config = RenderConfig {
        threads: args.threads,
        seed: args.seed,
    };

    let mut sized = camera.clone();
    sized.initialize();
    let progress = ScanlineBar::new(sized.image_height());

    let image = render(&camera, &scene, &config, &progress).context("Render failed")?;
    progress.0.finish_and_clear();

    write_output(&image, args.output.as_deref())
}
