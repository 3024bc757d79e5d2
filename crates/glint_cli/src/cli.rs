use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Render a scene of spheres with a brute-force path tracer.
#[derive(Debug, Parser)]
#[command(name = "glint", version)]
pub struct Args {
    /// Scene description file; a random scene is generated if it can't be read
    #[arg(short, long, default_value = "sphere_data.txt")]
    pub scene: PathBuf,

    /// Output image (.ppm is written as text, other extensions via the image crate).
    /// Writes PPM to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Worker threads, 0 = all available cores
    #[arg(short = 'j', long, default_value_t = 0)]
    pub threads: usize,

    /// Seed for reproducible renders and random scenes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save the generated random scene to this path
    #[arg(long)]
    pub save_scene: Option<PathBuf>,

    /// Logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
