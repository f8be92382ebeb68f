//! Converts a single vector icon into the raster sizes an extension
//! package needs.
//!
//! The whole pipeline is linear: probe the rendering capability, check
//! that the source vector exists, then rasterize it once per configured
//! size and write `<stem>-<size>.png` for each. Any failure aborts the
//! run; files already written stay on disk.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub mod error;
mod probe;
mod svg_png;

pub use error::{Error, Result};

/// Pixel sizes produced by a default run. Add a size here to emit one
/// more output file.
pub const DEFAULT_SIZES: &[u32] = &[16, 48, 128, 300];

/// Filename of the source vector, looked up next to the executable.
pub const SOURCE_NAME: &str = "chat-icon.svg";

/// Fixed configuration for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the source vector file.
    pub source: PathBuf,
    /// Ordered target sizes; one square PNG is written per entry.
    pub sizes: Vec<u32>,
    /// Directory the PNGs are written into.
    pub out_dir: PathBuf,
}

impl Config {
    /// Production configuration: `chat-icon.svg` next to the executable,
    /// the default size list, outputs in the current working directory.
    pub fn from_program_location() -> Result<Self> {
        let exe = std::env::current_exe().map_err(Error::ProgramLocation)?;
        let dir = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(Config {
            source: dir.join(SOURCE_NAME),
            sizes: DEFAULT_SIZES.to_vec(),
            out_dir: PathBuf::from("."),
        })
    }

    /// Output path for one size, named after the source file stem.
    pub fn output_path(&self, size: u32) -> PathBuf {
        let stem = self
            .source
            .file_stem()
            .and_then(OsStr::to_str)
            .unwrap_or("icon");
        self.out_dir.join(format!("{stem}-{size}.png"))
    }
}

/// Runs the full conversion and returns the written paths in size order.
///
/// Preconditions are checked before the source file is touched; on any
/// precondition failure no output is produced. A failure inside the loop
/// aborts the remaining sizes and leaves earlier outputs in place.
pub fn run(config: &Config) -> Result<Vec<PathBuf>> {
    probe::raster_engine()?;
    probe::svg_frontend()?;

    if !config.source.exists() {
        return Err(Error::MissingSource(config.source.clone()));
    }

    let tree = svg_png::load_tree(&config.source)?;

    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let out_path = config.output_path(size);
        let pixmap = svg_png::rasterize(&tree, size)?;
        svg_png::write_png(&pixmap, &out_path)?;
        println!("converted: {}", out_path.display());
        written.push(out_path);
    }
    Ok(written)
}
