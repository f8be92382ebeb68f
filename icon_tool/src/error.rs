//! Error taxonomy for the icon conversion pipeline.
//!
//! The three startup failures (raster engine down, SVG frontend down,
//! missing source file) each carry their own user-visible remediation
//! text; everything else propagates unchanged and aborts the run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The pixel backend could not produce a probe surface.
    #[error("raster engine (tiny-skia) is not operational: {detail}\n{hint}")]
    RasterEngine { detail: String, hint: &'static str },

    /// The vector frontend could not parse the built-in probe document.
    #[error(
        "svg frontend (usvg) is not operational: {detail}\n\
         reinstall this tool, or rebuild it with `cargo build --release` so the usvg adapter is linked in"
    )]
    SvgFrontend { detail: String },

    /// The source vector file is absent at the resolved path.
    #[error("cannot find {}", .0.display())]
    MissingSource(PathBuf),

    #[error("cannot determine the program's own location: {0}")]
    ProgramLocation(io::Error),

    #[error("failed to read {}: {source}", .path.display())]
    ReadSource { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", .path.display())]
    ParseSvg { path: PathBuf, source: usvg::Error },

    #[error("failed to allocate a {size}x{size} pixmap")]
    PixmapAlloc { size: u32 },

    #[error("failed to encode {}: {detail}", .path.display())]
    EncodePng { path: PathBuf, detail: String },

    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },
}

impl Error {
    pub(crate) fn raster_engine(detail: impl Into<String>) -> Self {
        let hint = if cfg!(target_os = "windows") {
            "Windows: reinstall from the official package; it bundles the raster engine"
        } else if cfg!(target_os = "macos") {
            "macOS: reinstall via `brew reinstall icon_tool` or rebuild with `cargo build --release`"
        } else {
            "Linux: rebuild with default features (`cargo build --release`)"
        };
        Error::RasterEngine {
            detail: detail.into(),
            hint,
        }
    }
}
