//! Startup checks for the rendering capability.
//!
//! Two independent probes, run before the source file is ever touched:
//! the raster engine (can tiny-skia give us a surface and put pixels on
//! it?) and the SVG frontend (can usvg parse a trivial document?). Each
//! failure has its own remediation message.

use tiny_skia::{Color, Pixmap};
use usvg::{Options, Tree};

use crate::error::{Error, Result};

const PROBE_SIZE: u32 = 4;

const PROBE_SVG: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><rect width="4" height="4" fill="#000"/></svg>"##;

pub fn raster_engine() -> Result<()> {
    let mut pixmap = Pixmap::new(PROBE_SIZE, PROBE_SIZE)
        .ok_or_else(|| Error::raster_engine("cannot allocate the probe surface"))?;
    pixmap.fill(Color::from_rgba8(0, 0, 0, 255));
    if pixmap.data().iter().all(|&byte| byte == 0) {
        return Err(Error::raster_engine("probe fill produced no pixels"));
    }
    Ok(())
}

pub fn svg_frontend() -> Result<()> {
    Tree::from_data(PROBE_SVG, &Options::default()).map_err(|err| Error::SvgFrontend {
        detail: err.to_string(),
    })?;
    Ok(())
}
