//! SVG to PNG conversion on top of resvg.

use std::fs;
use std::path::Path;

use tiny_skia::{Pixmap, Transform};
use tracing::debug;
use usvg::{Options, Tree};

use crate::error::{Error, Result};

/// Reads and parses the source vector. The tree is parsed once and shared
/// by every size in the render loop.
pub fn load_tree(path: &Path) -> Result<Tree> {
    let svg_data = fs::read(path).map_err(|source| Error::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = Tree::from_data(&svg_data, &Options::default()).map_err(|source| Error::ParseSvg {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        width = tree.size().width(),
        height = tree.size().height(),
        "parsed source vector"
    );
    Ok(tree)
}

/// Rasterizes the tree to a square `size`x`size` pixmap, scaling each axis
/// independently so the output always fills the requested square.
pub fn rasterize(tree: &Tree, size: u32) -> Result<Pixmap> {
    let mut pixmap = Pixmap::new(size, size).ok_or(Error::PixmapAlloc { size })?;

    let svg_size = tree.size();
    let scale_x = size as f32 / svg_size.width();
    let scale_y = size as f32 / svg_size.height();
    let transform = Transform::from_scale(scale_x, scale_y);

    resvg::render(tree, transform, &mut pixmap.as_mut());
    debug!(size, "rasterized");
    Ok(pixmap)
}

pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    let encoded = pixmap.encode_png().map_err(|err| Error::EncodePng {
        path: path.to_path_buf(),
        detail: err.to_string(),
    })?;
    fs::write(path, encoded).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><rect width="64" height="64" fill="#2e8bd8"/></svg>"##;

    const TALL_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="20"><rect width="10" height="20" fill="#000"/></svg>"##;

    fn parse(svg: &str) -> Tree {
        Tree::from_data(svg.as_bytes(), &Options::default()).unwrap()
    }

    #[test]
    fn rasterize_produces_requested_dimensions() {
        let tree = parse(SQUARE_SVG);
        for size in [16, 48, 128, 300] {
            let pixmap = rasterize(&tree, size).unwrap();
            assert_eq!(pixmap.width(), size);
            assert_eq!(pixmap.height(), size);
        }
    }

    #[test]
    fn rasterize_fills_the_square_with_content() {
        let tree = parse(SQUARE_SVG);
        let pixmap = rasterize(&tree, 16).unwrap();
        assert!(pixmap.data().iter().any(|&byte| byte != 0));
    }

    #[test]
    fn non_square_source_is_stretched_to_a_square() {
        let tree = parse(TALL_SVG);
        let pixmap = rasterize(&tree, 32).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (32, 32));
        // first and last pixels are covered once each axis scales independently
        let data = pixmap.data();
        let last = data.len() - 4;
        assert_ne!(&data[0..4], &[0u8, 0, 0, 0][..]);
        assert_ne!(&data[last..], &[0u8, 0, 0, 0][..]);
    }

    #[test]
    fn malformed_svg_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.svg");
        fs::write(&path, "this is not svg").unwrap();
        let err = load_tree(&path).unwrap_err();
        assert!(matches!(err, Error::ParseSvg { .. }));
    }
}
