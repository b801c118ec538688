//! Rasterization collaborator: turns the card SVG into pixels via resvg.

use std::sync::Arc;

use crate::domain::ExportError;

/// Export oversampling factor for high-density output.
pub const EXPORT_OVERSAMPLE: f32 = 3.0;

/// Rasterizes SVG markup at the given scale.
///
/// Text is shaped with whatever system fonts are installed; the card only
/// references generic families (serif, sans-serif, monospace).
pub fn rasterize(svg: &str, scale: f32) -> Result<tiny_skia::Pixmap, ExportError> {
    let mut opts = usvg::Options::default();
    let mut fontdb = fontdb::Database::new();
    fontdb.load_system_fonts();
    opts.fontdb = Arc::new(fontdb);

    let rtree =
        usvg::Tree::from_str(svg, &opts).map_err(|e| ExportError::InvalidSvg(e.to_string()))?;

    let size = rtree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(ExportError::PixmapAllocation { width, height })?;

    resvg::render(
        &rtree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(pixmap)
}

/// Encodes a pixmap as PNG bytes at full quality.
pub fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, ExportError> {
    pixmap
        .encode_png()
        .map_err(|e| ExportError::PngEncode(e.to_string()))
}
