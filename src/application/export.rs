//! Export pipeline: card SVG in, a PNG file on disk out.

use std::path::{Path, PathBuf};

use crate::domain::ExportError;
use crate::infra::app_config::NoteflowConfig;
use crate::infra::raster::{encode_png, rasterize, EXPORT_OVERSAMPLE};

/// Filename for an export captured at `now_millis` (Unix epoch milliseconds).
pub fn export_filename(now_millis: i64) -> String {
    format!("noteflow-{now_millis}.png")
}

/// Where exports land: the configured directory, else the user's download
/// directory, else the home directory, else the working directory.
pub fn export_destination(config: &NoteflowConfig) -> PathBuf {
    if let Some(dir) = &config.export_dir {
        return dir.clone();
    }
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Rasterizes the card at the export oversampling factor and writes the PNG.
///
/// Returns the written path. On any failure nothing is written and the error
/// is returned for the caller to surface; card state is never involved.
pub fn export_card(svg: &str, dest_dir: &Path, now_millis: i64) -> Result<PathBuf, ExportError> {
    let pixmap = rasterize(svg, EXPORT_OVERSAMPLE)?;
    let png = encode_png(&pixmap)?;

    let path = dest_dir.join(export_filename(now_millis));
    std::fs::create_dir_all(dest_dir)?;
    std::fs::write(&path, png)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_differ_per_millisecond() {
        let a = export_filename(1_700_000_000_000);
        let b = export_filename(1_700_000_000_001);
        assert_ne!(a, b);
        assert!(a.starts_with("noteflow-") && a.ends_with(".png"));
    }

    #[test]
    fn configured_export_dir_wins() {
        let config = NoteflowConfig {
            export_dir: Some(PathBuf::from("/tmp/cards")),
            ..Default::default()
        };
        assert_eq!(export_destination(&config), PathBuf::from("/tmp/cards"));
    }
}
