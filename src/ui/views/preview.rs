//! Live card preview.
//!
//! The preview goes through the same surface -> SVG -> raster path as the
//! export, re-rendered on a background thread only when the (content,
//! styling) hash changes.

use std::hash::{Hash, Hasher};
use std::sync::mpsc::{channel, Receiver};

use eframe::egui;
use twox_hash::XxHash64;

use crate::domain::{CardContent, Styling};
use crate::infra::raster;
use crate::render;
use crate::ui::app::NoteFlowApp;
use crate::ui::{spacing, theme, typography};

/// Raster scale for the on-screen preview. Export uses its own factor.
const PREVIEW_SCALE: f32 = 2.0;

#[derive(Default)]
enum PreviewState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

/// Cached preview texture plus the in-flight raster channel.
#[derive(Default)]
pub struct PreviewPane {
    key: Option<u64>,
    state: PreviewState,
    rx: Option<Receiver<Result<egui::ColorImage, String>>>,
    texture: Option<egui::TextureHandle>,
}

fn preview_key(card: &CardContent, styling: &Styling) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    card.hash(&mut hasher);
    styling.hash(&mut hasher);
    hasher.finish()
}

impl NoteFlowApp {
    pub(crate) fn ui_preview(&mut self, ui: &mut egui::Ui) {
        let theme = theme::current_theme();
        let key = preview_key(&self.state.card, &self.state.styling);

        if self.preview.key != Some(key) {
            self.preview.key = Some(key);
            self.preview.state = PreviewState::Loading;

            let (tx, rx) = channel();
            self.preview.rx = Some(rx);

            let card = self.state.card.clone();
            let styling = self.state.styling;
            let ctx = ui.ctx().clone();

            std::thread::spawn(move || {
                let svg = render::compose(&card, &styling).to_svg();
                let result = raster::rasterize(&svg, PREVIEW_SCALE)
                    .map(|pixmap| {
                        egui::ColorImage::from_rgba_unmultiplied(
                            [pixmap.width() as usize, pixmap.height() as usize],
                            pixmap.data(),
                        )
                    })
                    .map_err(|e| e.to_string());
                let _ = tx.send(result);
                ctx.request_repaint();
            });
        }

        if let Some(rx) = &self.preview.rx {
            if let Ok(result) = rx.try_recv() {
                match result {
                    Ok(image) => {
                        self.preview.texture = Some(ui.ctx().load_texture(
                            "card_preview",
                            image,
                            egui::TextureOptions::LINEAR,
                        ));
                        self.preview.state = PreviewState::Ready;
                    }
                    Err(err) => self.preview.state = PreviewState::Error(err),
                }
                self.preview.rx = None;
            }
        }

        ui.vertical_centered(|ui| {
            ui.add_space(spacing::SPACING_XL);

            match &self.preview.state {
                PreviewState::Error(err) => {
                    ui.label(typography::label(format!("Preview failed: {err}"))
                        .color(theme.destructive));
                }
                _ => {
                    if let Some(texture) = &self.preview.texture {
                        let intrinsic = texture.size_vec2() / PREVIEW_SCALE;
                        let avail = ui.available_size() - egui::vec2(48.0, 64.0);
                        let scale = (avail.x / intrinsic.x)
                            .min(avail.y / intrinsic.y)
                            .min(1.0)
                            .max(0.1);
                        ui.add(egui::Image::from_texture(egui::load::SizedTexture::new(
                            texture.id(),
                            intrinsic * scale,
                        )));
                    } else {
                        ui.add_space(120.0);
                        ui.add(egui::Spinner::new().size(24.0));
                    }
                }
            }

            ui.add_space(spacing::SPACING_XL);
            ui.label(typography::tiny("NOTEFLOW TYPOGRAPHY CANVAS").color(theme.text_disabled));
        });
    }
}
