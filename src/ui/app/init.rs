use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::mpsc;

use crate::ui::views::preview::PreviewPane;

use super::state::UiState;
use super::NoteFlowApp;

impl NoteFlowApp {
    pub fn new_egui(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = crate::infra::app_config::load_config();

        let (refine_tx, refine_rx) = mpsc::channel(8);
        let (export_tx, export_rx) = mpsc::channel(8);

        Self {
            state: UiState::default(),
            config: Arc::new(RwLock::new(config)),
            refine_tx,
            refine_rx,
            export_tx,
            export_rx,
            preview: PreviewPane::default(),
        }
    }
}
