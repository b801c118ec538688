//! Root egui app struct.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::mpsc;

use crate::infra::app_config::NoteflowConfig;
use crate::ui::views::preview::PreviewPane;

use super::messages::{ExportMsg, RefineMsg};
use super::state::UiState;

/// Root egui application for NoteFlow.
pub struct NoteFlowApp {
    pub state: UiState,
    pub config: Arc<RwLock<NoteflowConfig>>,

    pub refine_tx: mpsc::Sender<RefineMsg>,
    pub refine_rx: mpsc::Receiver<RefineMsg>,

    pub export_tx: mpsc::Sender<ExportMsg>,
    pub export_rx: mpsc::Receiver<ExportMsg>,

    pub preview: PreviewPane,
}
