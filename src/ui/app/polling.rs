use crate::application::{editor, refine};

use super::messages::{ExportMsg, RefineMsg};
use super::NoteFlowApp;

impl NoteFlowApp {
    pub(super) fn poll_refine_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(msg) = self.refine_rx.try_recv() {
            match msg {
                RefineMsg::Done(Ok(refined)) => {
                    self.state.card = refine::apply_refinement(&self.state.card, &refined);
                    self.state.tags_input = editor::format_tags(&self.state.card.tags);
                    self.state.refine_error = None;
                }
                RefineMsg::Done(Err(err)) => {
                    log::warn!("Refinement failed: {err}");
                    self.state.refine_error = Some(err);
                }
            }
            // Either way the in-flight flag clears so a retry is possible.
            self.state.is_refining = false;
            any = true;
        }
        any
    }

    pub(super) fn poll_export_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(msg) = self.export_rx.try_recv() {
            match msg {
                ExportMsg::Done(Ok(path)) => {
                    log::info!("Exported card to {}", path.display());
                    self.state.last_export = Some(path);
                    self.state.export_error = None;
                }
                ExportMsg::Done(Err(err)) => {
                    log::error!("Export failed: {err}");
                    self.state.export_error = Some(err);
                }
            }
            self.state.is_exporting = false;
            any = true;
        }
        any
    }
}
