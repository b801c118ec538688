//! User-triggered operations: refine, export, clear.

use crate::application::{export, refine};
use crate::infra::gemini::{GeminiClient, GeminiConfig, NoteRefiner};
use crate::render;

use super::messages::{ExportMsg, RefineMsg};
use super::NoteFlowApp;

impl NoteFlowApp {
    /// Kicks off a refinement of the current body text.
    ///
    /// Empty bodies and in-flight refinements are no-ops; the collaborator is
    /// never invoked for either.
    pub fn start_refine(&mut self) {
        if !refine::should_refine(&self.state.card.body, self.state.is_refining) {
            return;
        }

        self.state.is_refining = true;
        self.state.refine_error = None;

        let notes = self.state.card.body.clone();
        let config = self.config.read().clone();
        let tx = self.refine_tx.clone();

        tokio::spawn(async move {
            let result = match GeminiConfig::resolve(&config) {
                Ok(gemini) => GeminiClient::new(gemini)
                    .refine(&notes)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            let _ = tx.send(RefineMsg::Done(result)).await;
        });
    }

    /// Renders the current card and writes it as a PNG.
    ///
    /// Exports are serialized: a second request while one is running is
    /// ignored. Card state is never touched by an export.
    pub fn start_export(&mut self) {
        if self.state.is_exporting {
            return;
        }

        self.state.is_exporting = true;
        self.state.export_error = None;

        let svg = render::compose(&self.state.card, &self.state.styling).to_svg();
        let dest = export::export_destination(&self.config.read());
        let tx = self.export_tx.clone();

        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                let now = chrono::Utc::now().timestamp_millis();
                export::export_card(&svg, &dest, now)
            })
            .await
            .map_err(|e| e.to_string())
            .and_then(|r| r.map_err(|e| e.to_string()));
            let _ = tx.send(ExportMsg::Done(result)).await;
        });
    }

    /// Resets title, body, and tags; author and date survive.
    pub fn clear_card(&mut self) {
        self.state.card = self.state.card.cleared();
        self.state.tags_input.clear();
    }
}
