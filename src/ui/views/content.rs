//! Content tab: title, body, author, date, and tag fields.

use eframe::egui;

use crate::application::editor;
use crate::ui::app::NoteFlowApp;
use crate::ui::{spacing, theme, typography};

impl NoteFlowApp {
    pub(crate) fn ui_content_tab(&mut self, ui: &mut egui::Ui) {
        let theme = theme::current_theme();

        ui.label(typography::tiny("TITLE").color(theme.text_muted));
        let mut title = self.state.card.title.clone();
        let title_edit = ui.add(
            egui::TextEdit::singleline(&mut title)
                .hint_text("Enter a title...")
                .desired_width(f32::INFINITY),
        );
        if title_edit.changed() {
            self.state.card = self.state.card.with_title(title);
        }

        ui.add_space(spacing::SPACING_LG);

        ui.horizontal(|ui| {
            ui.label(typography::tiny("BODY").color(theme.text_muted));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.state.is_refining {
                    ui.add(egui::Spinner::new().size(12.0));
                    ui.label(typography::small("Refining...").color(theme.text_muted));
                } else {
                    let refine_button = egui::Button::new(
                        typography::small("Refine with AI").color(theme.accent),
                    )
                    .fill(theme.bg_tertiary)
                    .corner_radius(egui::CornerRadius::same(spacing::RADIUS_SM));
                    let enabled = !self.state.card.body.trim().is_empty();
                    if ui.add_enabled(enabled, refine_button).clicked() {
                        self.start_refine();
                    }
                }
            });
        });
        let mut body = self.state.card.body.clone();
        let body_edit = ui.add(
            egui::TextEdit::multiline(&mut body)
                .hint_text("Type or paste your text here...")
                .desired_rows(12)
                .desired_width(f32::INFINITY),
        );
        if body_edit.changed() {
            self.state.card = self.state.card.with_body(body);
        }

        if let Some(err) = self.state.refine_error.clone() {
            ui.add_space(spacing::SPACING_XS);
            ui.label(
                typography::small(format!("The AI could not process this text: {err}"))
                    .color(theme.destructive),
            );
        }

        ui.add_space(spacing::SPACING_LG);

        ui.columns(2, |columns| {
            columns[0].label(typography::tiny("AUTHOR").color(theme.text_muted));
            let mut author = self.state.card.author.clone();
            if columns[0]
                .add(egui::TextEdit::singleline(&mut author).desired_width(f32::INFINITY))
                .changed()
            {
                self.state.card = self.state.card.with_author(author);
            }

            columns[1].label(typography::tiny("DATE").color(theme.text_muted));
            let mut date = self.state.card.date.clone();
            if columns[1]
                .add(egui::TextEdit::singleline(&mut date).desired_width(f32::INFINITY))
                .changed()
            {
                self.state.card = self.state.card.with_date(date);
            }
        });

        ui.add_space(spacing::SPACING_LG);

        ui.label(typography::tiny("TAGS (COMMA-SEPARATED)").color(theme.text_muted));
        let mut tags_input = self.state.tags_input.clone();
        let tags_edit = ui.add(
            egui::TextEdit::singleline(&mut tags_input)
                .hint_text("minimalism, typography")
                .desired_width(f32::INFINITY),
        );
        if tags_edit.changed() {
            self.state.card = self
                .state
                .card
                .with_tags(editor::parse_tags(&tags_input));
            self.state.tags_input = tags_input;
        }
    }
}
