use eframe::egui;

use crate::ui::{spacing, theme, typography};

use super::state::SidebarTab;
use super::NoteFlowApp;

impl eframe::App for NoteFlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);

        let theme = theme::current_theme();
        let mut visuals = egui::Visuals::dark();

        visuals.panel_fill = theme.bg_primary;
        visuals.window_fill = theme.bg_primary;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, theme.border);
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, theme.border);
        visuals.widgets.inactive.bg_fill = theme.bg_secondary;
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.brand);
        visuals.widgets.hovered.bg_fill = theme.bg_secondary;
        visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, theme.brand);
        visuals.widgets.active.bg_fill = theme.bg_secondary;

        visuals.selection.bg_fill = theme.brand.gamma_multiply(0.3);
        visuals.selection.stroke = egui::Stroke::new(1.0, theme.brand);

        visuals.window_corner_radius = egui::CornerRadius::same(spacing::RADIUS_LG);
        visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(spacing::RADIUS_MD);
        visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(spacing::RADIUS_MD);
        visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(spacing::RADIUS_MD);
        visuals.widgets.active.corner_radius = egui::CornerRadius::same(spacing::RADIUS_MD);

        ctx.set_visuals(visuals);

        let refined = self.poll_refine_messages();
        let exported = self.poll_export_messages();

        if refined || exported || self.state.is_refining || self.state.is_exporting {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.render_header(ctx);

        egui::SidePanel::left("sidebar")
            .exact_width(400.0)
            .resizable(false)
            .show(ctx, |ui| {
                self.ui_sidebar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_preview(ui);
        });
    }
}

impl NoteFlowApp {
    fn render_header(&mut self, ctx: &egui::Context) {
        let theme = theme::current_theme();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(spacing::SPACING_SM);
            ui.horizontal(|ui| {
                ui.label(typography::h1("NoteFlow").color(theme.text_primary));
                ui.label(typography::tiny("typography canvas").color(theme.text_muted));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let clear = ui
                        .button(typography::label("Clear card").color(theme.destructive))
                        .on_hover_text("Reset title, body, and tags");
                    if clear.clicked() {
                        self.clear_card();
                    }

                    if let Some(path) = &self.state.last_export {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_default();
                        ui.label(typography::small(format!("Saved {name}")).color(theme.success));
                    }
                });
            });
            ui.add_space(spacing::SPACING_SM);
        });
    }

    fn ui_sidebar(&mut self, ui: &mut egui::Ui) {
        let theme = theme::current_theme();

        ui.add_space(spacing::SPACING_MD);
        ui.horizontal(|ui| {
            for (tab, label) in [
                (SidebarTab::Content, "Content"),
                (SidebarTab::Style, "Style"),
            ] {
                let selected = self.state.active_tab == tab;
                let text = if selected {
                    typography::bold_label(label).color(theme.brand)
                } else {
                    typography::label(label).color(theme.text_muted)
                };
                if ui.selectable_label(selected, text).clicked() {
                    self.state.active_tab = tab;
                }
            }
        });
        ui.separator();

        egui::TopBottomPanel::bottom("export_footer")
            .frame(egui::Frame::NONE.inner_margin(egui::Margin::same(12)))
            .show_inside(ui, |ui| {
                self.ui_export_footer(ui);
            });

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.add_space(spacing::SPACING_MD);
                match self.state.active_tab {
                    SidebarTab::Content => self.ui_content_tab(ui),
                    SidebarTab::Style => self.ui_style_tab(ui),
                }
                ui.add_space(spacing::SPACING_XL);
            });
    }

    fn ui_export_footer(&mut self, ui: &mut egui::Ui) {
        let theme = theme::current_theme();

        if let Some(err) = self.state.export_error.clone() {
            ui.label(typography::small(format!("Export failed: {err}")).color(theme.destructive));
            ui.add_space(spacing::SPACING_XS);
        }

        let label = if self.state.is_exporting {
            "Exporting..."
        } else {
            "Save as image"
        };
        let button = egui::Button::new(typography::bold_label(label).color(theme.brand_fg))
            .fill(theme.brand)
            .min_size(egui::vec2(ui.available_width(), 36.0))
            .corner_radius(egui::CornerRadius::same(spacing::RADIUS_MD));

        if ui.add_enabled(!self.state.is_exporting, button).clicked() {
            self.start_export();
        }
    }
}
