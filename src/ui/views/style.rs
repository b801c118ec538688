//! Style tab: aspect ratio, theme, typography, visibility, and border.

use eframe::egui;

use crate::domain::{AspectRatio, BorderStyle, Font, FontSize, TextAlign, Theme};
use crate::render::{Background, Palette};
use crate::ui::app::NoteFlowApp;
use crate::ui::{spacing, theme, typography};

fn swatch_color(card_theme: Theme) -> egui::Color32 {
    match Palette::of(card_theme).background {
        Background::Solid(c) => egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a.max(40)),
        Background::Linear { via, .. } => egui::Color32::from_rgb(via.r, via.g, via.b),
    }
}

fn choice_button(ui: &mut egui::Ui, selected: bool, label: &str) -> egui::Response {
    let theme = theme::current_theme();
    let (fill, text_color, stroke) = if selected {
        (theme.brand, theme.brand_fg, theme.brand)
    } else {
        (theme.bg_secondary, theme.text_muted, theme.border)
    };

    ui.add(
        egui::Button::new(typography::small(label).color(text_color))
            .fill(fill)
            .stroke(egui::Stroke::new(1.0, stroke))
            .corner_radius(egui::CornerRadius::same(spacing::RADIUS_SM)),
    )
}

impl NoteFlowApp {
    pub(crate) fn ui_style_tab(&mut self, ui: &mut egui::Ui) {
        let theme = theme::current_theme();

        ui.label(typography::tiny("EXPORT RATIO").color(theme.text_muted));
        ui.horizontal_wrapped(|ui| {
            for ratio in AspectRatio::ALL {
                let selected = self.state.styling.aspect_ratio == ratio;
                let label = match ratio {
                    AspectRatio::Auto => "Long".to_string(),
                    other => other.to_string(),
                };
                if choice_button(ui, selected, &label).clicked() {
                    self.state.styling = self.state.styling.with_aspect_ratio(ratio);
                }
            }
        });

        ui.add_space(spacing::SPACING_LG);

        ui.label(typography::tiny("CARD THEME").color(theme.text_muted));
        ui.horizontal_wrapped(|ui| {
            for card_theme in Theme::ALL {
                let selected = self.state.styling.theme == card_theme;
                let stroke = if selected { theme.brand } else { theme.border };
                let swatch = egui::Button::new(
                    typography::tiny(card_theme.to_string())
                        .color(egui::Color32::from_rgb(60, 60, 60)),
                )
                .fill(swatch_color(card_theme))
                .stroke(egui::Stroke::new(if selected { 2.0 } else { 1.0 }, stroke))
                .min_size(egui::vec2(84.0, 32.0))
                .corner_radius(egui::CornerRadius::same(spacing::RADIUS_SM));
                if ui.add(swatch).clicked() {
                    self.state.styling = self.state.styling.with_theme(card_theme);
                }
            }
        });

        ui.add_space(spacing::SPACING_LG);

        ui.label(typography::tiny("TYPEFACE").color(theme.text_muted));
        ui.horizontal(|ui| {
            for font in Font::ALL {
                let selected = self.state.styling.font == font;
                if choice_button(ui, selected, &font.to_string()).clicked() {
                    self.state.styling = self.state.styling.with_font(font);
                }
            }
            if self.state.styling.theme == Theme::House {
                ui.label(typography::tiny("house theme forces serif").color(theme.text_disabled));
            }
        });

        ui.add_space(spacing::SPACING_SM);

        ui.horizontal(|ui| {
            ui.label(typography::small("Size").color(theme.text_muted));
            for size in FontSize::ALL {
                let selected = self.state.styling.font_size == size;
                if choice_button(ui, selected, &size.to_string().to_uppercase()).clicked() {
                    self.state.styling = self.state.styling.with_font_size(size);
                }
            }
        });

        ui.add_space(spacing::SPACING_LG);

        ui.label(typography::tiny("VISIBILITY").color(theme.text_muted));
        let styling = self.state.styling;

        let mut show_date = styling.show_date;
        if ui.checkbox(&mut show_date, typography::label("Date")).changed() {
            self.state.styling = styling.with_show_date(show_date);
        }
        let styling = self.state.styling;
        let mut show_author = styling.show_author;
        if ui
            .checkbox(&mut show_author, typography::label("Author"))
            .changed()
        {
            self.state.styling = styling.with_show_author(show_author);
        }
        let styling = self.state.styling;
        let mut show_tags = styling.show_tags;
        if ui.checkbox(&mut show_tags, typography::label("Tags")).changed() {
            self.state.styling = styling.with_show_tags(show_tags);
        }

        // The alignment enum only ever holds left or center, so a checkbox
        // is a faithful control for it.
        let styling = self.state.styling;
        let mut centered = styling.text_align == TextAlign::Center;
        if ui
            .checkbox(&mut centered, typography::label("Center align"))
            .changed()
        {
            let align = if centered {
                TextAlign::Center
            } else {
                TextAlign::Left
            };
            self.state.styling = styling.with_text_align(align);
        }

        ui.add_space(spacing::SPACING_LG);

        ui.label(typography::tiny("BORDER").color(theme.text_muted));
        ui.horizontal(|ui| {
            for border in BorderStyle::ALL {
                let selected = self.state.styling.border == border;
                let label = match border {
                    BorderStyle::None => "None",
                    BorderStyle::Thin => "Thin",
                    BorderStyle::Thick => "Thick",
                    BorderStyle::Dashed => "Dashed",
                };
                if choice_button(ui, selected, label).clicked() {
                    self.state.styling = self.state.styling.with_border(border);
                }
            }
        });
    }
}
