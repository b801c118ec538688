//! Chrome theme for NoteFlow.
//!
//! Semantic color names built on the Catppuccin Mocha palette. This styles
//! the application chrome only; card palettes live in [`crate::render`].

use catppuccin_egui::MOCHA;
use eframe::egui;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg_primary: egui::Color32,
    pub bg_secondary: egui::Color32,
    pub bg_tertiary: egui::Color32,

    pub text_primary: egui::Color32,
    pub text_secondary: egui::Color32,
    pub text_muted: egui::Color32,
    pub text_disabled: egui::Color32,

    pub brand: egui::Color32,
    pub brand_fg: egui::Color32,

    pub accent: egui::Color32,
    pub success: egui::Color32,
    pub destructive: egui::Color32,

    pub border: egui::Color32,
    pub border_secondary: egui::Color32,
}

impl Theme {
    pub fn mocha() -> Self {
        Self {
            bg_primary: MOCHA.base,
            bg_secondary: MOCHA.mantle,
            bg_tertiary: MOCHA.surface0,

            text_primary: egui::Color32::from_rgb(230, 233, 239),
            text_secondary: egui::Color32::from_rgb(186, 194, 222),
            text_muted: MOCHA.subtext0,
            text_disabled: MOCHA.overlay1,

            brand: MOCHA.mauve,
            brand_fg: MOCHA.base,

            accent: MOCHA.blue,
            success: MOCHA.green,
            destructive: MOCHA.red,

            border: MOCHA.surface1,
            border_secondary: MOCHA.surface0,
        }
    }
}

pub fn current_theme() -> Theme {
    Theme::mocha()
}
