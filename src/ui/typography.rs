use eframe::egui;

/// Bold text in the default proportional family.
pub fn bold(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).strong()
}

/// Regular body text.
pub fn body(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text)
}

/// Large bold heading
pub fn h1(text: impl Into<String>) -> egui::RichText {
    bold(text).size(20.0)
}

/// Medium bold heading
pub fn h2(text: impl Into<String>) -> egui::RichText {
    bold(text).size(16.0)
}

/// Standard UI label size (small)
pub fn label(text: impl Into<String>) -> egui::RichText {
    body(text).size(13.0)
}

/// Bold UI label size (13.0)
pub fn bold_label(text: impl Into<String>) -> egui::RichText {
    bold(text).size(13.0)
}

/// Small text
pub fn small(text: impl Into<String>) -> egui::RichText {
    body(text).size(11.0)
}

/// Extra small text
pub fn tiny(text: impl Into<String>) -> egui::RichText {
    body(text).size(10.0)
}

/// Muted body text
pub fn weak(text: impl Into<String>) -> egui::RichText {
    body(text).weak()
}

/// Monospace text
pub fn mono(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).family(egui::FontFamily::Monospace)
}
