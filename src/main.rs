//! Main entry point for NoteFlow.
//! Initializes logging, the shared Tokio runtime, and the egui application.

use eframe::egui;

use noteflow::ui::app::NoteFlowApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    // Enter the shared runtime so UI handlers can spawn async tasks.
    let _guard = noteflow::runtime().enter();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1160.0, 800.0])
            .with_title("NoteFlow"),
        ..Default::default()
    };

    eframe::run_native(
        "NoteFlow",
        options,
        Box::new(|cc| Ok(Box::new(NoteFlowApp::new_egui(cc)))),
    )
}
