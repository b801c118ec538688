//! Main application state and UI logic for NoteFlow.
//!
//! This module contains the egui application state, the async message
//! plumbing for refinement and export, and the root `eframe::App`
//! implementation.

mod init;
mod messages;
mod ops;
mod polling;
mod root;
mod state;
mod update;

pub use messages::{ExportMsg, RefineMsg};
pub use root::NoteFlowApp;
pub use state::{SidebarTab, UiState};
