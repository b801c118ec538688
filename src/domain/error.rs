//! Domain error types for NoteFlow.
//!
//! Two failure families exist: refinement (the text-generation collaborator)
//! and export (rasterization and file output). Both are handled at the point
//! of call and surfaced as a notice; neither ends the session.

use thiserror::Error;

/// Errors from the refinement collaborator.
#[derive(Debug, Error)]
pub enum RefineError {
    #[error("Gemini API key is not configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("Refinement request failed: {0}")]
    Transport(String),

    #[error("Refinement rejected by the service (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Malformed refinement payload: {0}")]
    MalformedPayload(String),

    #[error("Refinement failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}

/// Errors from the export pipeline.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Card SVG could not be parsed for rasterization: {0}")]
    InvalidSvg(String),

    #[error("Pixmap allocation failed for {width}x{height}")]
    PixmapAllocation { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),

    #[error("Writing export file failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export failed: {0}")]
    OperationFailed(#[from] anyhow::Error),
}
