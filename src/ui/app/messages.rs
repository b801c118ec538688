use std::path::PathBuf;

use crate::domain::RefinedNote;

/// Result of the async refinement task.
#[derive(Debug)]
pub enum RefineMsg {
    Done(Result<RefinedNote, String>),
}

/// Result of the async export task.
#[derive(Debug)]
pub enum ExportMsg {
    Done(Result<PathBuf, String>),
}
