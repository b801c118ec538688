use std::path::PathBuf;

use crate::application::editor;
use crate::domain::{CardContent, Styling};

/// Which sidebar tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarTab {
    #[default]
    Content,
    Style,
}

/// All app state in one struct.
pub struct UiState {
    pub card: CardContent,
    pub styling: Styling,
    /// Editing buffer for the comma-separated tag field.
    pub tags_input: String,
    pub active_tab: SidebarTab,

    pub is_refining: bool,
    pub refine_error: Option<String>,

    pub is_exporting: bool,
    pub export_error: Option<String>,
    pub last_export: Option<PathBuf>,
}

impl Default for UiState {
    fn default() -> Self {
        let card = CardContent::seed();
        let tags_input = editor::format_tags(&card.tags);
        Self {
            card,
            styling: Styling::default(),
            tags_input,
            active_tab: SidebarTab::default(),
            is_refining: false,
            refine_error: None,
            is_exporting: false,
            export_error: None,
            last_export: None,
        }
    }
}
