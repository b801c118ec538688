//! Standardized spacing constants for consistent UI in NoteFlow.

/// Extra small spacing value (4px)
pub const SPACING_XS: f32 = 4.0;

/// Small spacing value (8px)
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing value (12px)
pub const SPACING_MD: f32 = 12.0;

/// Large spacing value (16px)
pub const SPACING_LG: f32 = 16.0;

/// Extra large spacing value (24px)
pub const SPACING_XL: f32 = 24.0;

/// Widget corner radius (small)
pub const RADIUS_SM: u8 = 4;

/// Widget corner radius (medium)
pub const RADIUS_MD: u8 = 6;

/// Window corner radius
pub const RADIUS_LG: u8 = 10;

/// Button padding (8px horizontal, 4px vertical)
pub const BUTTON_PADDING: (f32, f32) = (8.0, 4.0);
