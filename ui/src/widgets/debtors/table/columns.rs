//! Layout constants for the debtors table.

use egui::Color32;

/// Subtle gray border around the table.
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
/// Light gray header background.
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

pub const COLUMN_SPACING: f32 = 16.0;
pub const MIN_COLUMN_WIDTH: f32 = 60.0;
/// Email column grows to this before wrapping.
pub const EMAIL_MIN_WIDTH: f32 = 180.0;
