pub const MARGIN_SM: f32 = 8.0;
pub const MARGIN_LG: f32 = 16.0;

pub const NAVBAR_WIDTH_LEFT: f32 = 120.0;
pub const NAVBAR_WIDTH_RIGHT: f32 = 140.0;
pub const NAVBAR_ROW_HEIGHT_EXTRA: f32 = 12.0;

pub const BUTTON_MIN_HEIGHT: f32 = 24.0;
pub const BUTTON_MIN_WIDTH: f32 = 80.0;

/// On-table card height; width follows the natural aspect ratio.
pub const CARD_DISPLAY_HEIGHT: f32 = 95.0;

pub const CHART_HEIGHT: f32 = 220.0;
pub const CHART_BAR_GAP: f32 = 18.0;
