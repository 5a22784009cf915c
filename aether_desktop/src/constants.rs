// Field bounds used until the first window resize event lands
pub const FIELD_BOUNDS_WIDTH: f32 = 1280.0;
pub const FIELD_BOUNDS_HEIGHT: f32 = 800.0;

// UI Dimensions
pub const SIDE_PANEL_WIDTH: f32 = 340.0;
pub const CARD_BORDER_RADIUS: f32 = 4.0;
pub const INPUT_BORDER_RADIUS: f32 = 4.0;
pub const BUTTON_BORDER_RADIUS: f32 = 2.0;
pub const VALIDATION_BAR_HEIGHT: f32 = 8.0;

// Console
pub const CONSOLE_TEXT_SIZE: f32 = 12.0;

// Field rendering
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;
pub const GHOST_MAX_ALPHA: f32 = 0.20;
