//! UI and window constants.

/// Default window width
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
/// Default window height
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;

/// Maximum width of section content (page is centered within the window)
pub const MAX_CONTENT_WIDTH: f32 = 1040.0;
/// Vertical padding above and below each section
pub const SECTION_PADDING: f32 = 96.0;
/// Rounding radius for cards
pub const CARD_ROUNDING: f32 = 12.0;
/// Rounding radius for chips and small buttons
pub const CHIP_ROUNDING: f32 = 8.0;
/// Inner margin of cards
pub const CARD_MARGIN: f32 = 20.0;
/// Gap between grid cards
pub const CARD_GAP: f32 = 16.0;
/// Height of stat tiles in the about grid
pub const STAT_TILE_HEIGHT: f32 = 150.0;
/// Thickness of the footer gradient border
pub const FOOTER_BORDER_HEIGHT: f32 = 3.0;
