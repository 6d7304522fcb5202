pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Default frames per second

pub const SLIDE_PADDING: f32 = 96.0;          // Inner margin of a slide (pixels)
pub const BLOCK_SPACING: f32 = 18.0;          // Gap between stacked blocks (pixels)
pub const ROW_SPACING: f32 = 32.0;            // Gap between blocks of a row container (pixels)

pub const FONT_H1: i32 = 72;
pub const FONT_H2: i32 = 52;
pub const FONT_H3: i32 = 40;
pub const FONT_BODY: i32 = 30;
pub const FONT_COUNTER: i32 = 28;

pub const PROGRESS_BAR_HEIGHT: i32 = 8;       // Height of the deck progress bar (pixels)
pub const FILL_BAR_HEIGHT: f32 = 14.0;        // Height of a progress-item fill bar (pixels)
pub const MEDIA_HEIGHT: f32 = 420.0;          // Height reserved for a media image (pixels)

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal travel for a swipe (pixels)

// Slide role markers
pub const CLASS_SLIDE: &str = "slide";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_PREV: &str = "prev";

// Indicator elements created by the deck loader
pub const ID_CURRENT_PAGE: &str = "currentPage";
pub const ID_TOTAL_PAGES: &str = "totalPages";
pub const CLASS_PROGRESS_BAR: &str = "progress-bar";
