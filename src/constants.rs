pub const RENDER_WIDTH: i32 = 1920;           // Width of the logical canvas
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the logical canvas
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const ANIMATION_DURATION: f32 = 0.5;      // Duration of the fade between slides (seconds)
pub const DISPLAY_DURATION: f32 = 4.0;        // Duration each slide is held when recording (seconds)

pub const VISIBILITY_THRESHOLD: f32 = 0.5;    // Visible ratio at which a section counts as on screen
pub const SECTION_GAP_RATIO: f32 = 0.4;       // Gap between scroll sections, relative to viewport height
pub const WHEEL_STEP: f32 = 120.0;            // Logical pixels scrolled per wheel notch
pub const SETTLE_DELAY: f32 = 0.15;           // Idle time before scroll snapping kicks in (seconds)
pub const SNAP_SPEED: f32 = 12.0;             // Exponential approach rate when snapping

pub const FONT_SIZE: i32 = 64;                // Size the glyph atlas is rasterised at
