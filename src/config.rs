//! Compile-time game and board configuration.

/// Cells per side of the square LED matrix.
pub const GRID_SIZE: i8 = 5;

/// Total number of cells on the matrix. A snake this long has won.
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Pause after each tick once the player has started the game.
pub const RUNNING_TICK_MS: u32 = 300;

/// Pause after each autopilot tick, faster to make the idle demo lively.
pub const IDLE_TICK_MS: u32 = 125;

pub const FULL_BRIGHTNESS: u8 = 255;
pub const APPLE_BRIGHTNESS: u8 = 25;

/// Scrolled when the start chord is pressed, before the first running tick.
pub const READY_MESSAGE: &str = "321Go";

/// Seed for the random source, stirred with timer entropy on every start.
pub const RNG_SEED: u32 = 0xACE1;

/// Random draws tried before apple placement falls back to scanning free cells.
pub const MAX_APPLE_DRAWS: usize = 64;

// LCD layout (Waveshare Pico LCD 1.14", portrait)
pub const DISPLAY_WIDTH: u16 = 135;
pub const DISPLAY_HEIGHT: u16 = 240;
pub const LED_PX: u16 = 24;
pub const LED_GAP_PX: u16 = 2;

/// Pixels the scrolling text moves per frame.
pub const SCROLL_STEP_PX: u16 = 2;
pub const SCROLL_FRAME_MS: u32 = 12;

/// Sampling period of the button task, also acts as the debounce window.
pub const BUTTON_POLL_MS: u64 = 20;
