use crate::coordinate::Coordinate;

/// Logical button events, already decoded from the raw button levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Button A released on its own
    TurnLeft,
    /// Button B released on its own
    TurnRight,
    /// A and B pressed together
    Start,
    None,
}

/// Abstraction for the 5x5 LED matrix
pub trait LedMatrix {
    type Error;

    /// Turn every LED off
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Light an LED at full brightness
    fn plot(&mut self, at: Coordinate) -> Result<(), Self::Error> {
        self.plot_brightness(at, crate::config::FULL_BRIGHTNESS)
    }

    /// Light an LED at `level` (0 is off, 255 is fully lit).
    /// Invalid coordinates are ignored.
    fn plot_brightness(&mut self, at: Coordinate, level: u8) -> Result<(), Self::Error>;

    /// Scroll `text` across the matrix, returning once it has left the screen
    async fn show_string(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Blank any text still on the matrix and force a full redraw on the
    /// next [`update`](LedMatrix::update)
    fn stop_animation(&mut self) -> Result<(), Self::Error>;

    /// Push pending LED changes to the panel
    fn update(&mut self) -> Result<(), Self::Error>;
}

/// Abstraction for different input methods
pub trait GameInput {
    type Error;

    /// Next pending event, or [`InputEvent::None`] when nothing is queued
    async fn read_input(&mut self) -> Result<InputEvent, Self::Error>;
}

/// Abstraction for platform-specific operations
pub trait GamePlatform {
    /// Delay for specified milliseconds
    async fn delay_ms(&self, ms: u32);

    /// Get current time in milliseconds
    fn current_time_ms(&self) -> u32;
}

/// Uniform integer source used for apple placement
pub trait RandomSource {
    /// Uniform draw in `low..=high`
    fn range_inclusive(&mut self, low: i32, high: i32) -> i32;

    /// Mix outside entropy (timer ticks, user timing) into the state
    fn stir(&mut self, _entropy: u32) {}
}
