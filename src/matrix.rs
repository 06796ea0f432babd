//! The 5x5 LED matrix, emulated as square cells on a colour LCD.

use embedded_graphics::draw_target::DrawTargetExt;
use embedded_graphics::mono_font::{ascii::FONT_10X20, MonoTextStyle};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{Point, Size};
use embedded_graphics_core::pixelcolor::{Rgb565, RgbColor};
use micromath::F32Ext;

use crate::config::{FULL_BRIGHTNESS, GRID_SIZE, LED_GAP_PX, LED_PX, SCROLL_FRAME_MS, SCROLL_STEP_PX};
use crate::coordinate::Coordinate;
use crate::traits::{GamePlatform, LedMatrix};

const GRID: usize = GRID_SIZE as usize;
const PITCH: i32 = (LED_PX + LED_GAP_PX) as i32;
const MATRIX_PX: u32 = GRID as u32 * LED_PX as u32 + (GRID as u32 - 1) * LED_GAP_PX as u32;

/// Colour of an LED that is off, so the grid stays visible
pub const UNLIT: Rgb565 = Rgb565::new(3, 6, 3);
const BACKGROUND: Rgb565 = Rgb565::BLACK;
const GAMMA: f32 = 2.2;

/// LCD colour of an LED lit at `level`, gamma-corrected so dim levels stay visible
pub fn led_color(level: u8) -> Rgb565 {
    if level == 0 {
        return UNLIT;
    }
    let linear = level as f32 / FULL_BRIGHTNESS as f32;
    let intensity = F32Ext::powf(linear, 1.0 / GAMMA);
    let red = (intensity * Rgb565::MAX_R as f32 + 0.5) as u8;
    Rgb565::new(red.clamp(1, Rgb565::MAX_R), 0, 0)
}

/// [`LedMatrix`] drawn on any `Rgb565` [`DrawTarget`], centred on it.
///
/// Plots go to a back buffer. [`update`](LedMatrix::update) only redraws the
/// cells whose brightness changed since the last flush.
pub struct LcdMatrix<D, P> {
    display: D,
    platform: P,
    origin: Point,
    pending: [[u8; GRID]; GRID],
    // None forces a redraw
    shown: [[Option<u8>; GRID]; GRID],
}

impl<D, P> LcdMatrix<D, P>
where
    D: DrawTarget<Color = Rgb565>,
    P: GamePlatform,
{
    pub fn new(display: D, platform: P) -> Self {
        let bounds = display.bounding_box();
        let origin = bounds.top_left
            + Point::new(
                (bounds.size.width as i32 - MATRIX_PX as i32) / 2,
                (bounds.size.height as i32 - MATRIX_PX as i32) / 2,
            );
        Self {
            display,
            platform,
            origin,
            pending: [[0; GRID]; GRID],
            shown: [[None; GRID]; GRID],
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Screen area covered by the LED cells
    pub fn area(&self) -> Rectangle {
        Rectangle::new(self.origin, Size::new_equal(MATRIX_PX))
    }

    fn cell(&self, x: usize, y: usize) -> Rectangle {
        let top_left = self.origin + Point::new(x as i32 * PITCH, y as i32 * PITCH);
        Rectangle::new(top_left, Size::new_equal(LED_PX as u32))
    }

    fn invalidate(&mut self) {
        self.shown = [[None; GRID]; GRID];
    }
}

impl<D, P> LedMatrix for LcdMatrix<D, P>
where
    D: DrawTarget<Color = Rgb565>,
    P: GamePlatform,
{
    type Error = D::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.pending = [[0; GRID]; GRID];
        Ok(())
    }

    fn plot_brightness(&mut self, at: Coordinate, level: u8) -> Result<(), Self::Error> {
        if at.is_valid() {
            self.pending[at.y() as usize][at.x() as usize] = level;
        }
        Ok(())
    }

    async fn show_string(&mut self, text: &str) -> Result<(), Self::Error> {
        let area = self.area();
        let font = &FONT_10X20;
        let style = MonoTextStyle::new(font, led_color(FULL_BRIGHTNESS));
        let advance = (font.character_size.width + font.character_spacing) as i32;
        let text_width = text.chars().count() as i32 * advance;

        let y = area.center().y;
        let mut x = area.top_left.x + area.size.width as i32;
        let end = area.top_left.x - text_width;

        while x > end {
            self.display.fill_solid(&area, BACKGROUND)?;
            let mut clipped = self.display.clipped(&area);
            Text::with_baseline(text, Point::new(x, y), style, Baseline::Middle).draw(&mut clipped)?;
            self.platform.delay_ms(SCROLL_FRAME_MS).await;
            x -= SCROLL_STEP_PX as i32;
        }

        self.display.fill_solid(&area, BACKGROUND)?;
        self.invalidate();
        Ok(())
    }

    fn stop_animation(&mut self) -> Result<(), Self::Error> {
        let area = self.area();
        self.display.fill_solid(&area, BACKGROUND)?;
        self.invalidate();
        Ok(())
    }

    fn update(&mut self) -> Result<(), Self::Error> {
        for y in 0..GRID {
            for x in 0..GRID {
                let level = self.pending[y][x];
                if self.shown[y][x] == Some(level) {
                    continue;
                }
                let cell = self.cell(x, y);
                self.display.fill_solid(&cell, led_color(level))?;
                self.shown[y][x] = Some(level);
            }
        }
        Ok(())
    }
}
