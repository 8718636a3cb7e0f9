//! Layer geometry
//!
//! Fixed vertical layout: the sprite band (which the ship also flies
//! through) sits at the top, the time line below it, the date line at the
//! bottom. Horizontal positions scale with the display width so the
//! renderer tests can run on a smaller mock display.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Target display width in pixels
pub const DISPLAY_WIDTH: u32 = 128;

/// Target display height in pixels
pub const DISPLAY_HEIGHT: u32 = 64;

/// Top of the sprite/ship band
const SPRITE_BAND_TOP: i32 = 4;

/// Height of the sprite/ship band
const SPRITE_BAND_HEIGHT: u32 = 16;

/// Top of the time line (FONT_10X20)
const TIME_TOP: i32 = 24;

/// Top of the date line (FONT_6X10)
const DATE_TOP: i32 = 50;

/// Pixel geometry of the watchface layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLayout {
    /// Band the invader sprite and the ship are drawn in
    pub sprite_band: Rectangle,
    /// Center-aligned anchor of the time line
    pub time_anchor: Point,
    /// Center-aligned anchor of the date line
    pub date_anchor: Point,
    width: u32,
}

impl FaceLayout {
    /// Compute the layout for a display of the given size
    pub fn new(size: Size) -> Self {
        let center_x = size.width as i32 / 2;
        Self {
            sprite_band: Rectangle::new(
                Point::new(0, SPRITE_BAND_TOP),
                Size::new(size.width, SPRITE_BAND_HEIGHT),
            ),
            time_anchor: Point::new(center_x, TIME_TOP),
            date_anchor: Point::new(center_x, DATE_TOP),
            width: size.width,
        }
    }

    /// Top-left point centering a bitmap of the given size in the sprite band
    pub fn centered_in_band(&self, bitmap: Size) -> Point {
        let band = self.sprite_band;
        Point::new(
            band.top_left.x + band.size.width.saturating_sub(bitmap.width) as i32 / 2,
            band.top_left.y + band.size.height.saturating_sub(bitmap.height) as i32 / 2,
        )
    }

    /// Ship y position, vertically centered in the band
    pub fn ship_top(&self, ship: Size) -> i32 {
        self.sprite_band.top_left.y
            + self.sprite_band.size.height.saturating_sub(ship.height) as i32 / 2
    }

    /// Flight span for a ship of the given size: enters off-screen right,
    /// exits off-screen left
    pub fn flight_span(&self, ship: Size) -> (i32, i32) {
        (self.width as i32, -(ship.width as i32))
    }
}
