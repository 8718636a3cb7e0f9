//! Frame rendering
//!
//! Draws a [`FrameModel`] snapshot onto any 1-bpp draw target: black
//! background, the selected invader frame centered in the sprite band, the
//! ship at its animated x position, and the two text lines.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

use invaderwatch_core::face::FrameModel;

use crate::assets::{AssetError, SpriteSet};
use crate::layout::FaceLayout;

/// Renders watchface frames for one display size
pub struct FaceRenderer {
    layout: FaceLayout,
    sprites: SpriteSet,
}

impl FaceRenderer {
    /// Load all bitmap resources and compute the layout
    ///
    /// Resource failure here is fatal; there is nothing to render without
    /// the sprites.
    pub fn new(size: Size) -> Result<Self, AssetError> {
        Ok(Self {
            layout: FaceLayout::new(size),
            sprites: SpriteSet::load()?,
        })
    }

    /// Layer geometry in use
    pub fn layout(&self) -> &FaceLayout {
        &self.layout
    }

    /// Off-screen start/end x for the ship flight
    pub fn flight_span(&self) -> (i32, i32) {
        self.layout.flight_span(self.sprites.ship().size())
    }

    /// Draw one frame
    pub fn draw<D>(&self, model: &FrameModel<'_>, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.clear(BinaryColor::Off)?;

        if !model.sprite_hidden {
            let bitmap = self.sprites.frame(model.sprite_frame);
            bitmap.draw(self.layout.centered_in_band(bitmap.size()), target)?;
        }

        if !model.ship_hidden {
            let ship = self.sprites.ship();
            let top_left = Point::new(model.ship_x, self.layout.ship_top(ship.size()));
            ship.draw(top_left, target)?;
        }

        let centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();

        Text::with_text_style(
            model.time_text,
            self.layout.time_anchor,
            MonoTextStyle::new(&FONT_10X20, BinaryColor::On),
            centered,
        )
        .draw(target)?;

        Text::with_text_style(
            model.date_text,
            self.layout.date_anchor,
            MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
            centered,
        )
        .draw(target)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    const MOCK_SIZE: Size = Size::new(64, 64);

    fn renderer() -> FaceRenderer {
        FaceRenderer::new(MOCK_SIZE).expect("resources load")
    }

    fn mock() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        display
    }

    fn model<'a>() -> FrameModel<'a> {
        FrameModel {
            sprite_hidden: false,
            sprite_frame: 0,
            ship_hidden: true,
            ship_x: 64,
            time_text: "12:34 pm",
            date_text: "Sun, Aug 23",
        }
    }

    fn lit_pixels_in_band(display: &MockDisplay<BinaryColor>, renderer: &FaceRenderer) -> usize {
        let band = renderer.layout().sprite_band;
        let mut count = 0;
        for y in band.top_left.y..band.top_left.y + band.size.height as i32 {
            for x in 0..MOCK_SIZE.width as i32 {
                if display.get_pixel(Point::new(x, y)) == Some(BinaryColor::On) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_sprite_drawn_when_visible() {
        let renderer = renderer();
        let mut display = mock();
        renderer.draw(&model(), &mut display).unwrap();
        assert!(lit_pixels_in_band(&display, &renderer) > 0);
    }

    #[test]
    fn test_band_empty_when_sprite_hidden_and_ship_off_screen() {
        let renderer = renderer();
        let mut display = mock();
        let model = FrameModel {
            sprite_hidden: true,
            ship_hidden: false,
            ship_x: MOCK_SIZE.width as i32, // just entered, still off-screen
            ..model()
        };
        renderer.draw(&model, &mut display).unwrap();
        assert_eq!(lit_pixels_in_band(&display, &renderer), 0);
    }

    #[test]
    fn test_ship_never_lights_pixels_left_of_its_x() {
        let renderer = renderer();
        let mut display = mock();
        let ship_x = 20;
        let model = FrameModel {
            sprite_hidden: true,
            ship_hidden: false,
            ship_x,
            ..model()
        };
        renderer.draw(&model, &mut display).unwrap();

        let band = renderer.layout().sprite_band;
        let mut lit_in_ship_area = 0;
        for y in band.top_left.y..band.top_left.y + band.size.height as i32 {
            for x in 0..MOCK_SIZE.width as i32 {
                if display.get_pixel(Point::new(x, y)) == Some(BinaryColor::On) {
                    assert!(x >= ship_x, "lit pixel at x={x} left of ship_x={ship_x}");
                    lit_in_ship_area += 1;
                }
            }
        }
        assert!(lit_in_ship_area > 0);
    }

    #[test]
    fn test_each_sprite_frame_renders() {
        let renderer = renderer();
        for frame in 0..6 {
            let mut display = mock();
            let model = FrameModel {
                sprite_frame: frame,
                ..model()
            };
            renderer.draw(&model, &mut display).unwrap();
            assert!(
                lit_pixels_in_band(&display, &renderer) > 0,
                "frame {frame} drew nothing"
            );
        }
    }

    #[test]
    fn test_text_lines_rendered() {
        let renderer = renderer();
        let mut display = mock();
        renderer.draw(&model(), &mut display).unwrap();

        let time_anchor = renderer.layout().time_anchor;
        let mut lit = 0;
        for y in time_anchor.y..time_anchor.y + 20 {
            for x in 0..MOCK_SIZE.width as i32 {
                if display.get_pixel(Point::new(x, y)) == Some(BinaryColor::On) {
                    lit += 1;
                }
            }
        }
        assert!(lit > 0, "time line drew nothing");
    }
}
