//! Compiled-in sprite bitmaps
//!
//! Seven 1-bpp bitmaps: three invader sprites with two animation frames
//! each, plus the mothership. Rows are byte-padded, MSB first, the layout
//! `embedded_graphics::image::ImageRaw` expects. Every bitmap is validated
//! against its declared dimensions when loaded; a mismatch is a fatal
//! startup condition for the firmware.

use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use invaderwatch_core::face::SPRITE_FRAME_COUNT;

/// Identifies one bitmap resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResourceId {
    CrabOpen,
    CrabClosed,
    SquidOpen,
    SquidClosed,
    OctopusOpen,
    OctopusClosed,
    Ship,
}

/// Bitmap resource failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AssetError {
    /// Raw data length does not match the declared dimensions
    SizeMismatch(ResourceId),
}

/// Raw 1-bpp bitmap data with declared dimensions
struct RawResource {
    width: u32,
    height: u32,
    data: &'static [u8],
}

// Crab, arms up
static CRAB_OPEN: RawResource = RawResource {
    width: 11,
    height: 8,
    data: &[
        0b00100000, 0b10000000,
        0b00010001, 0b00000000,
        0b00111111, 0b10000000,
        0b01101110, 0b11000000,
        0b11111111, 0b11100000,
        0b10111111, 0b10100000,
        0b10100000, 0b10100000,
        0b00011011, 0b00000000,
    ],
};

// Crab, arms down
static CRAB_CLOSED: RawResource = RawResource {
    width: 11,
    height: 8,
    data: &[
        0b00100000, 0b10000000,
        0b10010001, 0b00100000,
        0b10111111, 0b10100000,
        0b11101110, 0b11100000,
        0b11111111, 0b11100000,
        0b01111111, 0b11000000,
        0b00100000, 0b10000000,
        0b01000000, 0b01000000,
    ],
};

// Squid, tentacles out
static SQUID_OPEN: RawResource = RawResource {
    width: 8,
    height: 8,
    data: &[
        0b00011000,
        0b00111100,
        0b01111110,
        0b11011011,
        0b11111111,
        0b00100100,
        0b01011010,
        0b10100101,
    ],
};

// Squid, tentacles in
static SQUID_CLOSED: RawResource = RawResource {
    width: 8,
    height: 8,
    data: &[
        0b00011000,
        0b00111100,
        0b01111110,
        0b11011011,
        0b11111111,
        0b01011010,
        0b10000001,
        0b01000010,
    ],
};

// Octopus, legs out
static OCTOPUS_OPEN: RawResource = RawResource {
    width: 12,
    height: 8,
    data: &[
        0b00001111, 0b00000000,
        0b01111111, 0b11100000,
        0b11111111, 0b11110000,
        0b11100110, 0b01110000,
        0b11111111, 0b11110000,
        0b00011001, 0b10000000,
        0b00110110, 0b11000000,
        0b11000000, 0b00110000,
    ],
};

// Octopus, legs in
static OCTOPUS_CLOSED: RawResource = RawResource {
    width: 12,
    height: 8,
    data: &[
        0b00001111, 0b00000000,
        0b01111111, 0b11100000,
        0b11111111, 0b11110000,
        0b11100110, 0b01110000,
        0b11111111, 0b11110000,
        0b00111001, 0b11000000,
        0b01100110, 0b01100000,
        0b00110000, 0b11000000,
    ],
};

// Mothership
static SHIP: RawResource = RawResource {
    width: 16,
    height: 7,
    data: &[
        0b00000111, 0b11100000,
        0b00011111, 0b11111000,
        0b00111111, 0b11111100,
        0b01101101, 0b10110110,
        0b11111111, 0b11111111,
        0b00111001, 0b10011100,
        0b00010000, 0b00001000,
    ],
};

impl ResourceId {
    /// Invader frames in cycle order: pairs at offsets 0, 2, 4
    pub const INVADER_FRAMES: [ResourceId; SPRITE_FRAME_COUNT as usize] = [
        ResourceId::CrabOpen,
        ResourceId::CrabClosed,
        ResourceId::SquidOpen,
        ResourceId::SquidClosed,
        ResourceId::OctopusOpen,
        ResourceId::OctopusClosed,
    ];

    fn raw(self) -> &'static RawResource {
        match self {
            ResourceId::CrabOpen => &CRAB_OPEN,
            ResourceId::CrabClosed => &CRAB_CLOSED,
            ResourceId::SquidOpen => &SQUID_OPEN,
            ResourceId::SquidClosed => &SQUID_CLOSED,
            ResourceId::OctopusOpen => &OCTOPUS_OPEN,
            ResourceId::OctopusClosed => &OCTOPUS_CLOSED,
            ResourceId::Ship => &SHIP,
        }
    }

    /// Decode this resource into a drawable bitmap
    pub fn load(self) -> Result<Bitmap, AssetError> {
        Bitmap::decode(self.raw()).ok_or(AssetError::SizeMismatch(self))
    }
}

/// A decoded, drawable bitmap
#[derive(Clone, Copy)]
pub struct Bitmap {
    raw: ImageRaw<'static, BinaryColor>,
    size: Size,
}

impl Bitmap {
    fn decode(raw: &'static RawResource) -> Option<Self> {
        let bytes_per_row = raw.width.div_ceil(8) as usize;
        if raw.data.len() != bytes_per_row * raw.height as usize {
            return None;
        }
        Some(Self {
            raw: ImageRaw::new(raw.data, raw.width),
            size: Size::new(raw.width, raw.height),
        })
    }

    /// Bitmap dimensions in pixels
    pub fn size(&self) -> Size {
        self.size
    }

    /// Draw the bitmap with its top-left corner at `top_left`
    pub fn draw<D>(&self, top_left: Point, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        Image::new(&self.raw, top_left).draw(target)
    }
}

/// All bitmaps the watchface needs, acquired as a unit
///
/// Loading is all-or-nothing; dropping the set releases everything.
pub struct SpriteSet {
    frames: [Bitmap; SPRITE_FRAME_COUNT as usize],
    ship: Bitmap,
}

impl SpriteSet {
    /// Load the six invader frames and the ship
    pub fn load() -> Result<Self, AssetError> {
        let ids = ResourceId::INVADER_FRAMES;
        Ok(Self {
            frames: [
                ids[0].load()?,
                ids[1].load()?,
                ids[2].load()?,
                ids[3].load()?,
                ids[4].load()?,
                ids[5].load()?,
            ],
            ship: ResourceId::Ship.load()?,
        })
    }

    /// Invader bitmap for a cycle frame index
    pub fn frame(&self, frame: u8) -> &Bitmap {
        &self.frames[frame as usize % self.frames.len()]
    }

    /// The mothership bitmap
    pub fn ship(&self) -> &Bitmap {
        &self.ship
    }
}
