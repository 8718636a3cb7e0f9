//! Rendering for the invader watchface
//!
//! This crate provides:
//! - Compiled-in 1-bpp sprite bitmaps with validated decode (`assets`)
//! - Display geometry for the sprite band, ship band, and text lines
//!   (`layout`)
//! - A renderer drawing a [`FrameModel`] snapshot onto any
//!   `DrawTarget<Color = BinaryColor>` (`render`)
//!
//! Nothing here talks to hardware; the firmware supplies a framebuffer
//! target and the tests use `embedded_graphics::mock_display::MockDisplay`.
//!
//! [`FrameModel`]: invaderwatch_core::face::FrameModel

#![no_std]

pub mod assets;
pub mod layout;
pub mod render;

pub use assets::{AssetError, Bitmap, ResourceId, SpriteSet};
pub use layout::{FaceLayout, DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use render::FaceRenderer;
