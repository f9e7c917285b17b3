//! Seam between actors and whatever draws them.
//!
//! Actors decide which part of which sprite sheet to show and where; a
//! [`RenderTarget`] does the actual drawing. The crate itself ships only the
//! ECS slot in [`crate::plugin`].

use glam::Vec2;

/// Source rectangle of one frame on a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    /// Asset path of the sprite sheet.
    pub sheet: &'static str,
    /// Left edge of the frame on the sheet, in pixels.
    pub source_x: f32,
    /// Top edge of the frame on the sheet, in pixels.
    pub source_y: f32,
    /// Frame width on the sheet, in pixels.
    pub width: f32,
    /// Frame height on the sheet, in pixels.
    pub height: f32,
}

/// Something that can draw sprite-sheet frames.
pub trait RenderTarget {
    /// Draws `frame` with its top-left corner at `position`, scaled by `scale`.
    fn draw_sprite(&mut self, frame: &SpriteFrame, position: Vec2, scale: f32);
}
