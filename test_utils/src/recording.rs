//! A render target that remembers every draw call.

use glam::Vec2;
use slither::{RenderTarget, SpriteFrame};

/// One recorded draw call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub frame: SpriteFrame,
    pub position: Vec2,
    pub scale: f32,
}

/// Render target collecting draw calls in order.
///
/// # Examples
/// ```
/// use slither::Snake;
/// use test_utils::RecordingTarget;
///
/// let mut snake = Snake::new(0.0, 0.0);
/// let mut target = RecordingTarget::default();
/// snake.draw(&mut target, 0.0);
/// assert_eq!(target.calls.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingTarget {
    pub calls: Vec<DrawCall>,
}

impl RecordingTarget {
    /// The most recent draw call, if any.
    pub fn last(&self) -> Option<&DrawCall> {
        self.calls.last()
    }
}

impl RenderTarget for RecordingTarget {
    fn draw_sprite(&mut self, frame: &SpriteFrame, position: Vec2, scale: f32) {
        self.calls.push(DrawCall {
            frame: *frame,
            position,
            scale,
        });
    }
}
