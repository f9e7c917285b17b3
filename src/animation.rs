//! Sprite-sheet animation clips and the facing/action clip table.
//!
//! An [`AnimationClip`] walks through a horizontal strip of frames on a
//! sprite sheet, keeping its own playback timer. An [`AnimationTable`] holds
//! one clip for every `(Facing, Action)` pair; its shape makes a missing
//! entry impossible.

use std::ops::Index;

use glam::Vec2;

use crate::error::SlitherError;
use crate::numeric::{floor_to_u32, u32_to_f32};
use crate::pose::{Action, Facing};
use crate::render::{RenderTarget, SpriteFrame};
use crate::{
    HEIGHT, IDLE_FRAME_COUNT, IDLE_FRAME_DURATION, SLITHER_FRAME_COUNT, SLITHER_FRAME_DURATION,
    SPRITESHEET, WIDTH,
};

/// A strip of equally sized frames played back at a fixed rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    sheet: &'static str,
    origin: Vec2,
    frame_size: Vec2,
    frame_count: u32,
    frame_duration: f32,
    looping: bool,
    elapsed: f32,
}

impl AnimationClip {
    /// Creates a clip after checking its geometry and timing.
    ///
    /// # Errors
    /// Returns [`SlitherError::InvalidClip`] when the clip has no frames, a
    /// frame duration that is not positive and finite, or a frame size that
    /// is not positive and finite.
    pub fn new(
        sheet: &'static str,
        origin: Vec2,
        frame_size: Vec2,
        frame_count: u32,
        frame_duration: f32,
        looping: bool,
    ) -> Result<Self, SlitherError> {
        if frame_count == 0 {
            return Err(SlitherError::InvalidClip("clip needs at least one frame"));
        }
        if !frame_duration.is_finite() || frame_duration <= 0.0 {
            return Err(SlitherError::InvalidClip(
                "frame duration must be positive and finite",
            ));
        }
        if !frame_size.is_finite() || frame_size.cmple(Vec2::ZERO).any() {
            return Err(SlitherError::InvalidClip(
                "frame size must be positive and finite",
            ));
        }
        if !origin.is_finite() {
            return Err(SlitherError::InvalidClip("origin must be finite"));
        }
        Ok(Self::from_static(
            sheet,
            origin,
            frame_size,
            frame_count,
            frame_duration,
            looping,
        ))
    }

    /// Creates a clip without runtime checks, for clips built from constants
    /// whose validity is asserted at compile time.
    #[must_use]
    pub const fn from_static(
        sheet: &'static str,
        origin: Vec2,
        frame_size: Vec2,
        frame_count: u32,
        frame_duration: f32,
        looping: bool,
    ) -> Self {
        Self {
            sheet,
            origin,
            frame_size,
            frame_count,
            frame_duration,
            looping,
            elapsed: 0.0,
        }
    }

    /// Number of frames in the strip.
    #[must_use]
    pub const fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Seconds each frame is shown.
    #[must_use]
    pub const fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    /// Whether playback wraps back to the first frame.
    #[must_use]
    pub const fn is_looping(&self) -> bool {
        self.looping
    }

    /// Seconds of playback accumulated so far.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Length of one full pass through the strip.
    #[must_use]
    pub const fn total_duration(&self) -> f32 {
        self.frame_duration * u32_to_f32(self.frame_count)
    }

    /// Advances the playback timer. Looping clips wrap around; non-finite
    /// ticks are ignored.
    pub fn advance(&mut self, tick: f32) {
        if !tick.is_finite() {
            return;
        }
        self.elapsed += tick;
        let total = self.total_duration();
        if self.looping && self.elapsed >= total {
            self.elapsed %= total;
        }
    }

    /// Rewinds playback to the first frame.
    pub const fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Whether a pass through the strip has completed. Looping clips wrap
    /// before this can stay true.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.elapsed >= self.total_duration()
    }

    /// Index of the frame to show, clamped to the last frame.
    #[must_use]
    pub fn current_frame(&self) -> u32 {
        let index = floor_to_u32(f64::from(self.elapsed / self.frame_duration));
        index.min(self.frame_count.saturating_sub(1))
    }

    /// Sheet rectangle of the frame at `index`, counting from the origin.
    #[must_use]
    pub const fn frame_region(&self, index: u32) -> SpriteFrame {
        SpriteFrame {
            sheet: self.sheet,
            source_x: self.origin.x + u32_to_f32(index) * self.frame_size.x,
            source_y: self.origin.y,
            width: self.frame_size.x,
            height: self.frame_size.y,
        }
    }

    /// Advances by `tick`, then draws the current frame at `position`.
    pub fn draw_frame<R: RenderTarget + ?Sized>(
        &mut self,
        tick: f32,
        target: &mut R,
        position: Vec2,
        scale: f32,
    ) {
        self.advance(tick);
        let frame = self.frame_region(self.current_frame());
        target.draw_sprite(&frame, position, scale);
    }
}

/// One clip for each facing and action.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTable {
    left_idle: AnimationClip,
    left_slithering: AnimationClip,
    right_idle: AnimationClip,
    right_slithering: AnimationClip,
}

impl AnimationTable {
    /// Builds a table by asking `build` for every `(Facing, Action)` pair.
    #[must_use]
    pub fn from_fn<F>(mut build: F) -> Self
    where
        F: FnMut(Facing, Action) -> AnimationClip,
    {
        Self {
            left_idle: build(Facing::Left, Action::Idle),
            left_slithering: build(Facing::Left, Action::Slithering),
            right_idle: build(Facing::Right, Action::Idle),
            right_slithering: build(Facing::Right, Action::Slithering),
        }
    }

    /// The snake's clips: the right-facing row sits at the top of the sheet
    /// and the left-facing row directly below it.
    #[must_use]
    pub fn snake() -> Self {
        Self::from_fn(|facing, action| {
            let row = match facing {
                Facing::Right => 0.0,
                Facing::Left => HEIGHT,
            };
            let (frame_count, frame_duration) = match action {
                Action::Idle => (IDLE_FRAME_COUNT, IDLE_FRAME_DURATION),
                Action::Slithering => (SLITHER_FRAME_COUNT, SLITHER_FRAME_DURATION),
            };
            AnimationClip::from_static(
                SPRITESHEET,
                Vec2::new(0.0, row),
                Vec2::new(WIDTH, HEIGHT),
                frame_count,
                frame_duration,
                true,
            )
        })
    }

    /// The clip for a facing and action.
    #[must_use]
    pub const fn get(&self, facing: Facing, action: Action) -> &AnimationClip {
        match (facing, action) {
            (Facing::Left, Action::Idle) => &self.left_idle,
            (Facing::Left, Action::Slithering) => &self.left_slithering,
            (Facing::Right, Action::Idle) => &self.right_idle,
            (Facing::Right, Action::Slithering) => &self.right_slithering,
        }
    }

    /// Mutable access to the clip for a facing and action.
    pub const fn get_mut(&mut self, facing: Facing, action: Action) -> &mut AnimationClip {
        match (facing, action) {
            (Facing::Left, Action::Idle) => &mut self.left_idle,
            (Facing::Left, Action::Slithering) => &mut self.left_slithering,
            (Facing::Right, Action::Idle) => &mut self.right_idle,
            (Facing::Right, Action::Slithering) => &mut self.right_slithering,
        }
    }

    /// All four entries with their keys.
    pub fn iter(&self) -> impl Iterator<Item = ((Facing, Action), &AnimationClip)> {
        Facing::ALL.into_iter().flat_map(move |facing| {
            Action::ALL
                .into_iter()
                .map(move |action| ((facing, action), self.get(facing, action)))
        })
    }
}

impl Index<(Facing, Action)> for AnimationTable {
    type Output = AnimationClip;

    fn index(&self, (facing, action): (Facing, Action)) -> &Self::Output {
        self.get(facing, action)
    }
}

impl Default for AnimationTable {
    fn default() -> Self {
        Self::snake()
    }
}
