//! The snake actor: a scripted enemy that waits, slithers and turns around.
//!
//! The owning game loop calls [`Snake::update`] and then [`Snake::draw`] once
//! per frame. Facing and action are recomputed from the elapsed time on every
//! update, so the snake carries no state machine memory beyond its clock.

use glam::Vec2;
use log::{debug, warn};

use crate::animation::{AnimationClip, AnimationTable};
use crate::bounding_box::BoundingBox;
use crate::error::SlitherError;
use crate::pose::{Action, Facing, Pose};
use crate::render::RenderTarget;
use crate::script::SlitherScript;
use crate::SCALE;

/// A snake living in the village level.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    position: Vec2,
    facing: Facing,
    action: Action,
    animations: AnimationTable,
    /// Collision rectangle queried by other systems.
    pub bounding_box: BoundingBox,
    /// Collision rectangle from the previous frame.
    ///
    /// Equal to `bounding_box` at construction. [`Snake::update`] leaves it
    /// alone; collision systems that want a per-frame snapshot call
    /// [`Snake::roll_bounding_box`] before moving the snake.
    pub last_bounding_box: BoundingBox,
    elapsed_time: f64,
    hop_count: u32,
    script: SlitherScript,
}

impl Snake {
    /// Creates a snake at `(x, y)` following the default slither pattern.
    ///
    /// # Examples
    /// ```
    /// use slither::{Action, Facing, Snake};
    /// let snake = Snake::new(100.0, 20.0);
    /// assert_eq!(snake.facing(), Facing::Left);
    /// assert_eq!(snake.action(), Action::Idle);
    /// assert_eq!(snake.hop_count(), 0);
    /// ```
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self::build(x, y, SlitherScript::DEFAULT)
    }

    /// Creates a snake at `(x, y)` following a custom pattern.
    ///
    /// # Errors
    /// Returns [`SlitherError::InvalidScript`] when `script` fails
    /// [`SlitherScript::validate`].
    pub fn with_script(x: f32, y: f32, script: SlitherScript) -> Result<Self, SlitherError> {
        script.validate()?;
        Ok(Self::build(x, y, script))
    }

    fn build(x: f32, y: f32, script: SlitherScript) -> Self {
        let bounding_box = BoundingBox::default();
        Self {
            position: Vec2::new(x, y),
            facing: Facing::Left,
            action: Action::Idle,
            animations: AnimationTable::snake(),
            bounding_box,
            last_bounding_box: bounding_box,
            elapsed_time: 0.0,
            hop_count: 0,
            script,
        }
    }

    /// Advances the snake by one frame lasting `delta` seconds.
    ///
    /// The pose is derived from the time elapsed before this frame, then the
    /// clock moves on and the snake slithers if the pose says so. A
    /// non-finite `delta` leaves the snake untouched.
    pub fn update(&mut self, delta: f32) {
        if !delta.is_finite() {
            warn!("ignoring non-finite snake time step {delta}");
            return;
        }

        let Pose {
            facing,
            action,
            hops,
        } = self.script.pose_at(self.elapsed_time);
        if facing != self.facing {
            debug!(
                "snake at x={:.1} turned {facing:?} after {hops} hops",
                self.position.x
            );
        }
        self.facing = facing;
        self.action = action;
        self.hop_count = hops;

        self.elapsed_time += f64::from(delta);

        if self.action.moves() {
            self.position.x += self.facing.direction() * self.script.speed * delta;
        }
    }

    /// Draws the clip for the current facing and action at the snake's
    /// position. The clip advances its own frame timer by `tick`.
    pub fn draw<R: RenderTarget + ?Sized>(&mut self, target: &mut R, tick: f32) {
        let position = self.position;
        self.animations
            .get_mut(self.facing, self.action)
            .draw_frame(tick, target, position, SCALE);
    }

    /// Copies the current bounding box into `last_bounding_box`.
    pub const fn roll_bounding_box(&mut self) {
        self.last_bounding_box = self.bounding_box;
    }

    /// World position of the snake's top-left corner.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Facing derived on the last update.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }

    /// Action derived on the last update.
    #[must_use]
    pub const fn action(&self) -> Action {
        self.action
    }

    /// Facing, action and hop count derived on the last update.
    #[must_use]
    pub const fn pose(&self) -> Pose {
        Pose {
            facing: self.facing,
            action: self.action,
            hops: self.hop_count,
        }
    }

    /// Completed wait-then-slither cycles as of the last update.
    #[must_use]
    pub const fn hop_count(&self) -> u32 {
        self.hop_count
    }

    /// Seconds accumulated over every update so far.
    #[must_use]
    pub const fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Timing pattern the snake follows.
    #[must_use]
    pub const fn script(&self) -> &SlitherScript {
        &self.script
    }

    /// All four animation clips.
    #[must_use]
    pub const fn animations(&self) -> &AnimationTable {
        &self.animations
    }

    /// The clip [`Snake::draw`] will use next.
    #[must_use]
    pub const fn current_clip(&self) -> &AnimationClip {
        self.animations.get(self.facing, self.action)
    }
}
