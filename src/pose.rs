//! Facing and action classification for the snake.

use serde::{Deserialize, Serialize};

/// Which way the snake is looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Looking towards negative x.
    #[default]
    Left,
    /// Looking towards positive x.
    Right,
}

impl Facing {
    /// Both facings, in table order.
    pub const ALL: [Self; 2] = [Self::Left, Self::Right];

    /// Sign applied to horizontal movement: `-1` for left, `+1` for right.
    ///
    /// # Examples
    /// ```
    /// use slither::Facing;
    /// assert_eq!(Facing::Left.direction(), -1.0);
    /// assert_eq!(Facing::Right.direction(), 1.0);
    /// ```
    #[must_use]
    pub const fn direction(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// What the snake is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Resting in place.
    #[default]
    Idle,
    /// Moving horizontally in the facing direction.
    Slithering,
}

impl Action {
    /// Both actions, in table order.
    pub const ALL: [Self; 2] = [Self::Idle, Self::Slithering];

    /// Whether this action moves the snake.
    #[must_use]
    pub const fn moves(self) -> bool {
        matches!(self, Self::Slithering)
    }
}

/// Snapshot of the scripted state derived from elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pose {
    /// Facing for the frame.
    pub facing: Facing,
    /// Action for the frame.
    pub action: Action,
    /// Completed wait-then-slither cycles.
    pub hops: u32,
}
