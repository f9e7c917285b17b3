//! Sprite-sheet geometry and behaviour constants for the snake.
//!
//! These values describe how the snake is laid out on its sprite sheet and
//! how it moves. They are hardcoded; runtime tuning of the timing goes through
//! [`crate::script::SlitherScript`] instead.

use static_assertions::const_assert;

/// The width, in pixels, of one snake frame on the sprite sheet.
pub const WIDTH: f32 = 40.0;
/// The height, in pixels, of one snake frame on the sprite sheet.
pub const HEIGHT: f32 = 13.0;
/// How much bigger the snake is drawn on the canvas than on the sprite sheet.
pub const SCALE: f32 = 5.0;
/// Width of the snake on the canvas.
pub const SCALED_WIDTH: f32 = SCALE * WIDTH;
/// Height of the snake on the canvas.
pub const SCALED_HEIGHT: f32 = SCALE * HEIGHT;
/// Horizontal slithering speed in world units per second.
pub const SPEED: f32 = SCALE * 30.0;
/// Path of the snake sprite sheet.
pub const SPRITESHEET: &str = "./sprites/snake.png";

/// Length of one wait-then-slither cycle in seconds.
pub const CYCLE_SECONDS: f64 = 1.5;
/// Portion of each cycle spent idle, at the start of the cycle.
pub const IDLE_SECONDS: f64 = 0.5;
/// Completed cycles between each change of facing.
pub const HOPS_PER_TURN: u32 = 2;

/// Frames in the idle clip.
pub const IDLE_FRAME_COUNT: u32 = 1;
/// Seconds each idle frame is shown.
pub const IDLE_FRAME_DURATION: f32 = 1.0;
/// Frames in the slithering clip.
pub const SLITHER_FRAME_COUNT: u32 = 9;
/// Seconds each slithering frame is shown; nine frames make one second.
pub const SLITHER_FRAME_DURATION: f32 = 1.0 / 9.0;

const_assert!(IDLE_SECONDS >= 0.0 && IDLE_SECONDS <= CYCLE_SECONDS);
const_assert!(CYCLE_SECONDS > 0.0);
const_assert!(HOPS_PER_TURN > 0);
const_assert!(IDLE_FRAME_COUNT > 0 && SLITHER_FRAME_COUNT > 0);
const_assert!(IDLE_FRAME_DURATION > 0.0 && SLITHER_FRAME_DURATION > 0.0);
