//! Fixed-step drivers for exercising a snake over simulated time.

use slither::{Pose, Snake};

/// Pose and x position captured after each update.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    pub samples: Vec<(Pose, f32)>,
}

impl Trace {
    /// Net horizontal movement over the traced frames, starting from `start_x`.
    pub fn displacement(&self, start_x: f32) -> f32 {
        self.samples.last().map_or(0.0, |(_, x)| x - start_x)
    }
}

/// Runs `frames` updates of `delta` seconds and records every step.
pub fn step_frames(snake: &mut Snake, frames: u32, delta: f32) -> Trace {
    let mut trace = Trace::default();
    for _ in 0..frames {
        snake.update(delta);
        trace.samples.push((snake.pose(), snake.position().x));
    }
    trace
}

/// Runs updates of `delta` seconds until at least `seconds` have elapsed.
///
/// # Panics
/// Panics if `delta` is not positive.
pub fn step_for(snake: &mut Snake, seconds: f32, delta: f32) -> Trace {
    assert!(delta > 0.0, "delta must be positive, got {delta}");
    let frames = (seconds / delta).round() as u32;
    step_frames(snake, frames, delta)
}
