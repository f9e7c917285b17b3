//! Utility helpers for tests.
pub mod recording;
pub mod stepping;

pub use recording::{DrawCall, RecordingTarget};
pub use stepping::{step_for, step_frames, Trace};
