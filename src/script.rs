//! Timing script driving the snake's wait, slither and turn pattern.
//!
//! The snake waits, slithers, waits, slithers again and then turns around,
//! forever. [`SlitherScript`] holds the parameters of that pattern and
//! [`SlitherScript::pose_at`] turns an elapsed time into a [`Pose`]. The pose
//! depends on nothing but the elapsed time, so it can be recomputed from
//! scratch every frame.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SlitherError;
use crate::numeric::floor_to_u32;
use crate::pose::{Action, Facing, Pose};
use crate::{CYCLE_SECONDS, HOPS_PER_TURN, IDLE_SECONDS, SPEED};

/// Parameters of the scripted movement pattern.
///
/// Scripts can be loaded from JSON; omitted fields keep their defaults.
///
/// ```
/// use slither::SlitherScript;
/// let script = SlitherScript::from_json_str(r#"{ "speed": 60.0 }"#).unwrap();
/// assert_eq!(script.speed, 60.0);
/// assert_eq!(script.cycle_seconds, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlitherScript {
    /// Length of one wait-then-slither cycle in seconds.
    pub cycle_seconds: f64,
    /// Seconds at the start of each cycle spent idle.
    pub idle_seconds: f64,
    /// Completed cycles between each change of facing.
    pub hops_per_turn: u32,
    /// Horizontal speed while slithering, in world units per second.
    pub speed: f32,
}

impl SlitherScript {
    /// Half a second idle, one second slithering, turning every two cycles.
    pub const DEFAULT: Self = Self {
        cycle_seconds: CYCLE_SECONDS,
        idle_seconds: IDLE_SECONDS,
        hops_per_turn: HOPS_PER_TURN,
        speed: SPEED,
    };

    /// Derives the pose for a given elapsed time.
    ///
    /// The action is idle while `elapsed mod cycle` is below the idle
    /// window. Facing starts left and flips every `hops_per_turn` cycles.
    /// Elapsed time is kept in `f64` so frame-sized steps still register
    /// after days of play.
    ///
    /// # Examples
    /// ```
    /// use slither::{Action, Facing, SlitherScript};
    /// let script = SlitherScript::DEFAULT;
    /// assert_eq!(script.pose_at(0.0).action, Action::Idle);
    /// assert_eq!(script.pose_at(0.75).action, Action::Slithering);
    /// assert_eq!(script.pose_at(3.0).facing, Facing::Right);
    /// ```
    #[must_use]
    pub fn pose_at(&self, elapsed: f64) -> Pose {
        let phase = elapsed % self.cycle_seconds;
        let action = if phase < self.idle_seconds {
            Action::Idle
        } else {
            Action::Slithering
        };
        let hops = floor_to_u32(elapsed / self.cycle_seconds);
        let turns = hops / self.hops_per_turn.max(1);
        let facing = if turns % 2 == 0 {
            Facing::Left
        } else {
            Facing::Right
        };
        Pose {
            facing,
            action,
            hops,
        }
    }

    /// Seconds spent facing one way before turning around.
    #[must_use]
    pub fn turn_period(&self) -> f64 {
        self.cycle_seconds * f64::from(self.hops_per_turn)
    }

    /// Checks that the timings describe a usable pattern.
    ///
    /// # Errors
    /// Returns [`SlitherError::InvalidScript`] when the cycle is not a
    /// positive finite length, the idle window falls outside the cycle,
    /// `hops_per_turn` is zero or the speed is negative or non-finite.
    pub fn validate(&self) -> Result<(), SlitherError> {
        if !self.cycle_seconds.is_finite() || self.cycle_seconds <= 0.0 {
            return Err(SlitherError::InvalidScript(
                "cycle_seconds must be positive and finite",
            ));
        }
        if !(0.0..=self.cycle_seconds).contains(&self.idle_seconds) {
            return Err(SlitherError::InvalidScript(
                "idle_seconds must lie within the cycle",
            ));
        }
        if self.hops_per_turn == 0 {
            return Err(SlitherError::InvalidScript(
                "hops_per_turn must be at least one",
            ));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(SlitherError::InvalidScript(
                "speed must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Parses and validates a script from JSON text.
    ///
    /// # Errors
    /// Returns [`SlitherError::ScriptJson`] for malformed JSON or unknown
    /// fields, and [`SlitherError::InvalidScript`] when validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, SlitherError> {
        let script: Self = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    /// Reads, parses and validates a script file.
    ///
    /// # Errors
    /// Returns [`SlitherError::ScriptIo`] if the file cannot be read, plus the
    /// errors of [`Self::from_json_str`].
    pub fn from_json_path(path: &Path) -> Result<Self, SlitherError> {
        let json = fs::read_to_string(path).map_err(|source| SlitherError::ScriptIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl Default for SlitherScript {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, Action::Idle)]
    #[case(0.49, Action::Idle)]
    #[case(0.5, Action::Slithering)]
    #[case(1.49, Action::Slithering)]
    #[case(1.5, Action::Idle)]
    #[case(2.0, Action::Slithering)]
    #[case(4.6, Action::Idle)]
    fn action_follows_cycle_phase(#[case] elapsed: f64, #[case] expected: Action) {
        assert_eq!(SlitherScript::DEFAULT.pose_at(elapsed).action, expected);
    }

    #[rstest]
    #[case(0.0, Facing::Left, 0)]
    #[case(1.5, Facing::Left, 1)]
    #[case(2.99, Facing::Left, 1)]
    #[case(3.0, Facing::Right, 2)]
    #[case(4.5, Facing::Right, 3)]
    #[case(6.0, Facing::Left, 4)]
    #[case(9.0, Facing::Right, 6)]
    fn facing_flips_every_two_hops(
        #[case] elapsed: f64,
        #[case] facing: Facing,
        #[case] hops: u32,
    ) {
        let pose = SlitherScript::DEFAULT.pose_at(elapsed);
        assert_eq!(pose.facing, facing);
        assert_eq!(pose.hops, hops);
    }

    #[test]
    fn action_matches_formula_over_a_long_run() {
        let script = SlitherScript::DEFAULT;
        for step in 0..2_000_u16 {
            let t = f64::from(step) / 64.0;
            let idle = t % 1.5 < 0.5;
            let left = (floor_to_u32(t / 1.5) / 2) % 2 == 0;
            let pose = script.pose_at(t);
            assert_eq!(pose.action == Action::Idle, idle, "action at t={t}");
            assert_eq!(pose.facing == Facing::Left, left, "facing at t={t}");
        }
    }

    #[test]
    fn default_turn_period_is_three_seconds() {
        assert_relative_eq!(SlitherScript::default().turn_period(), 3.0);
    }

    #[rstest]
    #[case(SlitherScript { cycle_seconds: 0.0, ..SlitherScript::DEFAULT })]
    #[case(SlitherScript { cycle_seconds: f64::NAN, ..SlitherScript::DEFAULT })]
    #[case(SlitherScript { idle_seconds: -0.1, ..SlitherScript::DEFAULT })]
    #[case(SlitherScript { idle_seconds: 2.0, ..SlitherScript::DEFAULT })]
    #[case(SlitherScript { hops_per_turn: 0, ..SlitherScript::DEFAULT })]
    #[case(SlitherScript { speed: -1.0, ..SlitherScript::DEFAULT })]
    #[case(SlitherScript { speed: f32::INFINITY, ..SlitherScript::DEFAULT })]
    fn rejects_unusable_scripts(#[case] script: SlitherScript) {
        assert!(matches!(
            script.validate(),
            Err(SlitherError::InvalidScript(_))
        ));
    }

    #[test]
    fn default_script_is_valid() {
        assert!(SlitherScript::DEFAULT.validate().is_ok());
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let script = SlitherScript::from_json_str(r#"{ "hops_per_turn": 3 }"#)
            .expect("script should parse");
        assert_eq!(script.hops_per_turn, 3);
        assert_relative_eq!(script.idle_seconds, IDLE_SECONDS);
        assert_relative_eq!(script.speed, SPEED);
    }

    #[test]
    fn json_rejects_unknown_fields() {
        let err = SlitherScript::from_json_str(r#"{ "hops": 3 }"#)
            .expect_err("unknown field should fail");
        assert!(matches!(err, SlitherError::ScriptJson(_)));
    }

    #[test]
    fn json_is_validated() {
        let err = SlitherScript::from_json_str(r#"{ "cycle_seconds": -1.0 }"#)
            .expect_err("negative cycle should fail");
        assert!(matches!(err, SlitherError::InvalidScript(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("does/not/exist.json");
        let err = SlitherScript::from_json_path(path).expect_err("file is missing");
        match err {
            SlitherError::ScriptIo { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}
