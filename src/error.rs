//! Error type shared by the library.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced while building clips or loading behaviour scripts.
#[derive(Debug, Error)]
pub enum SlitherError {
    /// An animation clip was described with unusable geometry or timing.
    #[error("invalid animation clip: {0}")]
    InvalidClip(&'static str),
    /// A slither script has timings that cannot drive the state machine.
    #[error("invalid slither script: {0}")]
    InvalidScript(&'static str),
    /// A script file could not be read.
    #[error("failed to read script {path}")]
    ScriptIo {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A script was not valid JSON for [`crate::script::SlitherScript`].
    #[error("failed to parse script")]
    ScriptJson(#[from] serde_json::Error),
}
