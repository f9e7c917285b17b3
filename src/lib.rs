#![cfg_attr(docsrs, feature(doc_cfg))]
//! Scripted, animated snake actor for a 2D side-view game.
//!
//! The snake waits, slithers, waits, slithers again and turns around. It is
//! advanced once per frame by the owning loop, draws through a
//! [`RenderTarget`], and exposes its bounding boxes for collision systems.
//! [`plugin::SnakePlugin`] runs the same logic inside a Bevy app.
pub mod animation;
pub mod bounding_box;
pub mod constants;
pub mod error;
pub mod logging;
pub mod numeric;
pub mod plugin;
pub mod pose;
pub mod render;
pub mod script;
pub mod snake;
pub use constants::*;

// Re-export commonly used items
pub use animation::{AnimationClip, AnimationTable};
pub use bounding_box::BoundingBox;
pub use error::SlitherError;
pub use logging::init as init_logging;
pub use plugin::{SnakeActor, SnakeBundle, SnakePlugin, SpriteSlot};
pub use pose::{Action, Facing, Pose};
pub use render::{RenderTarget, SpriteFrame};
pub use script::SlitherScript;
pub use snake::Snake;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use slither::prelude::*;
    //! ```

    pub use crate::Action;
    pub use crate::Facing;
    pub use crate::RenderTarget;
    pub use crate::SlitherScript;
    pub use crate::Snake;
    pub use crate::SnakePlugin;
    pub use crate::SpriteFrame;
}
