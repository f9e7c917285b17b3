//! Bevy plugin driving snakes from the ECS schedule.
//!
//! `SnakePlugin` advances every [`SnakeActor`] with the frame delta from
//! `Res<Time>`, mirrors its position into the entity's `Transform` and lets
//! it draw into a [`SpriteSlot`]. A downstream renderer reads the slot; the
//! plugin itself draws nothing.

use bevy::prelude::*;
use glam::Vec2;

use crate::error::SlitherError;
use crate::render::{RenderTarget, SpriteFrame};
use crate::script::SlitherScript;
use crate::snake::Snake;

/// ECS wrapper around a [`Snake`].
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct SnakeActor(pub Snake);

/// Last frame an actor asked to draw.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct SpriteSlot {
    /// Sheet rectangle to show, `None` until the first draw.
    pub frame: Option<SpriteFrame>,
    /// Top-left corner in world coordinates.
    pub position: Vec2,
    /// On-screen scale factor.
    pub scale: f32,
}

impl RenderTarget for SpriteSlot {
    fn draw_sprite(&mut self, frame: &SpriteFrame, position: Vec2, scale: f32) {
        self.frame = Some(*frame);
        self.position = position;
        self.scale = scale;
    }
}

/// Components for a snake entity.
#[derive(Bundle)]
pub struct SnakeBundle {
    /// The scripted actor.
    pub actor: SnakeActor,
    /// Frame output read by renderers.
    pub slot: SpriteSlot,
    /// World transform kept in sync with the actor's position.
    pub transform: Transform,
    /// Human-readable name for debugging.
    pub name: Name,
}

impl SnakeBundle {
    /// A snake at `(x, y)` following the default pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use slither::plugin::SnakeBundle;
    ///
    /// let bundle = SnakeBundle::new(10.0, 20.0);
    /// assert_eq!(bundle.name.as_str(), "Snake");
    /// assert_eq!(bundle.transform.translation.x, 10.0);
    /// ```
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self::from_snake(Snake::new(x, y))
    }

    /// A snake at `(x, y)` following `script`.
    ///
    /// # Errors
    /// Returns [`SlitherError::InvalidScript`] when `script` is unusable.
    pub fn with_script(x: f32, y: f32, script: SlitherScript) -> Result<Self, SlitherError> {
        Snake::with_script(x, y, script).map(Self::from_snake)
    }

    fn from_snake(snake: Snake) -> Self {
        let position = snake.position();
        Self {
            actor: SnakeActor(snake),
            slot: SpriteSlot::default(),
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            name: Name::new("Snake"),
        }
    }
}

/// Steps every snake by the frame delta and syncs its `Transform`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn advance_snakes_system(
    time: Res<Time>,
    mut snakes: Query<(&mut SnakeActor, &mut Transform)>,
) {
    let delta = time.delta_secs();
    for (mut actor, mut transform) in &mut snakes {
        actor.update(delta);
        let position = actor.position();
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}

/// Lets every snake draw its current frame into its [`SpriteSlot`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn draw_snakes_system(
    time: Res<Time>,
    mut snakes: Query<(&mut SnakeActor, &mut SpriteSlot)>,
) {
    let tick = time.delta_secs();
    for (mut actor, mut slot) in &mut snakes {
        actor.draw(&mut *slot, tick);
    }
}

/// Plugin advancing and drawing snakes each `Update`.
///
/// Expects a `Time` resource, normally provided by `TimePlugin`.
#[derive(Debug, Default)]
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (advance_snakes_system, draw_snakes_system).chain());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::pose::{Action, Facing};
    use crate::{HEIGHT, SCALE, SPEED};
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    fn tick(app: &mut App, frames: u32) {
        for _ in 0..frames {
            app.world_mut()
                .resource_mut::<Time>()
                .advance_by(Duration::from_secs_f32(1.0 / 64.0));
            app.update();
        }
    }

    #[fixture]
    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_plugins(SnakePlugin);
        app
    }

    #[rstest]
    fn transform_follows_the_snake(mut app: App) {
        let id = app.world_mut().spawn(SnakeBundle::new(0.0, 40.0)).id();
        tick(&mut app, 97);

        let actor = app.world().get::<SnakeActor>(id).expect("actor");
        assert_eq!(actor.action(), Action::Idle);
        assert_eq!(actor.hop_count(), 1);

        let transform = app.world().get::<Transform>(id).expect("transform");
        assert_relative_eq!(transform.translation.x, -SPEED, epsilon = 1e-3);
        assert_relative_eq!(transform.translation.y, 40.0);
    }

    #[rstest]
    fn slot_receives_current_frame(mut app: App) {
        let id = app.world_mut().spawn(SnakeBundle::new(5.0, 0.0)).id();
        tick(&mut app, 1);

        let slot = app.world().get::<SpriteSlot>(id).expect("slot");
        let frame = slot.frame.expect("snake should have drawn");
        assert_relative_eq!(frame.source_y, HEIGHT);
        assert_relative_eq!(slot.scale, SCALE);
        assert_eq!(slot.position, Vec2::new(5.0, 0.0));
    }

    #[rstest]
    fn snakes_advance_independently(mut app: App) {
        let fast = SlitherScript {
            hops_per_turn: 1,
            ..SlitherScript::DEFAULT
        };
        let plain = app.world_mut().spawn(SnakeBundle::new(0.0, 0.0)).id();
        let quick = app
            .world_mut()
            .spawn(SnakeBundle::with_script(0.0, 0.0, fast).expect("valid script"))
            .id();
        tick(&mut app, 97);

        let world = app.world();
        let plain_facing = world.get::<SnakeActor>(plain).expect("actor").facing();
        let quick_facing = world.get::<SnakeActor>(quick).expect("actor").facing();
        assert_eq!(plain_facing, Facing::Left);
        assert_eq!(quick_facing, Facing::Right);
    }

    #[test]
    fn bundle_rejects_zero_length_cycle() {
        let script = SlitherScript {
            cycle_seconds: 0.0,
            ..SlitherScript::DEFAULT
        };
        let result = SnakeBundle::with_script(0.0, 0.0, script);
        assert!(matches!(result, Err(SlitherError::InvalidScript(_))));
    }

    #[test]
    fn sprite_slot_starts_empty() {
        let slot = SpriteSlot::default();
        assert!(slot.frame.is_none());
    }
}
