//! Movement domain: per-tick actor velocity and facing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::GameSettings;
use crate::movement::{ControlInput, MovementState, Player, resolve_motion};
use crate::sprites::PlayerAnimation;

pub(crate) fn drive_actor(
    input: Res<ControlInput>,
    settings: Res<GameSettings>,
    mut query: Query<
        (
            &mut MovementState,
            &mut LinearVelocity,
            &mut PlayerAnimation,
        ),
        With<Player>,
    >,
) {
    for (mut state, mut velocity, mut animation) in &mut query {
        let resolution = resolve_motion(input.held, state.facing, settings.player_speed);

        let moving = resolution.velocity != Vec2::ZERO;
        if moving != state.moving {
            debug!("[MOVE] {}", resolution.animation);
        }

        velocity.0 = resolution.velocity;
        state.facing = resolution.facing;
        state.moving = moving;
        animation.play(resolution.animation);
    }
}

/// Keeps the actor pinned while a dialog owns the controls.
pub(crate) fn hold_actor_still(mut query: Query<&mut LinearVelocity, With<Player>>) {
    for mut velocity in &mut query {
        if velocity.0 != Vec2::ZERO {
            velocity.0 = Vec2::ZERO;
        }
    }
}
