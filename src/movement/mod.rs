//! Movement domain: input sampling, direction resolution and actor motion.

mod bootstrap;
mod components;
mod direction;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::*;
pub use direction::*;
pub use resources::*;

pub(crate) use bootstrap::spawn_actor;
pub(crate) use systems::{drive_actor, hold_actor_still};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::interaction::{dialog_open, interaction_idle};
use crate::movement::systems::sample_control_input;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlInput>()
            .init_resource::<KeyBindings>()
            // Edges stay current across scene changes so a held key never re-fires
            .add_systems(Update, sample_control_input.in_set(TickSet::Input))
            .add_systems(
                Update,
                (
                    drive_actor.run_if(interaction_idle),
                    hold_actor_still.run_if(dialog_open),
                )
                    .in_set(TickSet::Movement)
                    .run_if(in_state(GameState::Explore)),
            );
    }
}
