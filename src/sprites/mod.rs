//! Sprites module for actor sheet loading and animation playback.

pub mod animation;

use bevy::prelude::*;

pub use animation::*;

use crate::core::{GameState, TickSet};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_actor_sheets).add_systems(
            Update,
            animate_actor_sprites
                .in_set(TickSet::Presentation)
                .run_if(in_state(GameState::Explore)),
        );
    }
}
