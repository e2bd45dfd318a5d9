//! Core domain: game states, shared messages and camera setup.

mod events;
mod state;
mod systems;

pub use events::SceneTransitionRequested;
pub use state::GameState;
pub use systems::MainCamera;

use bevy::prelude::*;

use crate::content::load_content;
use crate::core::systems::{apply_view_settings, setup_camera};

/// Per-frame ordering of the gameplay pass.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Sample level state and derive press edges.
    Input,
    /// Actor velocity and facing, skipped while a dialog is open.
    Movement,
    /// Door scanning and dialog input.
    Interaction,
    /// Animation, overlays and camera.
    Presentation,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_message::<SceneTransitionRequested>()
            .configure_sets(
                Update,
                (
                    TickSet::Input,
                    TickSet::Movement,
                    TickSet::Interaction,
                    TickSet::Presentation,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                (setup_camera, apply_view_settings.after(load_content)).chain(),
            );
    }
}
