//! Scenes domain: the parametrised scene, its lifecycle and camera.

mod camera;
mod director;
mod systems;

#[cfg(test)]
mod tests;

pub use camera::{SceneBounds, clamp_camera};
pub use director::{SceneDirector, pick_start_scene};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::scenes::camera::follow_actor;
use crate::scenes::systems::{
    advance_scene, boot_start_scene, enter_scene, exit_scene, handle_transition_requests,
};

/// Marker for everything owned by the live scene; despawned on exit.
#[derive(Component, Debug)]
pub struct SceneEntity;

pub struct ScenesPlugin;

impl Plugin for ScenesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneDirector>()
            .init_resource::<SceneBounds>()
            .add_systems(Update, boot_start_scene.run_if(in_state(GameState::Boot)))
            .add_systems(OnEnter(GameState::Explore), enter_scene)
            .add_systems(OnExit(GameState::Explore), exit_scene)
            .add_systems(OnEnter(GameState::SceneChange), advance_scene)
            .add_systems(
                Update,
                (handle_transition_requests, follow_actor)
                    .chain()
                    .in_set(TickSet::Presentation)
                    .run_if(in_state(GameState::Explore)),
            );
    }
}
