//! Core domain: game state definitions for the scene flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is loaded and the start scene has not been entered yet.
    #[default]
    Boot,
    /// A scene is live: the actor walks and doors can be used.
    Explore,
    /// One frame between tearing the old scene down and building the next.
    SceneChange,
}
