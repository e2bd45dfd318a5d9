//! Scenes domain: which scene is live and which one is queued next.

use bevy::prelude::*;

use crate::content::{GameSettings, SceneRegistry};

/// Tracks the live scene and a pending destination between two scenes.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct SceneDirector {
    current: Option<String>,
    pending: Option<String>,
}

impl SceneDirector {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// Make `id` the live scene directly, dropping any queued destination.
    pub fn start(&mut self, id: impl Into<String>) {
        self.current = Some(id.into());
        self.pending = None;
    }

    /// Queue `destination` if the registry knows it.
    ///
    /// Returns false (and queues nothing) for unknown ids. A later request in
    /// the same frame replaces an earlier one.
    pub fn request(&mut self, destination: &str, registry: &SceneRegistry) -> bool {
        if !registry.contains(destination) {
            return false;
        }
        self.pending = Some(destination.to_string());
        true
    }

    /// Promote the queued destination to the live scene.
    pub fn advance(&mut self) -> Option<&str> {
        let next = self.pending.take()?;
        self.current = Some(next);
        self.current.as_deref()
    }
}

/// Scene entered after boot: the configured start scene, or the first
/// registered scene when the configured one is unknown.
pub fn pick_start_scene(settings: &GameSettings, registry: &SceneRegistry) -> Option<String> {
    if registry.contains(&settings.start_scene) {
        return Some(settings.start_scene.clone());
    }
    registry.scenes.first().map(|scene| scene.id.clone())
}
