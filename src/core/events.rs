//! Core domain: messages shared between the scene flow and gameplay.

use bevy::ecs::message::Message;

/// Request to leave the current scene for `destination`.
///
/// Fire-and-forget: the sender gets no answer, an unknown destination is
/// logged and dropped by the scene director.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneTransitionRequested {
    pub destination: String,
}

impl Message for SceneTransitionRequested {}
