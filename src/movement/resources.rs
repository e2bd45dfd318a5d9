//! Movement domain: input sampling resources and key bindings.

use bevy::prelude::*;

use crate::movement::HeldDirections;

/// Derives a press edge by comparing this tick's level with the last one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    previous: bool,
    current: bool,
}

impl EdgeDetector {
    pub fn update(&mut self, pressed: bool) {
        self.previous = self.current;
        self.current = pressed;
    }

    /// True only on the first tick of a press.
    pub fn just_pressed(&self) -> bool {
        self.current && !self.previous
    }
}

/// Input for the current tick, sampled once at the start of the frame.
#[derive(Resource, Debug, Default)]
pub struct ControlInput {
    pub held: HeldDirections,
    pub interact: EdgeDetector,
    pub left: EdgeDetector,
    pub right: EdgeDetector,
}

impl ControlInput {
    pub fn sample(&mut self, held: HeldDirections, interact_pressed: bool) {
        self.held = held;
        self.interact.update(interact_pressed);
        self.left.update(held.left);
        self.right.update(held.right);
    }
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub up: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub interact: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: vec![KeyCode::ArrowUp, KeyCode::KeyW],
            down: vec![KeyCode::ArrowDown, KeyCode::KeyS],
            left: vec![KeyCode::ArrowLeft, KeyCode::KeyA],
            right: vec![KeyCode::ArrowRight, KeyCode::KeyD],
            interact: vec![KeyCode::Space, KeyCode::KeyE],
        }
    }
}

impl KeyBindings {
    pub fn any_pressed(keys: &[KeyCode], keyboard: &ButtonInput<KeyCode>) -> bool {
        keys.iter().any(|key| keyboard.pressed(*key))
    }
}
