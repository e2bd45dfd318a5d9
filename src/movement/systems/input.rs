//! Movement domain: input sampling for locomotion and interaction.

use bevy::prelude::*;

use crate::movement::{ControlInput, HeldDirections, KeyBindings};

/// Reads only level state; press edges come from `ControlInput`'s own
/// previous/current comparison.
pub(crate) fn sample_control_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut input: ResMut<ControlInput>,
) {
    let held = HeldDirections {
        left: KeyBindings::any_pressed(&bindings.left, &keyboard),
        right: KeyBindings::any_pressed(&bindings.right, &keyboard),
        up: KeyBindings::any_pressed(&bindings.up, &keyboard),
        down: KeyBindings::any_pressed(&bindings.down, &keyboard),
    };
    let interact = KeyBindings::any_pressed(&bindings.interact, &keyboard);

    input.sample(held, interact);
}
