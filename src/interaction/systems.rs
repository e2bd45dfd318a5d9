//! Interaction domain: systems driving the door/dialog state machine.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::core::SceneTransitionRequested;
use crate::interaction::{DoorInteraction, InteractionEdges, InteractionOutcome};
use crate::map::DoorRegistry;
use crate::movement::{AnimationKey, ControlInput, MovementState, Player, actor_bounds};
use crate::sprites::PlayerAnimation;

/// Run condition: true while no dialog owns the controls
pub fn interaction_idle(interaction: Res<DoorInteraction>) -> bool {
    !interaction.is_dialog_open()
}

/// Run condition: true while a dialog is open
pub fn dialog_open(interaction: Res<DoorInteraction>) -> bool {
    interaction.is_dialog_open()
}

pub(crate) fn update_door_interaction(
    input: Res<ControlInput>,
    doors: Res<DoorRegistry>,
    mut interaction: ResMut<DoorInteraction>,
    mut actors: Query<
        (
            &Transform,
            &mut MovementState,
            &mut LinearVelocity,
            &mut PlayerAnimation,
        ),
        With<Player>,
    >,
    mut transitions: MessageWriter<SceneTransitionRequested>,
) {
    let Ok((transform, mut state, mut velocity, mut animation)) = actors.single_mut() else {
        return;
    };

    let edges = InteractionEdges {
        interact: input.interact.just_pressed(),
        left: input.left.just_pressed(),
        right: input.right.just_pressed(),
    };
    if edges == InteractionEdges::default() {
        return;
    }

    let bounds = actor_bounds(transform.translation.truncate());
    let Some(outcome) = interaction.step(edges, bounds, &doors) else {
        return;
    };

    match outcome {
        InteractionOutcome::DialogOpened {
            door_index,
            destination,
        } => {
            let name = doors.get(door_index).map_or("", |door| door.name.as_str());
            info!(
                "[DOOR] Interact on door #{} '{}' -> dialog open for '{}'",
                door_index, name, destination
            );
            velocity.0 = Vec2::ZERO;
            state.moving = false;
            animation.play(AnimationKey::idle(state.facing));
        }
        InteractionOutcome::SelectionChanged(choice) => {
            debug!("[DIALOG] Selection -> {}", choice.label());
        }
        InteractionOutcome::Cancelled => {
            info!("[DIALOG] Cancelled, back to exploring");
        }
        InteractionOutcome::Confirmed { destination } => {
            info!("[DIALOG] Confirmed, requesting scene '{}'", destination);
            transitions.write(SceneTransitionRequested { destination });
        }
    }
}
