//! Interaction domain: door scanning, the confirmation dialog and its overlay.

mod session;
mod systems;
mod ui;


pub use session::{
    DialogChoice, DialogSession, DoorInteraction, InteractionEdges, InteractionMode,
    InteractionOutcome,
};
pub use systems::{dialog_open, interaction_idle};
pub use ui::{DialogOptionText, DoorDialogUI, option_color};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::interaction::systems::update_door_interaction;
use crate::interaction::ui::sync_door_dialog;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DoorInteraction>()
            .add_systems(
                Update,
                update_door_interaction
                    .in_set(TickSet::Interaction)
                    .run_if(in_state(GameState::Explore)),
            )
            .add_systems(
                Update,
                sync_door_dialog
                    .in_set(TickSet::Presentation)
                    .run_if(in_state(GameState::Explore)),
            );
    }
}
