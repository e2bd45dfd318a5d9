//! Interaction domain: the door/dialog state machine.
//!
//! `Exploring` scans for a door on each fresh interact press; `DialogOpen`
//! owns the controls until the dialog is resolved. Both modes advance through
//! [`DoorInteraction::step`], once per tick.

use bevy::prelude::*;

use crate::map::DoorRegistry;

/// Option highlighted in the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogChoice {
    #[default]
    Confirm,
    Cancel,
}

impl DialogChoice {
    pub fn label(self) -> &'static str {
        match self {
            DialogChoice::Confirm => "Yes",
            DialogChoice::Cancel => "No",
        }
    }
}

/// An open confirmation dialog and the door that opened it.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogSession {
    /// Index of the triggering door in the scene's registry.
    pub door_index: usize,
    pub destination: String,
    pub selection: DialogChoice,
}

impl DialogSession {
    /// Left always selects confirm and right always selects cancel.
    fn apply_toggle(&mut self, edges: InteractionEdges) -> Option<DialogChoice> {
        let wanted = if edges.left {
            DialogChoice::Confirm
        } else if edges.right {
            DialogChoice::Cancel
        } else {
            return None;
        };

        if wanted == self.selection {
            return None;
        }
        self.selection = wanted;
        Some(wanted)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionMode {
    #[default]
    Exploring,
    DialogOpen(DialogSession),
}

/// Press edges relevant to doors and dialogs for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionEdges {
    pub interact: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InteractionOutcome {
    DialogOpened {
        door_index: usize,
        destination: String,
    },
    SelectionChanged(DialogChoice),
    /// Dialog closed with no effect.
    Cancelled,
    /// Dialog closed; the scene must change to `destination`.
    Confirmed {
        destination: String,
    },
}

/// Control mode of the live scene. Reset whenever a scene is entered.
#[derive(Resource, Debug, Default)]
pub struct DoorInteraction {
    mode: InteractionMode,
}

impl DoorInteraction {
    pub fn mode(&self) -> &InteractionMode {
        &self.mode
    }

    pub fn session(&self) -> Option<&DialogSession> {
        match &self.mode {
            InteractionMode::DialogOpen(session) => Some(session),
            InteractionMode::Exploring => None,
        }
    }

    pub fn is_dialog_open(&self) -> bool {
        self.session().is_some()
    }

    pub fn selection(&self) -> Option<DialogChoice> {
        self.session().map(|s| s.selection)
    }

    pub fn reset(&mut self) {
        self.mode = InteractionMode::Exploring;
    }

    /// Advance one tick. `actor_bounds` and `doors` are only consulted while
    /// exploring.
    pub fn step(
        &mut self,
        edges: InteractionEdges,
        actor_bounds: Rect,
        doors: &DoorRegistry,
    ) -> Option<InteractionOutcome> {
        if let InteractionMode::DialogOpen(session) = &mut self.mode {
            let changed = session.apply_toggle(edges);
            if !edges.interact {
                return changed.map(InteractionOutcome::SelectionChanged);
            }

            let outcome = match session.selection {
                DialogChoice::Confirm => InteractionOutcome::Confirmed {
                    destination: session.destination.clone(),
                },
                DialogChoice::Cancel => InteractionOutcome::Cancelled,
            };
            self.mode = InteractionMode::Exploring;
            return Some(outcome);
        }

        if !edges.interact {
            return None;
        }

        // First overlapping door wins even when it is inert
        let (door_index, door) = doors.first_overlapping(actor_bounds)?;
        let destination = door.destination.clone()?;

        self.mode = InteractionMode::DialogOpen(DialogSession {
            door_index,
            destination: destination.clone(),
            selection: DialogChoice::default(),
        });

        Some(InteractionOutcome::DialogOpened {
            door_index,
            destination,
        })
    }
}
