//! Movement domain: system modules for locomotion updates.

pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use input::sample_control_input;
pub(crate) use movement::{drive_actor, hold_actor_still};
