//! Movement domain: actor components, geometry and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::Facing;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Collidable tiles and map bounds
    World,
    /// The walking actor
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    /// Last direction actually applied. Starts facing down.
    pub facing: Facing,
    pub moving: bool,
}

/// Sprite frame drawn for the actor.
pub const ACTOR_FRAME_SIZE: Vec2 = Vec2::new(16.0, 32.0);

/// Physics body at the actor's feet.
pub const ACTOR_BODY_SIZE: Vec2 = Vec2::new(12.0, 8.0);

/// The actor entity sits at the body's center, half a body above the feet.
const BODY_ABOVE_FEET: f32 = ACTOR_BODY_SIZE.y / 2.0;

/// Offset of the sprite child from the body center.
pub const ACTOR_SPRITE_OFFSET: Vec3 =
    Vec3::new(0.0, ACTOR_FRAME_SIZE.y / 2.0 - BODY_ABOVE_FEET, 0.0);

/// Body center for an actor standing on `feet`.
pub fn body_center_from_feet(feet: Vec2) -> Vec2 {
    feet + Vec2::new(0.0, BODY_ABOVE_FEET)
}

/// Full sprite frame around an actor whose body is centered at `center`.
/// Door overlap is tested against this, not the smaller body.
pub fn actor_bounds(center: Vec2) -> Rect {
    let feet_y = center.y - BODY_ABOVE_FEET;
    let half_width = ACTOR_FRAME_SIZE.x / 2.0;
    Rect::new(
        center.x - half_width,
        feet_y,
        center.x + half_width,
        feet_y + ACTOR_FRAME_SIZE.y,
    )
}
