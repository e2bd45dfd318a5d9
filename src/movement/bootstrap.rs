//! Movement domain: actor spawning for a freshly entered scene.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ACTOR_BODY_SIZE, ACTOR_SPRITE_OFFSET, GameLayer, MovementState, Player, body_center_from_feet,
};
use crate::scenes::SceneEntity;
use crate::sprites::{ActorSheets, ActorSprite, PlayerAnimation};

/// Draw depth of the actor; tile layers at depth 2 cover it.
const ACTOR_DEPTH: f32 = 1.0;

/// Spawn the actor standing on `feet` (world space). The actor belongs to the
/// scene and is despawned with it.
pub(crate) fn spawn_actor(commands: &mut Commands, sheets: &ActorSheets, feet: Vec2) -> Entity {
    let center = body_center_from_feet(feet);
    let animation = PlayerAnimation::default();

    info!(
        "[SCENE] Spawning actor at ({:.0}, {:.0}) playing {}",
        feet.x,
        feet.y,
        animation.key()
    );

    commands
        .spawn((
            // Identity & Movement
            (SceneEntity, Player, MovementState::default(), animation),
            // Rendering
            (
                Transform::from_xyz(center.x, center.y, ACTOR_DEPTH),
                Visibility::default(),
            ),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(ACTOR_BODY_SIZE.x, ACTOR_BODY_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(0.0),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::World]),
            ),
        ))
        .with_child((
            ActorSprite,
            sheets.sprite(&PlayerAnimation::default()),
            Transform::from_translation(ACTOR_SPRITE_OFFSET),
        ))
        .id()
}
