//! Scenes domain: camera framing inside the map rectangle.

use bevy::prelude::*;

use crate::content::GameSettings;
use crate::core::MainCamera;
use crate::movement::Player;

/// World-space rectangle of the live map.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SceneBounds(pub Rect);

/// Camera center that keeps a `view`-sized window inside `bounds`.
///
/// Along an axis where the map is smaller than the view, the camera sits on the
/// map's center.
pub fn clamp_camera(target: Vec2, view: Vec2, bounds: Rect) -> Vec2 {
    let half = view / 2.0;
    let size = bounds.size();
    let center = bounds.center();

    let axis = |target: f32, half: f32, size: f32, center: f32, min: f32, max: f32| {
        if size <= half * 2.0 {
            center
        } else {
            target.clamp(min + half, max - half)
        }
    };

    Vec2::new(
        axis(target.x, half.x, size.x, center.x, bounds.min.x, bounds.max.x),
        axis(target.y, half.y, size.y, center.y, bounds.min.y, bounds.max.y),
    )
}

pub(crate) fn follow_actor(
    settings: Res<GameSettings>,
    bounds: Res<SceneBounds>,
    actors: Query<&Transform, With<Player>>,
    mut cameras: Query<&mut Transform, (With<MainCamera>, Without<Player>)>,
) {
    let Ok(actor) = actors.single() else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };

    let view = Vec2::new(settings.view_width, settings.view_height);
    let target = clamp_camera(actor.translation.truncate(), view, bounds.0);
    camera.translation.x = target.x;
    camera.translation.y = target.y;
}
