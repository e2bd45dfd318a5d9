//! Core domain: camera and window setup.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::GameSettings;

/// Marker for the single gameplay camera.
#[derive(Component, Debug)]
pub struct MainCamera;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera2d,
        Projection::Orthographic(OrthographicProjection::default_2d()),
    ));
}

/// Scale the window, camera and UI so the logical view fills the window at
/// the configured integer zoom.
pub(crate) fn apply_view_settings(
    settings: Res<GameSettings>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut cameras: Query<&mut Projection, With<MainCamera>>,
    mut ui_scale: ResMut<UiScale>,
) {
    let zoom = settings.zoom.max(1) as f32;

    if let Ok(mut window) = windows.single_mut() {
        window.resolution.set(
            settings.view_width * zoom,
            settings.view_height * zoom,
        );
    }

    for mut projection in &mut cameras {
        if let Projection::Orthographic(ortho) = projection.as_mut() {
            ortho.scale = 1.0 / zoom;
        }
    }

    ui_scale.0 = zoom;

    info!(
        "[CORE] View {}x{} at zoom {}",
        settings.view_width, settings.view_height, settings.zoom
    );
}
