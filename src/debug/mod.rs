//! Developer overlay for inspecting doors and the actor (dev-tools feature).
//!
//! F3 toggles:
//! - door rectangles (green when they lead somewhere, grey when inert)
//! - the actor bounds used for door overlap
//! - a text line with the live scene and interaction mode

use bevy::prelude::*;

use crate::interaction::{DoorInteraction, InteractionMode};
use crate::map::DoorRegistry;
use crate::movement::{MovementState, Player, actor_bounds};
use crate::scenes::SceneDirector;

// ============================================================================
// Debug State Resource
// ============================================================================

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the overlay is drawn
    pub show_overlay: bool,
}

/// Marker for the debug text line
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

const ACTIVE_DOOR_COLOR: Color = Color::srgb(0.2, 0.9, 0.3);
const INERT_DOOR_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
const ACTOR_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);

// ============================================================================
// Plugin
// ============================================================================

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                toggle_debug_overlay,
                update_debug_info_overlay,
                draw_debug_gizmos.run_if(|state: Res<DebugState>| state.show_overlay),
            )
                .chain(),
        );
    }
}

// ============================================================================
// Systems
// ============================================================================

fn toggle_debug_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_overlay = !debug_state.show_overlay;
        info!(
            "[DEBUG] Overlay {}",
            if debug_state.show_overlay { "on" } else { "off" }
        );
    }
}

fn mode_label(mode: &InteractionMode) -> String {
    match mode {
        InteractionMode::Exploring => "EXPLORING".to_string(),
        InteractionMode::DialogOpen(session) => format!(
            "DIALOG_OPEN -> {} [{}]",
            session.destination,
            session.selection.label()
        ),
    }
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    director: Res<SceneDirector>,
    interaction: Res<DoorInteraction>,
    doors: Res<DoorRegistry>,
    player_query: Query<(&Transform, &MovementState), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_overlay {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let actor = match player_query.iter().next() {
        Some((transform, state)) => format!(
            "Pos: ({:.0}, {:.0}) facing {}{}",
            transform.translation.x,
            transform.translation.y,
            state.facing.name(),
            if state.moving { ", moving" } else { "" }
        ),
        None => "Pos: -".to_string(),
    };

    **text = format!(
        "Scene: {}\nMode: {}\nDoors: {}\n{}",
        director.current().unwrap_or("-"),
        mode_label(interaction.mode()),
        doors.len(),
        actor
    );
}

fn draw_debug_gizmos(
    mut gizmos: Gizmos,
    doors: Res<DoorRegistry>,
    player_query: Query<&Transform, With<Player>>,
) {
    for door in doors.doors() {
        let color = if door.is_active() {
            ACTIVE_DOOR_COLOR
        } else {
            INERT_DOOR_COLOR
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(door.rect.center()),
            door.rect.size(),
            color,
        );
    }

    for transform in &player_query {
        let bounds = actor_bounds(transform.translation.truncate());
        gizmos.rect_2d(
            Isometry2d::from_translation(bounds.center()),
            bounds.size(),
            ACTOR_COLOR,
        );
    }
}

// ============================================================================
// UI Spawning Helpers
// ============================================================================

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 8.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(4.0),
            bottom: Val::Px(4.0),
            padding: UiRect::all(Val::Px(2.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
