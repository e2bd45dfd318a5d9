//! Scenes domain: boot, scene entry/exit and transition handling.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::path::Path;

use crate::content::{GameSettings, SceneRegistry};
use crate::core::{GameState, SceneTransitionRequested};
use crate::interaction::DoorInteraction;
use crate::map::{DoorRegistry, TiledMap, spawn_tile_layers, spawn_world_bounds};
use crate::movement::spawn_actor;
use crate::scenes::{SceneBounds, SceneDirector, SceneEntity, pick_start_scene};
use crate::sprites::ActorSheets;

/// Root that scene map paths are relative to.
const ASSET_DIR: &str = "assets";

/// Enter the start scene once content is loaded.
pub(crate) fn boot_start_scene(
    settings: Res<GameSettings>,
    registry: Res<SceneRegistry>,
    mut director: ResMut<SceneDirector>,
    mut next_state: ResMut<NextState<GameState>>,
    mut reported: Local<bool>,
) {
    let Some(start) = pick_start_scene(&settings, &registry) else {
        if !*reported {
            error!("[SCENE] No scenes registered, nothing to enter");
            *reported = true;
        }
        return;
    };

    if start != settings.start_scene {
        warn!(
            "[SCENE] Start scene '{}' is unknown, starting in '{}'",
            settings.start_scene, start
        );
    }

    info!("[SCENE] Boot -> '{}'", start);
    director.start(start);
    next_state.set(GameState::Explore);
}

/// Build the live scene: tiles, colliders, doors, world bounds and the actor.
#[allow(clippy::too_many_arguments)]
pub(crate) fn enter_scene(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    settings: Res<GameSettings>,
    registry: Res<SceneRegistry>,
    director: Res<SceneDirector>,
    sheets: Res<ActorSheets>,
    mut doors: ResMut<DoorRegistry>,
    mut interaction: ResMut<DoorInteraction>,
    mut bounds: ResMut<SceneBounds>,
) {
    interaction.reset();
    doors.clear();

    let Some(scene) = director.current().and_then(|id| registry.get(id)) else {
        error!(
            "[SCENE] Live scene {:?} is not registered, nothing spawned",
            director.current()
        );
        return;
    };

    let map_path = Path::new(ASSET_DIR).join(&scene.map);
    let rect = match TiledMap::load(&map_path) {
        Ok(map) => {
            let report = spawn_tile_layers(&mut commands, &asset_server, &mut layouts, &map, scene);
            *doors = DoorRegistry::from_map(&map, &scene.door_layer);
            info!(
                "[MAP] '{}': {} tiles, {} colliders, {} layers skipped, {} doors",
                scene.map,
                report.tiles,
                report.colliders,
                report.skipped_layers,
                doors.len()
            );
            map.world_rect()
        }
        Err(e) => {
            warn!("[MAP] {}; scene '{}' starts empty", e, scene.id);
            Rect::from_corners(
                Vec2::ZERO,
                Vec2::new(settings.view_width, settings.view_height),
            )
        }
    };

    spawn_world_bounds(&mut commands, rect);
    bounds.0 = rect;

    // Spawn points are authored in map pixels, y-down
    let feet = Vec2::new(scene.spawn.x, rect.max.y - scene.spawn.y);
    spawn_actor(&mut commands, &sheets, feet);

    info!("[SCENE] Entered '{}'", scene.id);
}

/// Tear down everything the live scene spawned.
pub(crate) fn exit_scene(
    mut commands: Commands,
    entities: Query<Entity, With<SceneEntity>>,
    director: Res<SceneDirector>,
    mut doors: ResMut<DoorRegistry>,
    mut interaction: ResMut<DoorInteraction>,
) {
    let mut count = 0;
    for entity in &entities {
        commands.entity(entity).despawn();
        count += 1;
    }
    doors.clear();
    interaction.reset();

    info!(
        "[SCENE] Left '{}', despawned {} entities",
        director.current().unwrap_or("?"),
        count
    );
}

/// Switch to the queued destination and go back to exploring.
pub(crate) fn advance_scene(
    mut director: ResMut<SceneDirector>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    match director.advance() {
        Some(id) => info!("[SCENE] Transition -> '{}'", id),
        None => warn!("[SCENE] Scene change without a destination, re-entering current scene"),
    }
    next_state.set(GameState::Explore);
}

/// Turn transition requests into a scene change; unknown ids are dropped.
pub(crate) fn handle_transition_requests(
    mut requests: MessageReader<SceneTransitionRequested>,
    registry: Res<SceneRegistry>,
    mut director: ResMut<SceneDirector>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for request in requests.read() {
        if director.request(&request.destination, &registry) {
            next_state.set(GameState::SceneChange);
        } else {
            warn!(
                "[SCENE] Unknown destination '{}', staying in '{}'",
                request.destination,
                director.current().unwrap_or("?")
            );
        }
    }
}
