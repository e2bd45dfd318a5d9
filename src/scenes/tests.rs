//! Scenes domain: tests for scene selection, transitions and camera framing.

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use super::systems::{advance_scene, enter_scene, exit_scene, handle_transition_requests};
use super::*;
use crate::content::{GameSettings, SceneDescriptor, SceneRegistry, SpawnPoint};
use crate::core::{GameState, SceneTransitionRequested};
use crate::interaction::{DoorDialogUI, DoorInteraction, InteractionEdges};
use crate::map::{Door, DoorRegistry};
use crate::movement::{Facing, MovementState, Player, actor_bounds, body_center_from_feet};
use crate::sprites::ActorSheets;

// -----------------------------------------------------------------------------
// Director tests
// -----------------------------------------------------------------------------

#[test]
fn test_start_scene_from_settings() {
    let registry = SceneRegistry::builtin();
    let settings = GameSettings {
        start_scene: "valencia".to_string(),
        ..default()
    };
    assert_eq!(
        pick_start_scene(&settings, &registry),
        Some("valencia".to_string())
    );
}

#[test]
fn test_unknown_start_scene_falls_back_to_first() {
    let registry = SceneRegistry::builtin();
    let settings = GameSettings {
        start_scene: "atlantis".to_string(),
        ..default()
    };
    assert_eq!(
        pick_start_scene(&settings, &registry),
        Some("hub".to_string())
    );

    let empty = SceneRegistry { scenes: Vec::new() };
    assert_eq!(pick_start_scene(&settings, &empty), None);
}

#[test]
fn test_request_known_destination() {
    let registry = SceneRegistry::builtin();
    let mut director = SceneDirector::default();
    director.start("hub");

    assert!(director.request("coban", &registry));
    assert_eq!(director.current(), Some("hub"));
    assert_eq!(director.pending(), Some("coban"));

    assert_eq!(director.advance(), Some("coban"));
    assert_eq!(director.pending(), None);
    assert_eq!(director.current(), Some("coban"));
}

#[test]
fn test_request_unknown_destination_is_ignored() {
    let registry = SceneRegistry::builtin();
    let mut director = SceneDirector::default();
    director.start("hub");

    assert!(!director.request("atlantis", &registry));
    assert_eq!(director.pending(), None);
    assert_eq!(director.advance(), None);
    assert_eq!(director.current(), Some("hub"));
}

#[test]
fn test_scene_ids_are_case_sensitive() {
    let registry = SceneRegistry::builtin();
    let mut director = SceneDirector::default();

    assert!(director.request("UCSC", &registry));
    assert!(!director.request("ucsc", &registry));
    assert_eq!(director.pending(), Some("UCSC"));
}

// -----------------------------------------------------------------------------
// Camera tests
// -----------------------------------------------------------------------------

const VIEW: Vec2 = Vec2::new(320.0, 160.0);

#[test]
fn test_camera_follows_inside_large_map() {
    let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
    assert_eq!(
        clamp_camera(Vec2::new(400.0, 300.0), VIEW, bounds),
        Vec2::new(400.0, 300.0)
    );
}

#[test]
fn test_camera_clamped_at_map_edges() {
    let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);
    assert_eq!(
        clamp_camera(Vec2::new(10.0, 590.0), VIEW, bounds),
        Vec2::new(160.0, 520.0)
    );
    assert_eq!(
        clamp_camera(Vec2::new(790.0, 5.0), VIEW, bounds),
        Vec2::new(640.0, 80.0)
    );
}

#[test]
fn test_camera_centered_on_small_map() {
    let bounds = Rect::new(0.0, 0.0, 200.0, 600.0);
    let target = clamp_camera(Vec2::new(10.0, 300.0), VIEW, bounds);
    assert_eq!(target, Vec2::new(100.0, 300.0));
}

// -----------------------------------------------------------------------------
// Transition flow tests (headless App)
// -----------------------------------------------------------------------------

fn transition_app() -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin)
        .insert_state(GameState::Explore)
        .insert_resource(SceneRegistry::builtin())
        .init_resource::<SceneDirector>()
        .add_message::<SceneTransitionRequested>()
        .add_systems(OnEnter(GameState::SceneChange), advance_scene)
        .add_systems(
            Update,
            handle_transition_requests.run_if(in_state(GameState::Explore)),
        );
    app.world_mut().resource_mut::<SceneDirector>().start("hub");
    app
}

fn request(app: &mut App, destination: &str) {
    app.world_mut()
        .resource_mut::<Messages<SceneTransitionRequested>>()
        .write(SceneTransitionRequested {
            destination: destination.to_string(),
        });
}

fn state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

#[test]
fn test_known_destination_changes_scene() {
    let mut app = transition_app();
    request(&mut app, "valencia");

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(state(&app), GameState::Explore);
    assert_eq!(
        app.world().resource::<SceneDirector>().current(),
        Some("valencia")
    );
}

#[test]
fn test_unknown_destination_stays_exploring() {
    let mut app = transition_app();
    request(&mut app, "atlantis");

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(state(&app), GameState::Explore);
    let director = app.world().resource::<SceneDirector>();
    assert_eq!(director.current(), Some("hub"));
    assert_eq!(director.pending(), None);
}

// -----------------------------------------------------------------------------
// Scene lifecycle tests (headless App)
// -----------------------------------------------------------------------------

fn door_at_origin() -> DoorRegistry {
    DoorRegistry::from_doors(vec![Door {
        name: "to_hub".to_string(),
        rect: Rect::new(0.0, 0.0, 16.0, 16.0),
        destination: Some("hub".to_string()),
    }])
}

fn open_dialog(app: &mut App) {
    let doors = door_at_origin();
    let bounds = actor_bounds(body_center_from_feet(Vec2::new(8.0, 4.0)));
    let edges = InteractionEdges {
        interact: true,
        ..default()
    };
    app.world_mut()
        .resource_mut::<DoorInteraction>()
        .step(edges, bounds, &doors);
    assert!(app.world().resource::<DoorInteraction>().is_dialog_open());
}

fn lifecycle_app() -> App {
    let scene = SceneDescriptor {
        id: "void".to_string(),
        map: "maps/does_not_exist.json".to_string(),
        tilesets: Vec::new(),
        layers: Vec::new(),
        door_layer: "doors".to_string(),
        spawn: SpawnPoint { x: 40.0, y: 100.0 },
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default(), StatesPlugin))
        .init_asset::<TextureAtlasLayout>()
        .insert_state(GameState::SceneChange)
        .insert_resource(GameSettings::default())
        .insert_resource(SceneRegistry {
            scenes: vec![scene],
        })
        .insert_resource(ActorSheets::default())
        .insert_resource(door_at_origin())
        .init_resource::<DoorInteraction>()
        .init_resource::<SceneDirector>()
        .init_resource::<SceneBounds>()
        .add_systems(OnEnter(GameState::Explore), enter_scene)
        .add_systems(OnExit(GameState::Explore), exit_scene);
    app.world_mut().resource_mut::<SceneDirector>().start("void");
    app
}

fn go_to(app: &mut App, state: GameState) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(state);
    app.update();
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, F>()
        .iter(app.world())
        .count()
}

#[test]
fn test_missing_map_enters_empty_scene_with_actor() {
    let mut app = lifecycle_app();
    open_dialog(&mut app);

    go_to(&mut app, GameState::Explore);

    assert!(!app.world().resource::<DoorInteraction>().is_dialog_open());
    assert!(app.world().resource::<DoorRegistry>().is_empty());
    assert_eq!(
        app.world().resource::<SceneBounds>().0,
        Rect::new(0.0, 0.0, 320.0, 160.0)
    );

    let actors: Vec<(Vec3, Facing)> = app
        .world_mut()
        .query_filtered::<(&Transform, &MovementState), With<Player>>()
        .iter(app.world())
        .map(|(transform, state)| (transform.translation, state.facing))
        .collect();
    assert_eq!(actors.len(), 1);
    let (position, facing) = actors[0];
    assert_eq!(facing, Facing::Down);
    // Spawn y is flipped against the fallback view height
    assert_eq!(position.truncate(), body_center_from_feet(Vec2::new(40.0, 60.0)));
}

#[test]
fn test_exit_despawns_scene_entities_and_reenter_spawns_one_actor() {
    let mut app = lifecycle_app();
    go_to(&mut app, GameState::Explore);

    // An open dialog overlay belongs to the scene too
    open_dialog(&mut app);
    app.world_mut().spawn((SceneEntity, DoorDialogUI));
    app.world_mut().insert_resource(door_at_origin());
    assert!(count::<With<SceneEntity>>(&mut app) >= 5);

    go_to(&mut app, GameState::SceneChange);

    assert_eq!(count::<With<SceneEntity>>(&mut app), 0);
    assert_eq!(count::<With<DoorDialogUI>>(&mut app), 0);
    assert_eq!(count::<With<Player>>(&mut app), 0);
    assert!(app.world().resource::<DoorRegistry>().is_empty());
    assert!(!app.world().resource::<DoorInteraction>().is_dialog_open());

    go_to(&mut app, GameState::Explore);
    assert_eq!(count::<With<Player>>(&mut app), 1);
}
