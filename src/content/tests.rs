//! Content domain: unit tests for parsing and validation.

use super::*;

const SCENES_RON: &str = r#"
(
    items: [
        (
            id: "hub",
            map: "maps/hub.json",
            tilesets: [
                (name: "floor", image: "tilesets/floor.png"),
                (name: "walls", image: "tilesets/walls.png"),
            ],
            layers: [
                (name: "ground", tilesets: ["floor"]),
                (name: "walls", tilesets: ["walls"], collidable: true, depth: 0.5),
            ],
            spawn: (x: 16.0, y: 150.0),
        ),
        (
            id: "shed",
            map: "maps/shed.json",
            tilesets: [],
            layers: [],
            door_layer: "exits",
            spawn: (x: 0.0, y: 0.0),
        ),
    ],
)
"#;

#[test]
fn test_parse_scene_descriptors() {
    let scenes = parse_data_file::<SceneDescriptor>(SCENES_RON, "scenes.ron").unwrap();
    assert_eq!(scenes.len(), 2);

    let hub = &scenes[0];
    assert_eq!(hub.id, "hub");
    assert_eq!(hub.door_layer, "doors");
    assert_eq!(hub.spawn, SpawnPoint { x: 16.0, y: 150.0 });
    assert!(!hub.layers[0].collidable);
    assert_eq!(hub.layers[0].depth, 0.0);
    assert!(hub.layers[1].collidable);
    assert_eq!(hub.layers[1].depth, 0.5);
    assert_eq!(
        hub.tileset("walls").map(|t| t.image.as_str()),
        Some("tilesets/walls.png")
    );

    assert_eq!(scenes[1].door_layer, "exits");
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_data_file::<SceneDescriptor>("(items: [ (id: ", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_partial_settings_use_defaults() {
    let settings: GameSettings =
        parse_single_file("(start_scene: \"coban\", zoom: 2)", "settings.ron").unwrap();
    assert_eq!(settings.start_scene, "coban");
    assert_eq!(settings.zoom, 2);
    assert_eq!(settings.player_speed, 80.0);
    assert_eq!(settings.view_width, 320.0);
}

#[test]
fn test_missing_data_dir_is_an_error() {
    let missing = std::path::Path::new("does/not/exist");
    assert!(load_settings(missing).is_err());
    assert!(load_scenes(missing).is_err());
}

#[test]
fn test_builtin_scenes_validate_cleanly() {
    let registry = SceneRegistry::builtin();
    let errors = validate_scenes(&GameSettings::default(), &registry);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

    for id in ["hub", "coban", "valencia", "UCSC"] {
        assert!(registry.contains(id), "missing builtin scene {}", id);
    }
    assert_eq!(
        registry.get("coban").map(|s| s.spawn),
        Some(SpawnPoint { x: 305.0, y: 60.0 })
    );
}

#[test]
fn test_validation_reports_unknown_start_scene() {
    let settings = GameSettings {
        start_scene: "atlantis".to_string(),
        ..Default::default()
    };
    let errors = validate_scenes(&settings, &SceneRegistry::builtin());
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        ValidationError::MissingReference { field: "start_scene", missing_id, .. } if missing_id == "atlantis"
    ));
}

#[test]
fn test_validation_reports_undeclared_tileset_and_duplicates() {
    let mut scenes = parse_data_file::<SceneDescriptor>(SCENES_RON, "scenes.ron").unwrap();
    scenes[0].layers[0].tilesets.push("carpet".to_string());
    scenes[1].id = "hub".to_string();
    let registry = SceneRegistry { scenes };

    let errors = validate_scenes(&GameSettings::default(), &registry);
    assert!(errors.iter().any(|e| matches!(
        e,
        ValidationError::MissingReference { target_type: "Tileset", missing_id, .. } if missing_id == "carpet"
    )));
    assert!(errors.contains(&ValidationError::DuplicateId {
        kind: "Scene",
        id: "hub".to_string(),
    }));
}
