//! SceneRegistry resource with the built-in location table.

use bevy::prelude::*;

use super::data::*;

/// All known scenes, in declaration order.
#[derive(Resource, Debug, Clone)]
pub struct SceneRegistry {
    pub scenes: Vec<SceneDescriptor>,
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SceneRegistry {
    pub fn get(&self, id: &str) -> Option<&SceneDescriptor> {
        self.scenes.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns a summary of loaded scenes for logging.
    pub fn summary(&self) -> String {
        let ids: Vec<&str> = self.scenes.iter().map(|s| s.id.as_str()).collect();
        format!("SceneRegistry loaded {} scenes: {}", ids.len(), ids.join(", "))
    }

    /// The shipped locations, used when `scenes.ron` cannot be read.
    pub fn builtin() -> Self {
        Self {
            scenes: vec![hub(), coban(), valencia(), ucsc()],
        }
    }
}

fn tileset(name: &str, image: &str) -> TilesetDef {
    TilesetDef {
        name: name.to_string(),
        image: image.to_string(),
    }
}

fn layer(name: &str, tilesets: &[&str], collidable: bool, depth: f32) -> LayerDef {
    LayerDef {
        name: name.to_string(),
        tilesets: tilesets.iter().map(|t| t.to_string()).collect(),
        collidable,
        depth,
    }
}

fn hub() -> SceneDescriptor {
    SceneDescriptor {
        id: "hub".to_string(),
        map: "maps/hub.json".to_string(),
        tilesets: vec![
            tileset("floor_tyles", "tilesets/hub_tileset/room.png"),
            tileset("furnishing_layer", "tilesets/coban_tileset/Props.png"),
            tileset("coban_floor", "tilesets/hub_tileset/Floors.png"),
            tileset("coban_wall", "tilesets/coban_tileset/Walls.png"),
            tileset("valencia_floor", "tilesets/valencia_tileset/floor.png"),
            tileset("valencia_wall", "tilesets/valencia_tileset/walls.png"),
            tileset("valencia_furnishing", "tilesets/valencia_tileset/furniture.png"),
        ],
        layers: vec![
            layer(
                "hub_floor_layer",
                &["floor_tyles", "coban_floor", "valencia_floor"],
                false,
                0.0,
            ),
            layer(
                "hub_wall_layer",
                &["floor_tyles", "coban_wall", "valencia_wall"],
                true,
                0.0,
            ),
            layer(
                "hub_furinishing_layer",
                &["furnishing_layer", "valencia_furnishing"],
                true,
                0.0,
            ),
        ],
        door_layer: "doors".to_string(),
        spawn: SpawnPoint { x: 16.0, y: 150.0 },
    }
}

fn coban() -> SceneDescriptor {
    SceneDescriptor {
        id: "coban".to_string(),
        map: "maps/coban.json".to_string(),
        tilesets: vec![
            tileset("coban_water_tyles", "tilesets/coban_tileset/Water_tiles.png"),
            tileset("coban_ground_tyles", "tilesets/coban_tileset/Floors_Tiles.png"),
            tileset("coban_wall_tyles", "tilesets/coban_tileset/Walls.png"),
            tileset("coban_furniture_tyles", "tilesets/coban_tileset/Props.png"),
            tileset("coban_small_trees", "tilesets/coban_tileset/small_trees.png"),
            tileset("coban_rock_tyles", "tilesets/coban_tileset/Rocks.png"),
            tileset("coban_big_trees", "tilesets/coban_tileset/large_trees.png"),
            tileset("coban_vegetation_tyles", "tilesets/coban_tileset/Vegetation.png"),
        ],
        layers: vec![
            layer("coban_water_layer", &["coban_water_tyles"], true, 0.0),
            layer("coban_ground_layer", &["coban_ground_tyles"], false, 0.0),
            layer("coban_grass_layer", &["coban_ground_tyles"], false, 0.0),
            layer("coban_wall_layer", &["coban_wall_tyles"], true, 0.0),
            layer("coban_upper_trees_layer", &["coban_small_trees"], true, 0.0),
            layer(
                "coban_upper_trees_second_layer",
                &["coban_small_trees"],
                true,
                0.0,
            ),
            layer("coban_vegetation_layer", &["coban_vegetation_tyles"], false, 0.0),
            layer(
                "coban_props_layer",
                &["coban_furniture_tyles", "coban_rock_tyles"],
                true,
                0.0,
            ),
            layer("coban_lower_trees_layer", &["coban_big_trees"], false, 2.0),
            layer(
                "coban_lower_trees_second_layer",
                &["coban_big_trees"],
                false,
                2.0,
            ),
        ],
        door_layer: "doors".to_string(),
        spawn: SpawnPoint { x: 305.0, y: 60.0 },
    }
}

fn valencia() -> SceneDescriptor {
    SceneDescriptor {
        id: "valencia".to_string(),
        map: "maps/valencia.json".to_string(),
        tilesets: vec![
            tileset("valencia_beds", "tilesets/valencia_tileset/beds.png"),
            tileset("valencia_furniture", "tilesets/valencia_tileset/furniture.png"),
            tileset("valencia_furniture2", "tilesets/valencia_tileset/furniture2.png"),
            tileset("valencia_floor", "tilesets/valencia_tileset/floor.png"),
            tileset("valencia_walls", "tilesets/valencia_tileset/walls.png"),
        ],
        layers: vec![
            layer("valencia_floor", &["valencia_floor"], false, 0.0),
            layer("valencia_walls", &["valencia_walls"], true, 0.0),
            layer(
                "valencia_furniture",
                &["valencia_furniture", "valencia_furniture2", "valencia_beds"],
                true,
                0.0,
            ),
        ],
        door_layer: "doors".to_string(),
        spawn: SpawnPoint { x: 100.0, y: 100.0 },
    }
}

fn ucsc() -> SceneDescriptor {
    SceneDescriptor {
        id: "UCSC".to_string(),
        map: "maps/UCSC.json".to_string(),
        tilesets: vec![
            tileset("UCSC_ground_tyles", "tilesets/UCSC_tileset/Floors_Tiles.png"),
            tileset("UCSC_large_tree_tyles", "tilesets/UCSC_tileset/large_trees.png"),
            tileset("UCSC_tree_tyles", "tilesets/UCSC_tileset/trees.png"),
            tileset("UCSC_vegetation_tyles", "tilesets/UCSC_tileset/Vegetation.png"),
        ],
        layers: vec![
            layer("UCSC_ground_layer", &["UCSC_ground_tyles"], true, 0.0),
            layer("UCSC_vegetation_layer", &["UCSC_vegetation_tyles"], true, 0.0),
            layer("UCSC_upper_tree_layer", &["UCSC_tree_tyles"], true, 0.0),
            layer("UCSC_upper_tree_second_layer", &["UCSC_tree_tyles"], true, 0.0),
            layer("UCSC_big_tree_layer", &["UCSC_large_tree_tyles"], true, 2.0),
        ],
        door_layer: "doors".to_string(),
        spawn: SpawnPoint { x: 100.0, y: 100.0 },
    }
}
