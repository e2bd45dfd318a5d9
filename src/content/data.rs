//! Content data definitions: game settings and scene descriptors.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Wrapper for RON files holding a list of definitions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub items: Vec<T>,
}

/// Global tuning loaded from `settings.ron`.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameSettings {
    /// Scene entered after boot.
    pub start_scene: String,
    /// Actor speed in pixels per second along a single axis.
    pub player_speed: f32,
    /// Integer upscale from the logical view to the window.
    pub zoom: u32,
    pub view_width: f32,
    pub view_height: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            start_scene: "hub".to_string(),
            player_speed: 80.0,
            zoom: 3,
            view_width: 320.0,
            view_height: 160.0,
        }
    }
}

/// A Tiled tileset name bound to the image that renders it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct TilesetDef {
    /// Name of the tileset inside the Tiled map.
    pub name: String,
    /// Image path relative to the asset root.
    pub image: String,
}

/// One tile layer to build from the map.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LayerDef {
    /// Name of the tile layer inside the Tiled map.
    pub name: String,
    /// Tilesets whose tiles this layer renders.
    pub tilesets: Vec<String>,
    /// Tiles flagged `collidable` in their tileset block the actor.
    #[serde(default)]
    pub collidable: bool,
    /// Draw depth; the actor sits at depth 1.
    #[serde(default)]
    pub depth: f32,
}

/// Actor spawn point in map pixels (feet position, y down).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct SpawnPoint {
    pub x: f32,
    pub y: f32,
}

fn default_door_layer() -> String {
    "doors".to_string()
}

/// Everything needed to build one location.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SceneDescriptor {
    pub id: String,
    /// Tiled JSON map path relative to the asset root.
    pub map: String,
    pub tilesets: Vec<TilesetDef>,
    pub layers: Vec<LayerDef>,
    /// Object layer holding door rectangles.
    #[serde(default = "default_door_layer")]
    pub door_layer: String,
    pub spawn: SpawnPoint,
}

impl SceneDescriptor {
    pub fn tileset(&self, name: &str) -> Option<&TilesetDef> {
        self.tilesets.iter().find(|t| t.name == name)
    }
}
