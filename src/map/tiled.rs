//! Tiled JSON map format: the subset the scenes read.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tiled stores flip/rotation flags in the top four bits of a GID.
const GID_FLAG_MASK: u32 = 0x0FFF_FFFF;

/// Error type for map loading failures.
#[derive(Debug)]
pub enum MapLoadError {
    Io { file: String, message: String },
    Parse { file: String, message: String },
}

impl std::fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { file, message } => write!(f, "Failed to read map {}: {}", file, message),
            Self::Parse { file, message } => {
                write!(f, "Failed to parse map {}: {}", file, message)
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TiledMap {
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    pub tilewidth: u32,
    pub tileheight: u32,
    #[serde(default)]
    pub layers: Vec<TiledLayer>,
    #[serde(default)]
    pub tilesets: Vec<TiledTileset>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum TiledLayer {
    #[serde(rename = "tilelayer")]
    Tiles(TileLayer),
    #[serde(rename = "objectgroup")]
    Objects(ObjectGroup),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TileLayer {
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub data: LayerData,
}

/// Raw GIDs, or an encoded blob this loader does not decode.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LayerData {
    Gids(Vec<u32>),
    Encoded(String),
}

impl Default for LayerData {
    fn default() -> Self {
        Self::Gids(Vec::new())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectGroup {
    pub name: String,
    #[serde(default)]
    pub objects: Vec<TiledObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TiledObject {
    #[serde(default)]
    pub name: String,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub properties: Vec<TiledProperty>,
}

impl TiledObject {
    pub fn property(&self, name: &str) -> Option<&serde_json::Value> {
        find_property(&self.properties, name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TiledProperty {
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

fn find_property<'a>(properties: &'a [TiledProperty], name: &str) -> Option<&'a serde_json::Value> {
    properties.iter().find(|p| p.name == name).map(|p| &p.value)
}

#[derive(Debug, Clone, Deserialize)]
pub struct TiledTileset {
    pub firstgid: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub columns: u32,
    #[serde(default)]
    pub tilecount: u32,
    #[serde(default)]
    pub tilewidth: u32,
    #[serde(default)]
    pub tileheight: u32,
    #[serde(default)]
    pub spacing: u32,
    #[serde(default)]
    pub margin: u32,
    #[serde(default)]
    pub tiles: Vec<TiledTileData>,
    /// Set for external tilesets, which are not embedded in the map.
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TiledTileData {
    pub id: u32,
    #[serde(default)]
    pub properties: Vec<TiledProperty>,
}

impl TiledTileset {
    pub fn rows(&self) -> u32 {
        if self.columns == 0 {
            return 0;
        }
        self.tilecount.div_ceil(self.columns)
    }

    pub fn tile_size(&self) -> UVec2 {
        UVec2::new(self.tilewidth, self.tileheight)
    }

    /// Whether the tile with `local_id` carries `collidable = true`.
    pub fn tile_is_collidable(&self, local_id: u32) -> bool {
        self.tiles
            .iter()
            .find(|t| t.id == local_id)
            .and_then(|t| find_property(&t.properties, "collidable"))
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }
}

impl TiledMap {
    pub fn from_json(contents: &str, file_name: &str) -> Result<Self, MapLoadError> {
        serde_json::from_str(contents).map_err(|e| MapLoadError::Parse {
            file: file_name.to_string(),
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, MapLoadError> {
        let file_name = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|e| MapLoadError::Io {
            file: file_name.clone(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents, &file_name)
    }

    /// Computed in `f32` so oversized headers cannot overflow.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.tilewidth as f32,
            self.height as f32 * self.tileheight as f32,
        )
    }

    /// The map's pixel rectangle in world space.
    pub fn world_rect(&self) -> Rect {
        Rect::from_corners(Vec2::ZERO, self.pixel_size())
    }

    pub fn tile_layer(&self, name: &str) -> Option<&TileLayer> {
        self.layers.iter().find_map(|layer| match layer {
            TiledLayer::Tiles(tiles) if tiles.name == name => Some(tiles),
            _ => None,
        })
    }

    pub fn object_layer(&self, name: &str) -> Option<&ObjectGroup> {
        self.layers.iter().find_map(|layer| match layer {
            TiledLayer::Objects(group) if group.name == name => Some(group),
            _ => None,
        })
    }

    /// Resolve a raw GID to its tileset and the tile id local to that tileset.
    pub fn tileset_for_gid(&self, raw_gid: u32) -> Option<(&TiledTileset, u32)> {
        let gid = raw_gid & GID_FLAG_MASK;
        if gid == 0 {
            return None;
        }

        self.tilesets
            .iter()
            .filter(|t| t.firstgid <= gid)
            .max_by_key(|t| t.firstgid)
            .map(|t| (t, gid - t.firstgid))
    }

    /// Tiled points are y-down from the top-left; world space is y-up.
    pub fn map_to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x, self.pixel_size().y - point.y)
    }

    /// Convert a Tiled rectangle (top-left origin) to a world rectangle.
    pub fn map_rect_to_world(&self, x: f32, y: f32, width: f32, height: f32) -> Rect {
        let top_left = self.map_to_world(Vec2::new(x, y));
        Rect::from_corners(top_left, top_left + Vec2::new(width, -height))
    }
}
