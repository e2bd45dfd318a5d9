//! Door registry: trigger rectangles read from a map object layer.

use bevy::prelude::*;

use crate::map::tiled::TiledMap;

/// Object property naming the scene a door leads to.
pub const TARGET_SCENE_PROPERTY: &str = "targetScene";

#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    pub name: String,
    /// World-space trigger rectangle.
    pub rect: Rect,
    /// Scene entered through this door. `None` marks a decorative door.
    pub destination: Option<String>,
}

impl Door {
    pub fn is_active(&self) -> bool {
        self.destination.is_some()
    }
}

/// Doors of the live scene, in map order. Cleared when the scene exits.
#[derive(Resource, Debug, Default, Clone)]
pub struct DoorRegistry {
    doors: Vec<Door>,
}

impl DoorRegistry {
    pub fn from_doors(doors: Vec<Door>) -> Self {
        Self { doors }
    }

    /// Read every object of `layer_name`. A missing layer yields no doors.
    pub fn from_map(map: &TiledMap, layer_name: &str) -> Self {
        let Some(layer) = map.object_layer(layer_name) else {
            info!("[DOOR] No object layer '{}', scene has no doors", layer_name);
            return Self::default();
        };

        let doors = layer
            .objects
            .iter()
            .map(|obj| Door {
                name: obj.name.clone(),
                rect: map.map_rect_to_world(obj.x, obj.y, obj.width, obj.height),
                destination: obj
                    .property(TARGET_SCENE_PROPERTY)
                    .and_then(serde_json::Value::as_str)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            })
            .collect();

        Self { doors }
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn get(&self, index: usize) -> Option<&Door> {
        self.doors.get(index)
    }

    pub fn len(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    pub fn clear(&mut self) {
        self.doors.clear();
    }

    /// First door in registry order touching `bounds`, active or not.
    pub fn first_overlapping(&self, bounds: Rect) -> Option<(usize, &Door)> {
        self.doors
            .iter()
            .enumerate()
            .find(|(_, door)| rects_overlap(bounds, door.rect))
    }
}

/// Inclusive AABB test: rectangles sharing an edge count as overlapping.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    a.min.x <= b.max.x && a.max.x >= b.min.x && a.min.y <= b.max.y && a.max.y >= b.min.y
}
