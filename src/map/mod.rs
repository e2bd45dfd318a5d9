//! Map domain: Tiled maps, tile layers and the door registry.

mod doors;
mod spawn;
mod tiled;


pub use doors::{Door, DoorRegistry, TARGET_SCENE_PROPERTY, rects_overlap};
pub use tiled::{MapLoadError, TiledMap};

pub(crate) use spawn::{spawn_tile_layers, spawn_world_bounds};

use bevy::prelude::*;

pub struct MapPlugin;

impl Plugin for MapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DoorRegistry>();
    }
}
