//! Map domain: tile layer, tile collider and world bound spawning.

use avian2d::prelude::*;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::content::SceneDescriptor;
use crate::map::tiled::{LayerData, TiledMap};
use crate::movement::GameLayer;
use crate::scenes::SceneEntity;

/// Thickness of the invisible walls enclosing a map.
const BOUND_THICKNESS: f32 = 16.0;

/// Marker for rendered map tiles
#[derive(Component, Debug)]
pub struct MapTile;

/// Marker for static colliders built from collidable tiles
#[derive(Component, Debug)]
pub struct TileCollider;

/// Marker for the walls around the map edge
#[derive(Component, Debug)]
pub struct WorldBound;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MapSpawnReport {
    pub tiles: usize,
    pub colliders: usize,
    pub skipped_layers: usize,
}

struct TilesetRender {
    image: Handle<Image>,
    layout: Handle<TextureAtlasLayout>,
}

/// Spawn the descriptor's tile layers from `map`, with static colliders for
/// collidable tiles on collidable layers.
pub(crate) fn spawn_tile_layers(
    commands: &mut Commands,
    asset_server: &AssetServer,
    layouts: &mut Assets<TextureAtlasLayout>,
    map: &TiledMap,
    scene: &SceneDescriptor,
) -> MapSpawnReport {
    let mut report = MapSpawnReport::default();

    // Only tilesets bound to an image in the descriptor can be drawn
    let mut renders: HashMap<&str, TilesetRender> = HashMap::new();
    for tileset in &map.tilesets {
        if tileset.source.is_some() {
            warn!(
                "[MAP] Tileset with firstgid {} in '{}' is external and cannot be used",
                tileset.firstgid, scene.map
            );
            continue;
        }
        let Some(def) = scene.tileset(&tileset.name) else {
            continue;
        };
        if tileset.columns == 0 || tileset.tile_size().min_element() == 0 {
            warn!("[MAP] Tileset '{}' has no usable grid", tileset.name);
            continue;
        }

        let layout = TextureAtlasLayout::from_grid(
            tileset.tile_size(),
            tileset.columns,
            tileset.rows(),
            Some(UVec2::splat(tileset.spacing)),
            Some(UVec2::splat(tileset.margin)),
        );
        renders.insert(
            tileset.name.as_str(),
            TilesetRender {
                image: asset_server.load(def.image.clone()),
                layout: layouts.add(layout),
            },
        );
    }

    let cell = Vec2::new(map.tilewidth as f32, map.tileheight as f32);
    let map_height = map.pixel_size().y;

    for (index, layer_def) in scene.layers.iter().enumerate() {
        let Some(layer) = map.tile_layer(&layer_def.name) else {
            warn!(
                "[MAP] Tile layer '{}' not found in '{}'",
                layer_def.name, scene.map
            );
            report.skipped_layers += 1;
            continue;
        };

        let gids = match &layer.data {
            LayerData::Gids(gids) => gids,
            LayerData::Encoded(_) => {
                warn!(
                    "[MAP] Tile layer '{}' uses encoded data, export it as CSV/array",
                    layer.name
                );
                report.skipped_layers += 1;
                continue;
            }
        };

        let z = layer_def.depth + index as f32 * 0.01;

        for (i, &raw_gid) in gids.iter().enumerate() {
            let Some((tileset, local_id)) = map.tileset_for_gid(raw_gid) else {
                continue;
            };
            if !layer_def.tilesets.iter().any(|name| *name == tileset.name) {
                continue;
            }
            let Some(render) = renders.get(tileset.name.as_str()) else {
                continue;
            };

            let column = (i as u32 % layer.width.max(1)) as f32;
            let row = (i as u32 / layer.width.max(1)) as f32;

            // Oversized tiles hang up and right from the cell's bottom-left corner
            let bottom_left = Vec2::new(column * cell.x, map_height - (row + 1.0) * cell.y);
            let tile_size = tileset.tile_size().as_vec2();
            let center = bottom_left + tile_size / 2.0;

            commands.spawn((
                SceneEntity,
                MapTile,
                Sprite::from_atlas_image(
                    render.image.clone(),
                    TextureAtlas {
                        layout: render.layout.clone(),
                        index: local_id as usize,
                    },
                ),
                Transform::from_xyz(center.x, center.y, z),
            ));
            report.tiles += 1;

            if layer_def.collidable && tileset.tile_is_collidable(local_id) {
                let cell_center = bottom_left + cell / 2.0;
                commands.spawn((
                    SceneEntity,
                    TileCollider,
                    Transform::from_xyz(cell_center.x, cell_center.y, 0.0),
                    RigidBody::Static,
                    Collider::rectangle(cell.x, cell.y),
                    CollisionLayers::new(GameLayer::World, [GameLayer::Player]),
                ));
                report.colliders += 1;
            }
        }
    }

    report
}

/// Enclose `bounds` with four static walls so the actor cannot leave the map.
pub(crate) fn spawn_world_bounds(commands: &mut Commands, bounds: Rect) {
    let size = bounds.size();
    let center = bounds.center();
    let half = BOUND_THICKNESS / 2.0;

    let walls = [
        (
            Vec2::new(center.x, bounds.max.y + half),
            Vec2::new(size.x + 2.0 * BOUND_THICKNESS, BOUND_THICKNESS),
        ),
        (
            Vec2::new(center.x, bounds.min.y - half),
            Vec2::new(size.x + 2.0 * BOUND_THICKNESS, BOUND_THICKNESS),
        ),
        (
            Vec2::new(bounds.min.x - half, center.y),
            Vec2::new(BOUND_THICKNESS, size.y),
        ),
        (
            Vec2::new(bounds.max.x + half, center.y),
            Vec2::new(BOUND_THICKNESS, size.y),
        ),
    ];

    for (position, extent) in walls {
        commands.spawn((
            SceneEntity,
            WorldBound,
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(extent.x, extent.y),
            CollisionLayers::new(GameLayer::World, [GameLayer::Player]),
        ));
    }
}
