//! Content domain: settings and scene descriptors loaded from RON.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
pub use loader::{ContentLoadError, load_scenes, load_settings, parse_data_file, parse_single_file};
pub use registry::SceneRegistry;
pub use validation::{ValidationError, validate_scenes};

use bevy::prelude::*;
use std::path::Path;

/// Directory holding `settings.ron` and `scenes.ron`.
pub const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSettings>()
            .init_resource::<SceneRegistry>()
            .add_systems(Startup, load_content);
    }
}

/// Load settings and scenes, falling back to built-in defaults on any error.
pub(crate) fn load_content(
    mut settings: ResMut<GameSettings>,
    mut registry: ResMut<SceneRegistry>,
) {
    let base_path = Path::new(DATA_DIR);

    match load_settings(base_path) {
        Ok(loaded) => *settings = loaded,
        Err(e) => warn!("[CONTENT] {}; using default settings", e),
    }

    match load_scenes(base_path) {
        Ok(loaded) => *registry = loaded,
        Err(e) => warn!("[CONTENT] {}; using built-in scenes", e),
    }

    info!("[CONTENT] {}", registry.summary());

    for error in validate_scenes(&settings, &registry) {
        warn!("[CONTENT] {}", error);
    }
}
