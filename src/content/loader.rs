//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;
use super::registry::SceneRegistry;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse RON text containing a DataFile<T> wrapper.
pub fn parse_data_file<T>(contents: &str, file_name: &str) -> Result<Vec<T>, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let data: DataFile<T> = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(data.items)
}

/// Parse RON text containing a single struct (not wrapped in DataFile).
pub fn parse_single_file<T>(contents: &str, file_name: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load `settings.ron` from the data directory.
pub fn load_settings(base_path: &Path) -> Result<GameSettings, ContentLoadError> {
    let path = base_path.join("settings.ron");
    let contents = read_file(&path)?;
    parse_single_file(&contents, &path.display().to_string())
}

/// Load `scenes.ron` from the data directory.
pub fn load_scenes(base_path: &Path) -> Result<SceneRegistry, ContentLoadError> {
    let path = base_path.join("scenes.ron");
    let contents = read_file(&path)?;
    let scenes = parse_data_file::<SceneDescriptor>(&contents, &path.display().to_string())?;

    if scenes.is_empty() {
        return Err(ContentLoadError {
            file: path.display().to_string(),
            message: "no scenes defined".to_string(),
        });
    }

    Ok(SceneRegistry { scenes })
}
