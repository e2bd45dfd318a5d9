//! Validation for cross-references between settings and scene descriptors.

use std::collections::HashSet;

use super::data::*;
use super::registry::SceneRegistry;

/// A validation problem with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingReference {
        source_type: &'static str,
        source_id: String,
        field: &'static str,
        target_type: &'static str,
        missing_id: String,
    },
    DuplicateId {
        kind: &'static str,
        id: String,
    },
    EmptyField {
        source_type: &'static str,
        source_id: String,
        field: &'static str,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingReference {
                source_type,
                source_id,
                field,
                target_type,
                missing_id,
            } => write!(
                f,
                "{} '{}' references missing {} '{}' in field '{}'",
                source_type, source_id, target_type, missing_id, field
            ),
            Self::DuplicateId { kind, id } => write!(f, "{} id '{}' is defined twice", kind, id),
            Self::EmptyField {
                source_type,
                source_id,
                field,
            } => write!(f, "{} '{}' has an empty '{}'", source_type, source_id, field),
        }
    }
}

/// Validate settings and scene descriptors.
/// Returns a list of validation errors, empty if everything lines up.
pub fn validate_scenes(settings: &GameSettings, registry: &SceneRegistry) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !registry.contains(&settings.start_scene) {
        errors.push(ValidationError::MissingReference {
            source_type: "Settings",
            source_id: "settings".to_string(),
            field: "start_scene",
            target_type: "Scene",
            missing_id: settings.start_scene.clone(),
        });
    }

    let mut seen = HashSet::new();
    for scene in &registry.scenes {
        if !seen.insert(scene.id.as_str()) {
            errors.push(ValidationError::DuplicateId {
                kind: "Scene",
                id: scene.id.clone(),
            });
        }

        if scene.map.trim().is_empty() {
            errors.push(ValidationError::EmptyField {
                source_type: "Scene",
                source_id: scene.id.clone(),
                field: "map",
            });
        }

        let mut tileset_names = HashSet::new();
        for tileset in &scene.tilesets {
            if !tileset_names.insert(tileset.name.as_str()) {
                errors.push(ValidationError::DuplicateId {
                    kind: "Tileset",
                    id: format!("{}/{}", scene.id, tileset.name),
                });
            }
        }

        for layer in &scene.layers {
            for tileset in &layer.tilesets {
                if scene.tileset(tileset).is_none() {
                    errors.push(ValidationError::MissingReference {
                        source_type: "Layer",
                        source_id: format!("{}/{}", scene.id, layer.name),
                        field: "tilesets",
                        target_type: "Tileset",
                        missing_id: tileset.clone(),
                    });
                }
            }
        }
    }

    errors
}
