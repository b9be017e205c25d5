//! Scene input parsing.

use anyhow::{Context, Result};
use panelnest_core::{Extents, ObjectRef};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One host object as exported by the modeling application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    /// Host identifier, passed through to the outputs untouched.
    pub id: String,
    /// Bounding-box extents in millimeters, any order.
    pub extents: [f64; 3],
}

impl SceneObject {
    /// Creates a scene object from a host id and its three extents.
    ///
    /// ```
    /// use panelnest_cli::SceneObject;
    ///
    /// let door = SceneObject::new("door", [18.0, 700.0, 400.0]);
    /// let (source, extents) = door.into_parts();
    /// assert_eq!(source.as_str(), "door");
    /// assert_eq!(extents.sorted(), [18.0, 400.0, 700.0]);
    /// ```
    pub fn new(id: impl Into<String>, extents: [f64; 3]) -> Self {
        Self {
            id: id.into(),
            extents,
        }
    }

    /// Splits into the handle/extents pair the classifier consumes.
    pub fn into_parts(self) -> (ObjectRef, Extents) {
        (ObjectRef::new(self.id), Extents(self.extents))
    }
}

/// Parses a JSON array of scene objects.
pub fn parse_scene(json: &str) -> Result<Vec<SceneObject>> {
    serde_json::from_str(json).context("scene must be a JSON array of {id, extents}")
}

/// Loads scene objects from a JSON file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Vec<SceneObject>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    let objects =
        parse_scene(&json).with_context(|| format!("failed to parse {}", path.display()))?;
    log::info!("Loaded {} objects from {}", objects.len(), path.display());
    Ok(objects)
}
