//! Scene files.
//!
//! A scene is the CLI's stand-in for a host: a list of named items with
//! positions, plus the name of the active item.
//!
//! ```toml
//! active = "Chair.1"
//!
//! [[items]]
//! name = "Chair.1"
//! position = [0.0, 0.0, 0.0]
//! ```
//!
//! The active item does not have to be one of the items. In that case the
//! scene gives its position with `active_position = [x, y, z]`.

use std::{fs, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use arrange::{
    ArrangeError,
    geometry::Point3,
    item::{Named, SceneItem},
};

/// Scene file errors
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to parse scene file: {0}")]
    Parse(String),

    #[error("Failed to serialize scene: {0}")]
    Serialize(String),
}

impl From<SceneError> for ArrangeError {
    fn from(err: SceneError) -> Self {
        ArrangeError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            err.to_string(),
        ))
    }
}

/// Items and the active item name, as stored in a scene file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    active: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    active_position: Option<Point3>,

    #[serde(default)]
    items: Vec<SceneItem>,
}

impl Scene {
    pub fn new(active: Option<String>, items: Vec<SceneItem>) -> Self {
        Self {
            active,
            active_position: None,
            items,
        }
    }

    /// Sets the position of an active item that is not one of the items.
    pub fn with_active_position(mut self, position: Point3) -> Self {
        self.active_position = Some(position);
        self
    }

    /// Name of the active item, if the scene designates one.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Position of an active item kept outside the item list.
    pub fn active_position(&self) -> Option<Point3> {
        self.active_position
    }

    /// Snapshot of the item called `name`, to be used as the active item.
    ///
    /// A listed item wins. Otherwise the item is built from
    /// `active_position`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangeError::InvalidSelection`] when `name` is neither
    /// listed nor given a position.
    pub fn resolve_active(&self, name: &str) -> Result<SceneItem, ArrangeError> {
        if let Some(item) = self.items.iter().find(|item| item.name() == name) {
            return Ok(item.clone());
        }

        match self.active_position {
            Some(position) => {
                debug!(
                    active = name,
                    position:% = position;
                    "Active item is outside the scene items"
                );
                Ok(SceneItem::new(name).with_position(position))
            }
            None => Err(ArrangeError::invalid_selection(format!(
                "active item `{name}` is not in the scene and no active_position is set"
            ))),
        }
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [SceneItem] {
        &mut self.items
    }

    /// Parse a scene from TOML text.
    pub fn from_toml(source: &str) -> Result<Self, SceneError> {
        toml::from_str(source).map_err(|e| SceneError::Parse(e.to_string()))
    }

    /// Serialize the scene to TOML text.
    pub fn to_toml(&self) -> Result<String, SceneError> {
        toml::to_string_pretty(self).map_err(|e| SceneError::Serialize(e.to_string()))
    }
}

/// Read and parse a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, ArrangeError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let scene = Scene::from_toml(&source)?;

    debug!(path = path.display().to_string(), items = scene.items.len(); "Scene loaded");

    Ok(scene)
}

/// Serialize a scene and write it to `path`.
pub fn write_scene(path: impl AsRef<Path>, scene: &Scene) -> Result<(), ArrangeError> {
    fs::write(path, scene.to_toml()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use arrange::item::Placeable;

    use super::*;

    #[test]
    fn test_parse_scene() {
        let scene = Scene::from_toml(
            r#"
            active = "b"

            [[items]]
            name = "a"

            [[items]]
            name = "b"
            position = [1.0, 2.0, 3.5]
            "#,
        )
        .unwrap();

        assert_eq!(scene.active(), Some("b"));
        assert_eq!(scene.items().len(), 2);
        assert_eq!(scene.items()[0].position(), Point3::default());
        assert_eq!(scene.items()[1].name(), "b");
        assert_eq!(scene.items()[1].position(), Point3::new(1.0, 2.0, 3.5));
    }

    #[test]
    fn test_scene_without_active() {
        let scene = Scene::from_toml("[[items]]\nname = \"solo\"").unwrap();
        assert_eq!(scene.active(), None);
    }

    #[test]
    fn test_reject_malformed_position() {
        let err = Scene::from_toml("[[items]]\nname = \"a\"\nposition = [1.0]").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn test_serialized_scene_parses_back() {
        let scene = Scene::new(
            Some("a".to_string()),
            vec![SceneItem::new("a").with_position(Point3::new(-1.0, 0.5, 2.0))],
        );

        let text = scene.to_toml().unwrap();
        assert!(text.contains("active = \"a\""));
        assert_eq!(Scene::from_toml(&text).unwrap(), scene);
    }

    #[test]
    fn test_resolve_listed_active() {
        let scene = Scene::new(
            Some("b".to_string()),
            vec![
                SceneItem::new("a"),
                SceneItem::new("b").with_position(Point3::new(1.0, 1.0, 0.0)),
            ],
        )
        .with_active_position(Point3::new(9.0, 9.0, 9.0));

        let active = scene.resolve_active("b").unwrap();

        assert_eq!(active.position(), Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_resolve_outside_active() {
        let scene = Scene::from_toml(
            r#"
            active = "Camera"
            active_position = [0.0, -4.0, 2.0]

            [[items]]
            name = "a"
            "#,
        )
        .unwrap();

        let active = scene.resolve_active("Camera").unwrap();

        assert_eq!(active.name(), "Camera");
        assert_eq!(active.position(), Point3::new(0.0, -4.0, 2.0));
        assert_eq!(scene.active_position(), Some(Point3::new(0.0, -4.0, 2.0)));
    }

    #[test]
    fn test_resolve_unknown_active_without_position() {
        let scene = Scene::new(None, vec![SceneItem::new("a")]);

        let err = scene.resolve_active("ghost").unwrap_err();

        assert!(matches!(err, ArrangeError::InvalidSelection(_)));
    }
}
