//! Host-facing item abstractions.
//!
//! Items are owned by the host. The arrangement only ever reads an item's
//! name and current position and writes its new position, which is exactly
//! what the [`Named`] and [`Placeable`] traits expose.

use serde::{Deserialize, Serialize};

use crate::geometry::Point3;

/// Anything with a unique name.
pub trait Named {
    /// Returns the item's name.
    fn name(&self) -> &str;
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A named item whose position can be read and written.
pub trait Placeable: Named {
    /// Returns the item's current position.
    fn position(&self) -> Point3;

    /// Replaces the item's position.
    fn set_position(&mut self, position: Point3);
}

/// A plain named item with a position.
///
/// This is the concrete item type used by scene files and tests. Hosts with
/// their own object model implement [`Placeable`] directly instead.
///
/// # Examples
///
/// ```
/// # use arrange_core::{geometry::Point3, item::{Named, Placeable, SceneItem}};
/// let mut item = SceneItem::new("Cube.001");
/// item.set_position(Point3::new(1.0, 2.0, 3.0));
///
/// assert_eq!(item.name(), "Cube.001");
/// assert_eq!(item.position(), Point3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    name: String,
    #[serde(default)]
    position: Point3,
}

impl SceneItem {
    /// Creates an item at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Point3::default(),
        }
    }

    /// Sets the position for this item (builder style).
    pub fn with_position(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }
}

impl Named for SceneItem {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Placeable for SceneItem {
    fn position(&self) -> Point3 {
        self.position
    }

    fn set_position(&mut self, position: Point3) {
        self.position = position;
    }
}
