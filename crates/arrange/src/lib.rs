//! Arrange - deterministic 3D grid placement for named items.
//!
//! Items are sorted by name, optionally grouped by a name prefix, and each
//! group is laid out on its own grid. Groups follow one another along a
//! configurable signed axis, starting from the active item's position.

pub mod config;
pub mod grouping;
pub mod layout;

mod coordinator;
mod error;
mod result;

pub use arrange_core::{geometry, item};

pub use coordinator::Coordinator;
pub use error::ArrangeError;
pub use result::{
    DEFAULT_SUMMARY_PREVIEW_LINES, GroupSummary, LayoutResult, OMITTED_MARKER, Placement,
};

use log::{debug, info, trace};

use config::AppConfig;
use item::Placeable;

/// Entry point for arranging items with a fixed configuration.
///
/// # Examples
///
/// ```rust
/// use arrange::{Arranger, config::{AppConfig, GridConfig}, item::SceneItem};
///
/// let grid = GridConfig::builder()
///     .group_by_name(true)
///     .build()
///     .expect("valid configuration");
/// let arranger = Arranger::new(AppConfig::new(grid));
///
/// let mut items = vec![SceneItem::new("Chair.1"), SceneItem::new("Table.1")];
/// let active = items[0].clone();
/// let result = arranger
///     .arrange(&mut items, Some(&active))
///     .expect("Failed to arrange");
///
/// assert_eq!(result.groups().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Arranger {
    config: AppConfig,
}

impl Arranger {
    /// Create a new arranger with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this arranger uses.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compute positions for `items` without modifying them.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangeError::InvalidSelection`] for an empty selection or a
    /// missing active item. The active item may lie outside `items`.
    pub fn plan<T: Placeable>(
        &self,
        items: &[T],
        active: Option<&dyn Placeable>,
    ) -> Result<LayoutResult, ArrangeError> {
        info!(
            items = items.len(),
            active:? = active.map(|item| item.name());
            "Planning arrangement"
        );
        trace!(config:? = self.config.grid(); "Grid configuration");

        let result = Coordinator::new(self.config.grid()).plan(items, active)?;

        debug!(
            placements = result.placements().len(),
            groups = result.groups().len();
            "Arrangement planned"
        );

        Ok(result)
    }

    /// Compute positions for `items` and write them back.
    ///
    /// Items are left untouched when an error is returned.
    ///
    /// # Errors
    ///
    /// See [`Arranger::plan`].
    pub fn arrange<T: Placeable>(
        &self,
        items: &mut [T],
        active: Option<&dyn Placeable>,
    ) -> Result<LayoutResult, ArrangeError> {
        let result = self.plan(items, active)?;
        result.apply(items);

        info!(placed = result.placements().len(); "Positions applied");

        Ok(result)
    }
}
