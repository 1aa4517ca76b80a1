//! Configuration types for grid arrangement.
//!
//! This module provides the configuration structures that control how items
//! are grouped and laid out. All types implement [`serde::Deserialize`] for
//! loading from external sources, and every path that produces a
//! [`GridConfig`] validates it first.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root holding the grid section.
//! - [`GridConfig`] - Grid shape, spacing, direction, and grouping options.
//! - [`GridConfigBuilder`] - Validating builder for [`GridConfig`].
//!
//! # Example
//!
//! ```
//! # use arrange::config::GridConfig;
//! # use arrange::geometry::PlacementDirection;
//! let config = GridConfig::builder()
//!     .x_count(4)
//!     .placement_direction(PlacementDirection::YNegative)
//!     .build()
//!     .expect("valid configuration");
//!
//! assert_eq!(config.x_count(), 4);
//! assert_eq!(config.y_count(), 3);
//! ```

use serde::Deserialize;

use arrange_core::geometry::{Axis, PlacementDirection};

use crate::ArrangeError;

/// Default number of cells along X and Y.
pub const DEFAULT_COUNT: usize = 3;

/// Default spacing on every axis.
pub const DEFAULT_SPACING: f32 = 2.0;

/// Smallest accepted spacing on any axis.
pub const MIN_SPACING: f32 = 0.1;

/// Default token separating a group prefix from the rest of a name.
pub const DEFAULT_SPLIT_TOKEN: &str = ".";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Grid configuration section.
    #[serde(default)]
    grid: GridConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified grid configuration.
    pub fn new(grid: GridConfig) -> Self {
        Self { grid }
    }

    /// Returns the grid configuration.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }
}

/// Immutable, validated grid configuration.
///
/// Construct one through [`GridConfig::builder`] or by deserializing; both
/// reject out-of-range values with [`ArrangeError::InvalidConfig`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawGridConfig")]
pub struct GridConfig {
    x_count: usize,
    y_count: usize,
    spacing_x: f32,
    spacing_y: f32,
    spacing_z: f32,
    placement_direction: PlacementDirection,
    split_token: String,
    group_by_name: bool,
    sort_active_first: bool,
    pass_active: bool,
}

impl GridConfig {
    /// Returns a builder seeded with the default values.
    pub fn builder() -> GridConfigBuilder {
        GridConfigBuilder::default()
    }

    /// Number of cells along X in one layer.
    pub fn x_count(&self) -> usize {
        self.x_count
    }

    /// Number of cells along Y in one layer.
    pub fn y_count(&self) -> usize {
        self.y_count
    }

    /// Spacing between neighbouring cells along X.
    pub fn spacing_x(&self) -> f32 {
        self.spacing_x
    }

    /// Spacing between neighbouring cells along Y.
    pub fn spacing_y(&self) -> f32 {
        self.spacing_y
    }

    /// Spacing between neighbouring layers along Z.
    pub fn spacing_z(&self) -> f32 {
        self.spacing_z
    }

    /// Spacing on the given axis.
    pub fn spacing(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.spacing_x,
            Axis::Y => self.spacing_y,
            Axis::Z => self.spacing_z,
        }
    }

    /// Direction used to flip one grid axis and to advance between groups.
    pub fn placement_direction(&self) -> PlacementDirection {
        self.placement_direction
    }

    /// Token whose first occurrence ends the group prefix of a name.
    pub fn split_token(&self) -> &str {
        &self.split_token
    }

    /// Whether items are grouped by name prefix.
    pub fn group_by_name(&self) -> bool {
        self.group_by_name
    }

    /// Whether the active item is moved to the front before grouping.
    pub fn sort_active_first(&self) -> bool {
        self.sort_active_first
    }

    /// Whether the active item is left out of the arrangement.
    pub fn pass_active(&self) -> bool {
        self.pass_active
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            x_count: DEFAULT_COUNT,
            y_count: DEFAULT_COUNT,
            spacing_x: DEFAULT_SPACING,
            spacing_y: DEFAULT_SPACING,
            spacing_z: DEFAULT_SPACING,
            placement_direction: PlacementDirection::default(),
            split_token: DEFAULT_SPLIT_TOKEN.to_string(),
            group_by_name: false,
            sort_active_first: false,
            pass_active: false,
        }
    }
}

/// Unvalidated mirror of [`GridConfig`] used for deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawGridConfig {
    x_count: usize,
    y_count: usize,
    spacing_x: f32,
    spacing_y: f32,
    spacing_z: f32,
    #[serde(alias = "group_placement_direction")]
    placement_direction: PlacementDirection,
    #[serde(alias = "split_char")]
    split_token: String,
    group_by_name: bool,
    sort_active_first: bool,
    pass_active: bool,
}

impl Default for RawGridConfig {
    fn default() -> Self {
        let defaults = GridConfig::default();
        Self {
            x_count: defaults.x_count,
            y_count: defaults.y_count,
            spacing_x: defaults.spacing_x,
            spacing_y: defaults.spacing_y,
            spacing_z: defaults.spacing_z,
            placement_direction: defaults.placement_direction,
            split_token: defaults.split_token,
            group_by_name: defaults.group_by_name,
            sort_active_first: defaults.sort_active_first,
            pass_active: defaults.pass_active,
        }
    }
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = ArrangeError;

    fn try_from(raw: RawGridConfig) -> Result<Self, Self::Error> {
        if raw.x_count == 0 {
            return Err(ArrangeError::invalid_config("x_count must be at least 1"));
        }
        if raw.y_count == 0 {
            return Err(ArrangeError::invalid_config("y_count must be at least 1"));
        }
        if raw.x_count.checked_mul(raw.y_count).is_none() {
            return Err(ArrangeError::invalid_config(format!(
                "x_count * y_count overflows ({} * {})",
                raw.x_count, raw.y_count
            )));
        }

        for (axis, spacing) in [
            (Axis::X, raw.spacing_x),
            (Axis::Y, raw.spacing_y),
            (Axis::Z, raw.spacing_z),
        ] {
            // NaN fails both comparisons, so check finiteness explicitly
            if !spacing.is_finite() || spacing < MIN_SPACING {
                return Err(ArrangeError::invalid_config(format!(
                    "spacing on {axis} must be a finite value of at least {MIN_SPACING}, got {spacing}"
                )));
            }
        }

        if raw.group_by_name && raw.split_token.is_empty() {
            return Err(ArrangeError::invalid_config(
                "split_token must not be empty when group_by_name is enabled",
            ));
        }

        Ok(Self {
            x_count: raw.x_count,
            y_count: raw.y_count,
            spacing_x: raw.spacing_x,
            spacing_y: raw.spacing_y,
            spacing_z: raw.spacing_z,
            placement_direction: raw.placement_direction,
            split_token: raw.split_token,
            group_by_name: raw.group_by_name,
            sort_active_first: raw.sort_active_first,
            pass_active: raw.pass_active,
        })
    }
}

/// Builder for [`GridConfig`].
///
/// Starts from the defaults; [`GridConfigBuilder::build`] validates.
#[derive(Debug, Clone, Default)]
pub struct GridConfigBuilder {
    raw: RawGridConfig,
}

impl GridConfigBuilder {
    /// Set the number of cells along X
    pub fn x_count(mut self, count: usize) -> Self {
        self.raw.x_count = count;
        self
    }

    /// Set the number of cells along Y
    pub fn y_count(mut self, count: usize) -> Self {
        self.raw.y_count = count;
        self
    }

    /// Set the spacing on all three axes at once
    pub fn spacing(self, spacing: f32) -> Self {
        self.spacing_x(spacing)
            .spacing_y(spacing)
            .spacing_z(spacing)
    }

    pub fn spacing_x(mut self, spacing: f32) -> Self {
        self.raw.spacing_x = spacing;
        self
    }

    pub fn spacing_y(mut self, spacing: f32) -> Self {
        self.raw.spacing_y = spacing;
        self
    }

    pub fn spacing_z(mut self, spacing: f32) -> Self {
        self.raw.spacing_z = spacing;
        self
    }

    pub fn placement_direction(mut self, direction: PlacementDirection) -> Self {
        self.raw.placement_direction = direction;
        self
    }

    pub fn split_token(mut self, token: impl Into<String>) -> Self {
        self.raw.split_token = token.into();
        self
    }

    pub fn group_by_name(mut self, enabled: bool) -> Self {
        self.raw.group_by_name = enabled;
        self
    }

    pub fn sort_active_first(mut self, enabled: bool) -> Self {
        self.raw.sort_active_first = enabled;
        self
    }

    pub fn pass_active(mut self, enabled: bool) -> Self {
        self.raw.pass_active = enabled;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangeError::InvalidConfig`] if:
    /// - `x_count` or `y_count` is zero
    /// - any spacing is non-finite or below [`MIN_SPACING`]
    /// - grouping is enabled with an empty split token
    pub fn build(self) -> Result<GridConfig, ArrangeError> {
        GridConfig::try_from(self.raw)
    }
}
