//! Geometric primitives for grid placement.
//!
//! This module provides the small set of 3D types used by the arrangement
//! pipeline to express positions and directions.
//!
//! # Overview
//!
//! - [`Point3`] - A 3D coordinate in the host's coordinate space
//! - [`Axis`] - One of the three coordinate axes
//! - [`Sign`] - Positive or negative orientation along an axis
//! - [`PlacementDirection`] - A signed axis (`X+`, `X-`, `Y+`, `Y-`, `Z+`, `Z-`)
//!
//! # Coordinate System
//!
//! No handedness or units are assumed. Coordinates are whatever the host
//! uses; the arrangement only adds multiples of the configured spacing to
//! an origin taken from the host.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 3D point in host coordinate space.
///
/// Serialized as a `[x, y, z]` array so scene files stay compact.
///
/// # Examples
///
/// ```
/// # use arrange_core::geometry::{Axis, Point3};
/// let origin = Point3::new(1.0, 2.0, 3.0);
///
/// let moved = origin.translate_along(Axis::Y, 4.0);
/// assert_eq!(moved.y(), 6.0);
/// assert_eq!(moved.coord(Axis::X), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Point3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Point3 {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the z-coordinate of the point
    pub fn z(self) -> f32 {
        self.z
    }

    /// Returns the coordinate on the given axis
    pub fn coord(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Creates a new point with the coordinate on `axis` replaced
    pub fn with_coord(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }

    /// Moves the point by `delta` along a single axis.
    pub fn translate_along(self, axis: Axis, delta: f32) -> Self {
        self.with_coord(axis, self.coord(axis) + delta)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for [f32; 3] {
    fn from(point: Point3) -> Self {
        [point.x, point.y, point.z]
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in `x`, `y`, `z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        write!(f, "{s}")
    }
}

/// Orientation along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns `1.0` or `-1.0`.
    pub fn factor(self) -> f32 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// Error returned when a placement direction tag cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported placement direction `{0}`, expected one of X+, X-, Y+, Y-, Z+, Z-")]
pub struct ParseDirectionError(String);

/// A signed axis controlling where successive groups are placed.
///
/// The direction does two things:
///
/// - Inside a group, the grid index on the direction's axis is multiplied by
///   the direction's [`Sign`]. The other two axes always grow positively.
/// - Between groups, the running origin advances along the direction's axis.
///
/// # Examples
///
/// ```
/// # use arrange_core::geometry::{Axis, PlacementDirection, Sign};
/// let direction: PlacementDirection = "Y-".parse().unwrap();
///
/// assert_eq!(direction.axis(), Axis::Y);
/// assert_eq!(direction.sign(), Sign::Negative);
/// assert_eq!(direction.to_string(), "Y-");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementDirection {
    #[default]
    #[serde(rename = "X+")]
    XPositive,
    #[serde(rename = "X-")]
    XNegative,
    #[serde(rename = "Y+")]
    YPositive,
    #[serde(rename = "Y-")]
    YNegative,
    #[serde(rename = "Z+")]
    ZPositive,
    #[serde(rename = "Z-")]
    ZNegative,
}

impl PlacementDirection {
    /// All six directions in declaration order.
    pub const ALL: [PlacementDirection; 6] = [
        PlacementDirection::XPositive,
        PlacementDirection::XNegative,
        PlacementDirection::YPositive,
        PlacementDirection::YNegative,
        PlacementDirection::ZPositive,
        PlacementDirection::ZNegative,
    ];

    /// Returns the axis this direction points along
    pub fn axis(self) -> Axis {
        match self {
            Self::XPositive | Self::XNegative => Axis::X,
            Self::YPositive | Self::YNegative => Axis::Y,
            Self::ZPositive | Self::ZNegative => Axis::Z,
        }
    }

    /// Returns the orientation along [`Self::axis`]
    pub fn sign(self) -> Sign {
        match self {
            Self::XPositive | Self::YPositive | Self::ZPositive => Sign::Positive,
            Self::XNegative | Self::YNegative | Self::ZNegative => Sign::Negative,
        }
    }

    /// Returns the sign factor applied to grid indices on `axis`.
    ///
    /// Only the direction's own axis can flip; every other axis yields `1.0`.
    pub fn factor_for(self, axis: Axis) -> f32 {
        if self.axis() == axis {
            self.sign().factor()
        } else {
            1.0
        }
    }
}

impl FromStr for PlacementDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X+" => Ok(Self::XPositive),
            "X-" => Ok(Self::XNegative),
            "Y+" => Ok(Self::YPositive),
            "Y-" => Ok(Self::YNegative),
            "Z+" => Ok(Self::ZPositive),
            "Z-" => Ok(Self::ZNegative),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl From<PlacementDirection> for &'static str {
    fn from(val: PlacementDirection) -> Self {
        match val {
            PlacementDirection::XPositive => "X+",
            PlacementDirection::XNegative => "X-",
            PlacementDirection::YPositive => "Y+",
            PlacementDirection::YNegative => "Y-",
            PlacementDirection::ZPositive => "Z+",
            PlacementDirection::ZNegative => "Z-",
        }
    }
}

impl fmt::Display for PlacementDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_accessors() {
        let point = Point3::new(1.0, -2.0, 3.5);

        assert_approx_eq!(f32, point.x(), 1.0);
        assert_approx_eq!(f32, point.y(), -2.0);
        assert_approx_eq!(f32, point.z(), 3.5);
        assert_approx_eq!(f32, point.coord(Axis::Z), 3.5);
    }

    #[test]
    fn test_point_translate_along_touches_single_axis() {
        let point = Point3::new(1.0, 1.0, 1.0).translate_along(Axis::X, -4.0);

        assert_eq!(point, Point3::new(-3.0, 1.0, 1.0));
    }

    #[test]
    fn test_point_array_conversion() {
        let point = Point3::from([4.0, 5.0, 6.0]);
        let array: [f32; 3] = point.into();

        assert_eq!(array, [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point3::new(1.0, 0.5, -2.0).to_string(), "(1, 0.5, -2)");
    }

    #[test]
    fn test_direction_parse_roundtrip() {
        for direction in PlacementDirection::ALL {
            let parsed: PlacementDirection = direction.to_string().parse().unwrap();
            assert_eq!(parsed, direction);
        }
    }

    #[test]
    fn test_direction_parse_rejects_unknown() {
        let err = "W+".parse::<PlacementDirection>().unwrap_err();
        assert!(err.to_string().contains("W+"));

        // Tags are case sensitive
        assert!("x+".parse::<PlacementDirection>().is_err());
    }

    #[test]
    fn test_direction_default_is_x_positive() {
        assert_eq!(PlacementDirection::default(), PlacementDirection::XPositive);
    }

    #[test]
    fn test_direction_factor_only_flips_own_axis() {
        let direction = PlacementDirection::ZNegative;

        assert_approx_eq!(f32, direction.factor_for(Axis::X), 1.0);
        assert_approx_eq!(f32, direction.factor_for(Axis::Y), 1.0);
        assert_approx_eq!(f32, direction.factor_for(Axis::Z), -1.0);
    }

    fn point_strategy() -> impl Strategy<Value = Point3> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0, -1000.0f32..1000.0)
            .prop_map(|(x, y, z)| Point3::new(x, y, z))
    }

    fn check_translate_preserves_other_axes(
        point: Point3,
        delta: f32,
    ) -> Result<(), TestCaseError> {
        for axis in Axis::ALL {
            let moved = point.translate_along(axis, delta);
            for other in Axis::ALL.into_iter().filter(|other| *other != axis) {
                prop_assert_eq!(moved.coord(other), point.coord(other));
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn translate_preserves_other_axes(point in point_strategy(), delta in -100.0f32..100.0) {
            check_translate_preserves_other_axes(point, delta)?;
        }
    }
}
