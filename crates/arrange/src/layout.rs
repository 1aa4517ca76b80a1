//! Grid layout engine
//!
//! This module computes the positions of a run of items inside a single
//! grid. Cells are enumerated layer by layer: `z` is the outermost index,
//! then `y`, then `x`. A layer holds `x_count * y_count` cells and as many
//! layers are stacked as needed to fit every item; the last layer may be
//! partially filled.

use arrange_core::geometry::{Axis, Point3};

use crate::config::GridConfig;

/// Integer coordinates of a cell inside a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridCell {
    /// Returns the cell index on the given axis
    pub fn index(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Number of cells a grid actually spans on each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extents {
    x: usize,
    y: usize,
    z: usize,
}

impl Extents {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    pub fn x(self) -> usize {
        self.x
    }

    pub fn y(self) -> usize {
        self.y
    }

    pub fn z(self) -> usize {
        self.z
    }

    /// Returns the extent on the given axis
    pub fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Layout engine placing a run of items on a grid.
///
/// The engine borrows a validated [`GridConfig`], so `x_count` and
/// `y_count` are always at least one.
#[derive(Debug, Clone, Copy)]
pub struct GridLayoutEngine<'a> {
    config: &'a GridConfig,
}

impl<'a> GridLayoutEngine<'a> {
    /// Create a new grid layout engine for the given configuration
    pub fn new(config: &'a GridConfig) -> Self {
        Self { config }
    }

    /// Number of cells in one layer.
    ///
    /// Configuration validation guarantees the product fits in `usize`.
    pub fn layer_capacity(&self) -> usize {
        self.config.x_count() * self.config.y_count()
    }

    /// Number of layers needed to hold `count` items.
    ///
    /// Zero items need zero layers.
    pub fn z_count(&self, count: usize) -> usize {
        if count == 0 {
            return 0;
        }
        count.div_ceil(self.layer_capacity())
    }

    /// Enumerate the first `count` cells in `z`, `y`, `x` order.
    pub fn cells(&self, count: usize) -> impl Iterator<Item = GridCell> + use<> {
        let x_count = self.config.x_count();
        let y_count = self.config.y_count();

        (0..self.z_count(count))
            .flat_map(move |z| {
                (0..y_count).flat_map(move |y| (0..x_count).map(move |x| GridCell { x, y, z }))
            })
            .take(count)
    }

    /// Calculate the position of a single cell relative to `origin`.
    ///
    /// Only the axis named by the placement direction can run negatively;
    /// the other two axes always grow from the origin.
    pub fn position_of(&self, cell: GridCell, origin: Point3) -> Point3 {
        let direction = self.config.placement_direction();
        let offset = |axis: Axis| {
            direction.factor_for(axis) * cell.index(axis) as f32 * self.config.spacing(axis)
        };

        Point3::new(
            origin.x() + offset(Axis::X),
            origin.y() + offset(Axis::Y),
            origin.z() + offset(Axis::Z),
        )
    }

    /// Calculate `count` positions starting at `origin`.
    pub fn positions(&self, count: usize, origin: Point3) -> Vec<Point3> {
        self.cells(count)
            .map(|cell| self.position_of(cell, origin))
            .collect()
    }

    /// Calculate how many cells `count` items span on each axis.
    ///
    /// `y` counts the rows touched by the first layer, so it only reaches
    /// `y_count` once a layer has been completely filled.
    pub fn max_extents(&self, count: usize) -> Extents {
        let x_count = self.config.x_count();

        Extents {
            x: count.min(x_count),
            y: count.div_ceil(x_count).min(self.config.y_count()),
            z: self.z_count(count),
        }
    }
}
