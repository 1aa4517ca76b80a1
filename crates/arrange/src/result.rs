//! Arrangement results and their textual summary.

use std::fmt;

use arrange_core::{geometry::Point3, item::Placeable};

/// Marker appended to a summary preview when lines were left out.
pub const OMITTED_MARKER: &str = "...";

/// Number of summary lines hosts show by default.
pub const DEFAULT_SUMMARY_PREVIEW_LINES: usize = 10;

/// A computed position for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    index: usize,
    name: String,
    position: Point3,
}

impl Placement {
    pub(crate) fn new(index: usize, name: impl Into<String>, position: Point3) -> Self {
        Self {
            index,
            name: name.into(),
            position,
        }
    }

    /// Index of the item in the slice that was arranged.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name of the placed item.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position assigned to the item.
    pub fn position(&self) -> Point3 {
        self.position
    }
}

/// Summary record for one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    name: String,
    object_count: usize,
    z_count: usize,
}

impl GroupSummary {
    pub(crate) fn new(name: impl Into<String>, object_count: usize, z_count: usize) -> Self {
        Self {
            name: name.into(),
            object_count,
            z_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn object_count(&self) -> usize {
        self.object_count
    }

    pub fn z_count(&self) -> usize {
        self.z_count
    }
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Group: {}, Objects: {}, Z count: {}",
            self.name, self.object_count, self.z_count
        )
    }
}

/// Outcome of a single arrangement.
///
/// Placements are listed group by group, in the order positions were
/// assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    placements: Vec<Placement>,
    groups: Vec<GroupSummary>,
}

impl LayoutResult {
    pub(crate) fn new(placements: Vec<Placement>, groups: Vec<GroupSummary>) -> Self {
        Self { placements, groups }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn groups(&self) -> &[GroupSummary] {
        &self.groups
    }

    /// Returns the placement computed for the item called `name`, if any.
    pub fn placement_of(&self, name: &str) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|placement| placement.name == name)
    }

    /// Newline-joined summary with one line per group.
    pub fn summary(&self) -> String {
        self.summary_lines().collect::<Vec<_>>().join("\n")
    }

    /// Summary limited to `limit` lines, followed by [`OMITTED_MARKER`]
    /// when any group was left out.
    pub fn summary_preview(&self, limit: usize) -> String {
        let mut lines: Vec<String> = self.summary_lines().take(limit).collect();
        if self.groups.len() > limit {
            lines.push(OMITTED_MARKER.to_string());
        }
        lines.join("\n")
    }

    /// Write every computed position back into `items`.
    ///
    /// `items` must be the slice this result was planned from. Indices that
    /// are out of range are ignored.
    pub fn apply<T: Placeable>(&self, items: &mut [T]) {
        for placement in &self.placements {
            if let Some(item) = items.get_mut(placement.index) {
                item.set_position(placement.position);
            }
        }
    }

    fn summary_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.groups.iter().map(ToString::to_string)
    }
}
