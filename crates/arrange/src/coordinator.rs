//! Arrangement coordinator
//!
//! Ties sorting, grouping, and grid layout together. Groups are laid out one
//! after another: each group gets its own grid anchored at a running
//! origin, and the origin then moves along the placement direction by the
//! group's extent on that axis.

use log::{debug, trace};

use arrange_core::item::{Named, Placeable};

use crate::{
    ArrangeError,
    config::GridConfig,
    grouping::Grouper,
    layout::GridLayoutEngine,
    result::{GroupSummary, LayoutResult, Placement},
};

/// An item together with its index in the caller's slice.
struct Slot<'a, T> {
    index: usize,
    item: &'a T,
}

impl<T> Clone for Slot<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slot<'_, T> {}

impl<T: Named> Named for Slot<'_, T> {
    fn name(&self) -> &str {
        self.item.name()
    }
}

/// Coordinates a complete arrangement for one configuration.
#[derive(Debug, Clone, Copy)]
pub struct Coordinator<'c> {
    config: &'c GridConfig,
}

impl<'c> Coordinator<'c> {
    pub fn new(config: &'c GridConfig) -> Self {
        Self { config }
    }

    /// Compute an arrangement without touching `items`.
    ///
    /// The current position of `active` anchors the first group. The active
    /// item does not have to be one of `items`; when it is not,
    /// `sort_active_first` and `pass_active` have nothing to act on.
    /// Membership is decided by name.
    ///
    /// # Errors
    ///
    /// Returns [`ArrangeError::InvalidSelection`] if `items` is empty or if no
    /// active item is given.
    pub fn plan<T: Placeable>(
        &self,
        items: &[T],
        active: Option<&dyn Placeable>,
    ) -> Result<LayoutResult, ArrangeError> {
        if items.is_empty() {
            return Err(ArrangeError::invalid_selection("no items selected"));
        }
        let active = active.ok_or_else(|| ArrangeError::invalid_selection("no active item"))?;

        let mut ordered: Vec<Slot<'_, T>> = items
            .iter()
            .enumerate()
            .map(|(index, item)| Slot { index, item })
            .collect();
        ordered.sort_by(|a, b| a.name().cmp(b.name()));

        let active_pos = ordered
            .iter()
            .position(|slot| slot.name() == active.name());
        let active_index = active_pos.map(|pos| ordered[pos].index);

        match active_pos {
            Some(pos) if self.config.sort_active_first() => {
                let slot = ordered.remove(pos);
                ordered.insert(0, slot);
            }
            Some(_) => {}
            None => debug!(active = active.name(); "Active item is not among the selected items"),
        }

        let mut groups = Grouper::group(
            ordered,
            self.config.split_token(),
            self.config.group_by_name(),
        );

        if let Some(active_index) = active_index.filter(|_| self.config.pass_active()) {
            for members in groups.values_mut() {
                members.retain(|slot| slot.index != active_index);
            }
        }

        let engine = GridLayoutEngine::new(self.config);
        let direction = self.config.placement_direction();
        let advance_axis = direction.axis();

        let mut origin = active.position();
        let mut placements = Vec::with_capacity(items.len());
        let mut summaries = Vec::with_capacity(groups.len());

        for (name, members) in groups {
            let count = members.len();
            let positions = engine.positions(count, origin);

            debug!(group = name.as_str(), objects = count, origin:% = origin; "Placing group");

            placements.extend(
                members
                    .iter()
                    .zip(positions)
                    .map(|(slot, position)| Placement::new(slot.index, slot.name(), position)),
            );

            let extents = engine.max_extents(count);
            trace!(group = name.as_str(), extents:? = extents; "Group extents");

            summaries.push(GroupSummary::new(name, count, extents.z()));

            let step = extents.along(advance_axis) as f32 * self.config.spacing(advance_axis);
            origin = origin.translate_along(advance_axis, direction.sign().factor() * step);
        }

        Ok(LayoutResult::new(placements, summaries))
    }

    /// Compute an arrangement and write the positions into `items`.
    ///
    /// Nothing is written unless the whole arrangement succeeds. `active`
    /// is read before anything is written, so pass a snapshot when it is one
    /// of `items`.
    ///
    /// # Errors
    ///
    /// See [`Coordinator::plan`].
    pub fn arrange<T: Placeable>(
        &self,
        items: &mut [T],
        active: Option<&dyn Placeable>,
    ) -> Result<LayoutResult, ArrangeError> {
        let result = self.plan(items, active)?;
        result.apply(items);
        Ok(result)
    }
}
