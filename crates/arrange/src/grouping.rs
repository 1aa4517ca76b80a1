//! Name-based grouping of items.
//!
//! Items are bucketed by a key derived from their name. Buckets keep the
//! order in which their first member was encountered, and members keep
//! their input order within a bucket.

use indexmap::IndexMap;

use arrange_core::item::Named;

/// Name of the single group produced when grouping is disabled.
pub const ALL_OBJECTS_GROUP: &str = "All Objects";

/// Ordered mapping of group name to its members.
pub type Groups<N> = IndexMap<String, Vec<N>>;

/// Derives the group key of an item from its name.
pub trait GroupKey {
    /// Returns the key for `name`.
    fn key<'n>(&self, name: &'n str) -> &'n str;
}

/// Keys every item with [`ALL_OBJECTS_GROUP`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleGroup;

impl GroupKey for SingleGroup {
    fn key<'n>(&self, _name: &'n str) -> &'n str {
        ALL_OBJECTS_GROUP
    }
}

/// Keys an item by the part of its name before the first `token`.
///
/// A name without the token is its own key.
///
/// # Examples
///
/// ```
/// # use arrange::grouping::{GroupKey, SplitPrefix};
/// let key = SplitPrefix::new(".");
///
/// assert_eq!(key.key("Chair.001.L"), "Chair");
/// assert_eq!(key.key("Table"), "Table");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SplitPrefix<'t> {
    token: &'t str,
}

impl<'t> SplitPrefix<'t> {
    pub fn new(token: &'t str) -> Self {
        Self { token }
    }
}

impl GroupKey for SplitPrefix<'_> {
    fn key<'n>(&self, name: &'n str) -> &'n str {
        name.split_once(self.token)
            .map_or(name, |(prefix, _)| prefix)
    }
}

/// Partitions items into ordered groups.
pub struct Grouper;

impl Grouper {
    /// Group `items` by name prefix, or into a single group when disabled.
    ///
    /// An empty `split_token` is rejected by configuration validation before
    /// grouping is ever enabled with it.
    pub fn group<N: Named>(items: Vec<N>, split_token: &str, enabled: bool) -> Groups<N> {
        if enabled {
            Self::group_with(items, &SplitPrefix::new(split_token))
        } else {
            Self::group_with(items, &SingleGroup)
        }
    }

    /// Group `items` with an arbitrary key function.
    pub fn group_with<N: Named, K: GroupKey + ?Sized>(items: Vec<N>, key: &K) -> Groups<N> {
        let mut groups = Groups::new();

        for item in items {
            let group_key = key.key(item.name()).to_string();
            groups.entry(group_key).or_insert_with(Vec::new).push(item);
        }

        groups
    }
}
