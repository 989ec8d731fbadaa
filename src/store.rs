//! Position store - the ordered list of item identifiers
//!
//! The store is the single source of truth for layout order. Items are
//! assigned to column slots left-to-right, top-to-bottom-by-height in store
//! order, and a drag commit is a pure permutation of this order.

use std::collections::HashSet;

use crate::error::MasonryError;

/// Unique identifier for a layout item, assigned by the caller.
///
/// Identifiers must be stable for the lifetime of the engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// Ordered sequence of item identifiers.
///
/// Invariant: exactly one entry per known item - no duplicates, no missing
/// entries. Reordering relocates an identifier; it never inserts or removes
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionStore {
    order: Vec<ItemId>,
}

impl PositionStore {
    /// Build a store from the initial item set, in surface order.
    ///
    /// Returns an error if the same identifier appears twice.
    pub fn new(items: Vec<ItemId>) -> Result<Self, MasonryError> {
        let mut seen = HashSet::with_capacity(items.len());
        for &id in &items {
            if !seen.insert(id) {
                return Err(MasonryError::DuplicateItem(id));
            }
        }
        Ok(Self { order: items })
    }

    /// The current order, first item placed first.
    pub fn order(&self) -> &[ItemId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.order.contains(&id)
    }

    /// Index of an identifier in the current order
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.order.iter().position(|&x| x == id)
    }

    /// Relocate `id` to `new_index`, shifting the items in between.
    ///
    /// `new_index` addresses the sequence *after* removal, so `len() - 1`
    /// moves the item to the end. Out-of-range indices are clamped. Returns
    /// false if the identifier is unknown.
    pub fn move_item(&mut self, id: ItemId, new_index: usize) -> bool {
        let Some(current) = self.index_of(id) else {
            return false;
        };
        self.order.remove(current);
        let target = new_index.min(self.order.len());
        self.order.insert(target, id);
        self.assert_invariants();
        true
    }

    /// Validate internal invariants in debug builds.
    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        let unique: HashSet<ItemId> = self.order.iter().copied().collect();
        assert_eq!(
            unique.len(),
            self.order.len(),
            "position store contains duplicate identifiers"
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    fn assert_invariants(&self) {}
}
