//! # Snapshots
//!
//! One immutable-in-spirit picture of the list: an ordered sequence of items,
//! unique by [`ItemId`]. Mutations build the *next* picture; the diff between
//! two pictures is what the screen animates.
//!
//! ```text
//! old snapshot ──┐
//!                ├──► diff() ──► Changeset ──► TUI transition
//! new snapshot ──┘
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::core::item::{ItemId, RowItem, Section};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("item {0} is already in the snapshot")]
    DuplicateItem(ItemId),
    #[error("item {0} is not in the snapshot")]
    UnknownItem(ItemId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    section: Section,
    items: Vec<RowItem>,
}

impl Snapshot {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            items: Vec::new(),
        }
    }

    /// Build a snapshot from items whose identifiers are already known to be
    /// distinct, e.g. a fresh numbered range.
    pub(crate) fn from_unique(section: Section, items: Vec<RowItem>) -> Self {
        debug_assert!(
            items.iter().map(RowItem::id).collect::<HashSet<_>>().len() == items.len(),
            "snapshot items must have distinct identifiers"
        );
        Self { section, items }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn items(&self) -> &[RowItem] {
        &self.items
    }

    pub fn item_identifiers(&self) -> Vec<ItemId> {
        self.items.iter().map(RowItem::id).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn get(&self, index: usize) -> Option<&RowItem> {
        self.items.get(index)
    }

    /// Append items to the end. Nothing is appended if any identifier
    /// collides with an existing item or with another item in the batch.
    pub fn append_items<I>(&mut self, items: I) -> Result<(), SnapshotError>
    where
        I: IntoIterator<Item = RowItem>,
    {
        let incoming: Vec<RowItem> = items.into_iter().collect();
        let mut seen: HashSet<ItemId> = self.items.iter().map(RowItem::id).collect();
        for item in &incoming {
            if !seen.insert(item.id()) {
                return Err(SnapshotError::DuplicateItem(item.id()));
            }
        }
        self.items.extend(incoming);
        Ok(())
    }

    /// Remove the given identifiers. Unknown identifiers are ignored.
    pub fn delete_items(&mut self, ids: &[ItemId]) {
        let doomed: HashSet<ItemId> = ids.iter().copied().collect();
        self.items.retain(|item| !doomed.contains(&item.id()));
    }

    /// Move `id` so it sits directly before `before`.
    pub fn move_item_before(&mut self, id: ItemId, before: ItemId) -> Result<(), SnapshotError> {
        let from = self.index_of(id).ok_or(SnapshotError::UnknownItem(id))?;
        if self.index_of(before).is_none() {
            return Err(SnapshotError::UnknownItem(before));
        }
        if id == before {
            return Ok(());
        }

        let item = self.items.remove(from);
        // Look the anchor up again: removal may have shifted it.
        let to = self
            .index_of(before)
            .ok_or(SnapshotError::UnknownItem(before))?;
        self.items.insert(to, item);
        Ok(())
    }

    /// Replace the content of an existing item in place.
    pub fn reconfigure_item(&mut self, item: RowItem) -> Result<(), SnapshotError> {
        let index = self
            .index_of(item.id())
            .ok_or(SnapshotError::UnknownItem(item.id()))?;
        self.items[index] = item;
        Ok(())
    }
}
