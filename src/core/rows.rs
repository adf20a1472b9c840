//! # Row List
//!
//! The screen's only piece of domain state: 31 numbered rows in one section.
//!
//! Two operations change it:
//!
//! - **toggle(position)**: flips the row's flag. A row that *becomes*
//!   selected jumps to the front; a row that becomes unselected stays where
//!   it is.
//! - **shuffle(rng)**: uniform random permutation, flags travel with rows.
//!
//! Both report the [`Changeset`] between the old and new list so the caller
//! can animate only what changed.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::core::diff::{Changeset, diff};
use crate::core::item::{ItemId, RowItem, Section};
use crate::core::snapshot::{Snapshot, SnapshotError};

/// Rows are numbered `0..ROW_COUNT`.
pub const ROW_COUNT: u32 = 31;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowListError {
    #[error("row position {position} is out of range (list has {len} rows)")]
    OutOfRange { position: usize, len: usize },
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// What a toggle did, for status text and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    pub id: ItemId,
    pub is_selected: bool,
    pub moved_to_front: bool,
    pub changes: Changeset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowList {
    snapshot: Snapshot,
}

impl Default for RowList {
    fn default() -> Self {
        Self::new()
    }
}

impl RowList {
    /// Rows `0..=30`, ascending, none selected.
    pub fn new() -> Self {
        let items = (0..ROW_COUNT).map(RowItem::new).collect();
        Self {
            snapshot: Snapshot::from_unique(Section::Numbers, items),
        }
    }

    pub fn items(&self) -> &[RowItem] {
        self.snapshot.items()
    }

    pub fn numbers(&self) -> Vec<ItemId> {
        self.snapshot.item_identifiers()
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&RowItem> {
        self.snapshot.get(position)
    }

    pub fn position_of(&self, number: ItemId) -> Option<usize> {
        self.snapshot.index_of(number)
    }

    pub fn section(&self) -> Section {
        self.snapshot.section()
    }

    pub fn toggle(&mut self, position: usize) -> Result<Toggled, RowListError> {
        let len = self.snapshot.len();
        let mut item = *self
            .snapshot
            .get(position)
            .ok_or(RowListError::OutOfRange { position, len })?;

        let is_selected = item.toggle();
        let mut next = self.snapshot.clone();
        next.reconfigure_item(item)?;

        let moved_to_front = is_selected && position > 0;
        if moved_to_front {
            let front = next.items()[0].id();
            next.move_item_before(item.id(), front)?;
        }

        let changes = diff(self.snapshot.items(), next.items());
        self.snapshot = next;
        Ok(Toggled {
            id: item.id(),
            is_selected,
            moved_to_front,
            changes,
        })
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Changeset, RowListError> {
        let mut items = self.snapshot.items().to_vec();
        items.shuffle(rng);

        // Same items, new order: take them all out, put them back shuffled
        let mut next = self.snapshot.clone();
        next.delete_items(&self.snapshot.item_identifiers());
        next.append_items(items)?;

        let changes = diff(self.snapshot.items(), next.items());
        self.snapshot = next;
        Ok(changes)
    }
}
