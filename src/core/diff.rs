//! # Snapshot Diffing
//!
//! Reconciles two list states into the smallest set of visual operations:
//!
//! - **inserted / deleted**: identity present on only one side
//! - **reloaded**: identity on both sides, content changed (selection flag)
//! - **moved**: rows that have to travel so the old order becomes the new one
//!
//! ## Minimal moves
//!
//! Take the common rows in *new* order and write down their *old* positions.
//! Any increasing run in that sequence is already in relative order and can
//! stay put; the longest such run keeps the most rows still. Everything
//! outside it is a move.
//!
//! ```text
//! old:  0 1 2 3 4 5 6      new: 5 0 1 2 3 4 6
//! old positions in new order:   5 0 1 2 3 4 6
//! longest increasing run:         0 1 2 3 4 6
//! moved:                        5
//! ```

use std::collections::{HashMap, HashSet};

use crate::core::item::{ItemId, RowItem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changeset {
    /// New rows, in new order.
    pub inserted: Vec<ItemId>,
    /// Removed rows, in old order.
    pub deleted: Vec<ItemId>,
    /// Rows that change position, in new order.
    pub moved: Vec<ItemId>,
    /// Rows whose content changed, in new order.
    pub reloaded: Vec<ItemId>,
}

impl Changeset {
    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
            && self.deleted.is_empty()
            && self.moved.is_empty()
            && self.reloaded.is_empty()
    }

    /// True if the row is animated by this changeset in any way.
    pub fn touches(&self, id: ItemId) -> bool {
        self.inserted.contains(&id)
            || self.moved.contains(&id)
            || self.reloaded.contains(&id)
            || self.deleted.contains(&id)
    }
}

pub fn diff(old: &[RowItem], new: &[RowItem]) -> Changeset {
    let old_positions: HashMap<ItemId, usize> = old
        .iter()
        .enumerate()
        .map(|(index, item)| (item.id(), index))
        .collect();
    let new_ids: HashSet<ItemId> = new.iter().map(RowItem::id).collect();

    let mut changes = Changeset::default();
    // (id, old position) for rows present on both sides, in new order
    let mut common: Vec<(ItemId, usize)> = Vec::with_capacity(new.len());

    for item in new {
        match old_positions.get(&item.id()) {
            Some(&old_index) => {
                if old[old_index] != *item {
                    changes.reloaded.push(item.id());
                }
                common.push((item.id(), old_index));
            }
            None => changes.inserted.push(item.id()),
        }
    }

    changes.deleted = old
        .iter()
        .map(RowItem::id)
        .filter(|id| !new_ids.contains(id))
        .collect();

    let sequence: Vec<usize> = common.iter().map(|&(_, old_index)| old_index).collect();
    let stationary = longest_increasing_run(&sequence);
    changes.moved = common
        .iter()
        .zip(stationary)
        .filter(|&(_, keep)| !keep)
        .map(|(&(id, _), _)| id)
        .collect();

    changes
}

/// Marks which entries of `sequence` belong to one longest strictly
/// increasing subsequence. Values must be distinct.
fn longest_increasing_run(sequence: &[usize]) -> Vec<bool> {
    // tails[k] = index of the smallest tail of any increasing run of length k + 1
    let mut tails: Vec<usize> = Vec::new();
    let mut previous: Vec<Option<usize>> = vec![None; sequence.len()];

    for (index, &value) in sequence.iter().enumerate() {
        let slot = tails.partition_point(|&tail| sequence[tail] < value);
        if slot > 0 {
            previous[index] = Some(tails[slot - 1]);
        }
        if slot == tails.len() {
            tails.push(index);
        } else {
            tails[slot] = index;
        }
    }

    let mut keep = vec![false; sequence.len()];
    let mut cursor = tails.last().copied();
    while let Some(index) = cursor {
        keep[index] = true;
        cursor = previous[index];
    }
    keep
}
