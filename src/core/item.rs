//! # Row Items
//!
//! The value shown on each line of the list.
//!
//! ```text
//! RowItem
//! ├── number: u32        // identity + display text, never changes
//! └── is_selected: bool  // toggled by the user
//! ```
//!
//! Two notions of "same" are in play:
//!
//! - **Identity** (`id()`): the number alone. The diff uses it to track a row
//!   across reorders.
//! - **Content** (`==`): number and flag. A row whose identity survives but
//!   whose content differs gets reloaded.

/// Stable identity of a row across snapshots.
pub type ItemId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowItem {
    pub number: u32,
    pub is_selected: bool,
}

impl RowItem {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            is_selected: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.number
    }

    /// Flip the selection flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_selected = !self.is_selected;
        self.is_selected
    }
}

/// Named grouping of rows. The screen has exactly one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Numbers,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Numbers => "Numbers",
        }
    }
}
