//! # Application State
//!
//! Core business state for Picklist. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── rows: RowList                    // the 31 numbered rows
//! ├── status_message: String           // footer text
//! ├── last_changes: Option<Changeset>  // what the last action changed
//! └── rng: StdRng                      // shuffle randomness
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::config::ResolvedConfig;
use crate::core::diff::Changeset;
use crate::core::rows::RowList;

pub struct App {
    pub rows: RowList,
    pub status_message: String,
    /// Changeset of the most recent action, `None` before the first one.
    pub last_changes: Option<Changeset>,
    pub(crate) rng: StdRng,
}

impl App {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rows: RowList::new(),
            status_message: String::from("Select a row or shuffle"),
            last_changes: None,
            rng,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.seed)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Select a row or shuffle");
        assert_eq!(app.rows.len(), 31);
        assert!(app.last_changes.is_none());
    }
}
