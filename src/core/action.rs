//! # Actions
//!
//! Everything that can happen on the screen becomes an `Action`.
//! User presses Enter on a row? That's `Action::Toggle(position)`.
//! User clicks the header button? That's `Action::Shuffle`.
//!
//! The `update()` function applies an action to the state and returns an
//! [`Effect`] telling the adapter what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::diff::Changeset;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Toggle the row at this position in the current order.
    Toggle(usize),
    Shuffle,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Animate the transition described by the changeset.
    Animate(Changeset),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Toggle(position) => match app.rows.toggle(position) {
            Ok(toggled) => {
                app.status_message = if toggled.is_selected {
                    format!("Selected {}", toggled.id)
                } else {
                    format!("Deselected {}", toggled.id)
                };
                info!(
                    "Toggled row {} at position {} (selected={}, moved_to_front={})",
                    toggled.id, position, toggled.is_selected, toggled.moved_to_front
                );
                app.last_changes = Some(toggled.changes.clone());
                Effect::Animate(toggled.changes)
            }
            Err(e) => {
                warn!("Ignoring toggle: {}", e);
                Effect::None
            }
        },
        Action::Shuffle => match app.rows.shuffle(&mut app.rng) {
            Ok(changes) => {
                app.status_message = format!("Shuffled ({} rows moved)", changes.moved.len());
                info!("Shuffled rows, {} moved", changes.moved.len());
                app.last_changes = Some(changes.clone());
                Effect::Animate(changes)
            }
            Err(e) => {
                warn!("Shuffle failed: {}", e);
                Effect::None
            }
        },
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_toggle_selects_and_animates() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Toggle(5));

        let Effect::Animate(changes) = effect else {
            panic!("expected Animate, got {:?}", effect);
        };
        assert_eq!(changes.moved, vec![5]);
        assert_eq!(changes.reloaded, vec![5]);
        assert_eq!(app.status_message, "Selected 5");
        assert_eq!(app.last_changes, Some(changes));
    }

    #[test]
    fn test_toggle_twice_reports_deselect() {
        let mut app = test_app();
        update(&mut app, Action::Toggle(5));
        update(&mut app, Action::Toggle(0));

        assert_eq!(app.status_message, "Deselected 5");
        assert_eq!(app.rows.numbers()[0], 5);
        assert!(!app.rows.items()[0].is_selected);
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Toggle(100));
        assert_eq!(effect, Effect::None);
        assert!(app.last_changes.is_none());
        assert_eq!(app.status_message, "Select a row or shuffle");
    }

    #[test]
    fn test_shuffle_animates_moves() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Shuffle);

        let Effect::Animate(changes) = effect else {
            panic!("expected Animate, got {:?}", effect);
        };
        assert!(changes.reloaded.is_empty());
        assert!(app.status_message.starts_with("Shuffled ("));
        assert_eq!(app.rows.len(), 31);
    }

    #[test]
    fn test_same_seed_same_shuffle() {
        let mut first = test_app();
        let mut second = test_app();
        update(&mut first, Action::Shuffle);
        update(&mut second, Action::Shuffle);
        assert_eq!(first.rows, second.rows);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
