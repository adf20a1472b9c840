use picklist::core::action::{Action, Effect, update};
use picklist::core::diff::diff;
use picklist::core::rows::{ROW_COUNT, RowList};
use picklist::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

fn ascending() -> Vec<u32> {
    (0..ROW_COUNT).collect()
}

fn flags(list: &RowList) -> Vec<(u32, bool)> {
    let mut pairs: Vec<(u32, bool)> = list
        .items()
        .iter()
        .map(|item| (item.number, item.is_selected))
        .collect();
    pairs.sort_unstable();
    pairs
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_select_and_deselect_row_five() {
    let mut app = App::new(Some(1));
    assert_eq!(app.rows.numbers(), ascending());

    // Toggle the row showing 5 (at position 5 initially)
    let position = app.rows.position_of(5).unwrap();
    update(&mut app, Action::Toggle(position));

    let mut expected = vec![5, 0, 1, 2, 3, 4];
    expected.extend(6..ROW_COUNT);
    assert_eq!(app.rows.numbers(), expected);
    assert!(app.rows.get(0).unwrap().is_selected);
    assert_eq!(app.rows.items().iter().filter(|i| i.is_selected).count(), 1);

    // Toggle 5 again: it is deselected and, being a deselect, does not move
    let position = app.rows.position_of(5).unwrap();
    assert_eq!(position, 0);
    update(&mut app, Action::Toggle(position));

    assert_eq!(app.rows.numbers(), expected);
    assert!(app.rows.items().iter().all(|item| !item.is_selected));
}

#[test]
fn test_selected_rows_stack_most_recent_first() {
    let mut app = App::new(Some(1));
    for number in [10, 20, 30] {
        let position = app.rows.position_of(number).unwrap();
        update(&mut app, Action::Toggle(position));
    }
    assert_eq!(&app.rows.numbers()[..4], &[30, 20, 10, 0]);
}

#[test]
fn test_deselect_anywhere_keeps_order() {
    let mut app = App::new(Some(3));
    for number in [4, 8, 15, 16, 23] {
        let position = app.rows.position_of(number).unwrap();
        update(&mut app, Action::Toggle(position));
    }
    update(&mut app, Action::Shuffle);

    for number in [4, 8, 15, 16, 23] {
        let order = app.rows.numbers();
        let position = app.rows.position_of(number).unwrap();
        let effect = update(&mut app, Action::Toggle(position));

        assert_eq!(app.rows.numbers(), order);
        let Effect::Animate(changes) = effect else {
            panic!("expected Animate");
        };
        assert!(changes.moved.is_empty());
        assert_eq!(changes.reloaded, vec![number]);
    }
}

#[test]
fn test_shuffle_preserves_rows_and_flags() {
    let mut app = App::new(Some(99));
    update(&mut app, Action::Toggle(12));
    update(&mut app, Action::Toggle(30));
    let before = flags(&app.rows);

    for _ in 0..20 {
        update(&mut app, Action::Shuffle);
        assert_eq!(app.rows.len(), ROW_COUNT as usize);
        assert_eq!(flags(&app.rows), before);
    }
}

#[test]
fn test_shuffle_changeset_replays_to_new_order() {
    let mut app = App::new(Some(5));
    let before = app.rows.items().to_vec();
    update(&mut app, Action::Shuffle);

    let changes = diff(&before, app.rows.items());
    assert_eq!(app.last_changes.as_ref(), Some(&changes));

    // Rows not reported as moved are still in their old relative order
    let still: Vec<u32> = app
        .rows
        .numbers()
        .into_iter()
        .filter(|n| !changes.moved.contains(n))
        .collect();
    assert!(still.windows(2).all(|pair| pair[0] < pair[1]));
}
