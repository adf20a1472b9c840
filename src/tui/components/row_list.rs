//! # RowList Component
//!
//! Scrollable, bordered list of numbered rows with a keyboard cursor and a
//! short highlight on rows that just changed.
//!
//! ## Architecture
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RowListState` lives in `TuiState` (cursor, scroll offset, transition)
//! - `RowListView` is created each frame with borrowed state and rows
//!
//! ## Transitions
//!
//! A terminal cannot slide rows around, so a diff-animated update is shown as
//! a fading highlight on every row the [`Changeset`] touches:
//!
//! ```text
//! progress  0.0 ─────────── 0.5 ─────────── 1.0
//! style     bold + colour   colour          plain
//! ```
//!
//! Moved rows are yellow, rows that only changed their flag are green.

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, HighlightSpacing, List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use crate::core::diff::Changeset;
use crate::core::item::{RowItem, Section};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const HIGHLIGHT_SYMBOL: &str = "› ";

/// A changeset being animated.
#[derive(Debug, Clone)]
pub struct Transition {
    pub changes: Changeset,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    pub fn new(changes: Changeset, started_at: Instant, duration: Duration) -> Self {
        Self {
            changes,
            started_at,
            duration,
        }
    }

    /// 0.0 at the start, 1.0 once the duration has elapsed.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Style for a row under this transition, `None` when it is not animated.
    pub fn style_for(&self, item: &RowItem, now: Instant) -> Option<Style> {
        let progress = self.progress(now);
        if progress >= 1.0 || !self.changes.touches(item.id()) {
            return None;
        }
        let color = if self.changes.moved.contains(&item.id()) {
            Color::Yellow
        } else {
            Color::Green
        };
        let style = Style::default().fg(color);
        Some(if progress < 0.5 {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        })
    }
}

/// Persistent state for the row list.
pub struct RowListState {
    pub list_state: ListState,
    /// Number of rows; fixed for the screen's lifetime.
    pub len: usize,
    /// Inner list area from the last render, for hit testing and paging.
    pub viewport: Rect,
    pub transition: Option<Transition>,
}

impl RowListState {
    pub fn new(len: usize) -> Self {
        let mut list_state = ListState::default();
        if len > 0 {
            list_state.select(Some(0));
        }
        Self {
            list_state,
            len,
            viewport: Rect::default(),
            transition: None,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let current = self.cursor().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, self.len as isize - 1);
        self.list_state.select(Some(target as usize));
    }

    fn page_size(&self) -> isize {
        (self.viewport.height as isize).max(1)
    }

    /// Map a screen coordinate to a row position, if it lands on a row.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if !self.viewport.contains(Position::new(column, row)) {
            return None;
        }
        let position = self.list_state.offset() + (row - self.viewport.y) as usize;
        (position < self.len).then_some(position)
    }

    pub fn start_transition(&mut self, changes: Changeset, duration: Duration) {
        if changes.is_empty() {
            self.transition = None;
            return;
        }
        self.transition = Some(Transition::new(changes, Instant::now(), duration));
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Drop a finished transition. Returns true if one was dropped, meaning
    /// one more frame is needed to clear its highlight.
    pub fn expire_transition(&mut self, now: Instant) -> bool {
        if self.transition.as_ref().is_some_and(|t| t.is_finished(now)) {
            self.transition = None;
            return true;
        }
        false
    }
}

/// Events emitted by the row list.
#[derive(Debug, PartialEq, Eq)]
pub enum RowListEvent {
    Toggle(usize),
}

impl EventHandler for RowListState {
    type Event = RowListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<RowListEvent> {
        match event {
            TuiEvent::CursorUp => self.move_cursor(-1),
            TuiEvent::CursorDown => self.move_cursor(1),
            TuiEvent::PageUp => self.move_cursor(-self.page_size()),
            TuiEvent::PageDown => self.move_cursor(self.page_size()),
            TuiEvent::Home => self.move_cursor(-(self.len as isize)),
            TuiEvent::End => self.move_cursor(self.len as isize),
            TuiEvent::Toggle => return self.cursor().map(RowListEvent::Toggle),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the row list.
pub struct RowListView<'a> {
    state: &'a mut RowListState,
    rows: &'a [RowItem],
    section: Section,
    marker: &'a str,
    now: Instant,
}

impl<'a> RowListView<'a> {
    pub fn new(
        state: &'a mut RowListState,
        rows: &'a [RowItem],
        section: Section,
        marker: &'a str,
        now: Instant,
    ) -> Self {
        Self {
            state,
            rows,
            section,
            marker,
            now,
        }
    }

    /// One row: number on the left, marker flush right when selected.
    fn row_line(&self, item: &RowItem, width: usize) -> Line<'static> {
        let number = item.number.to_string();
        if !item.is_selected {
            return Line::from(number);
        }
        let gap = width
            .saturating_sub(number.width())
            .saturating_sub(self.marker.width())
            .max(1);
        Line::from(format!("{number}{}{}", " ".repeat(gap), self.marker))
    }
}

impl Component for RowListView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.section.title()));

        self.state.viewport = block.inner(area);
        let text_width = (self.state.viewport.width as usize).saturating_sub(HIGHLIGHT_SYMBOL.width());

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|item| {
                let style = self
                    .state
                    .transition
                    .as_ref()
                    .and_then(|t| t.style_for(item, self.now))
                    .unwrap_or_default();
                ListItem::new(self.row_line(item, text_width)).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rows::RowList;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &mut RowListState, rows: &[RowItem], width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let now = Instant::now();
        terminal
            .draw(|f| {
                RowListView::new(state, rows, Section::Numbers, "✓", now).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_renders_numbers_and_marker() {
        let mut rows = RowList::new();
        rows.toggle(3).unwrap();
        let mut state = RowListState::new(rows.len());

        let lines = render(&mut state, rows.items(), 20, 8);

        assert!(lines[0].contains("Numbers"));
        // First row is the freshly selected 3, with the marker
        assert!(lines[1].contains('3'));
        assert!(lines[1].contains('✓'));
        assert!(lines[2].contains('0'));
        assert!(!lines[2].contains('✓'));
    }

    #[test]
    fn test_render_caches_viewport() {
        let rows = RowList::new();
        let mut state = RowListState::new(rows.len());
        render(&mut state, rows.items(), 20, 8);
        assert_eq!(state.viewport, Rect::new(1, 1, 18, 6));
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut state = RowListState::new(31);
        state.viewport = Rect::new(1, 1, 18, 10);

        assert_eq!(state.handle_event(&TuiEvent::CursorUp), None);
        assert_eq!(state.cursor(), Some(0));

        state.handle_event(&TuiEvent::PageDown);
        assert_eq!(state.cursor(), Some(10));

        state.handle_event(&TuiEvent::End);
        assert_eq!(state.cursor(), Some(30));

        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.cursor(), Some(30));

        state.handle_event(&TuiEvent::Home);
        assert_eq!(state.cursor(), Some(0));
    }

    #[test]
    fn test_toggle_emits_cursor_position() {
        let mut state = RowListState::new(31);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Toggle),
            Some(RowListEvent::Toggle(2))
        );
    }

    #[test]
    fn test_hit_test_accounts_for_scroll() {
        let rows = RowList::new();
        let mut state = RowListState::new(rows.len());
        state.handle_event(&TuiEvent::End);
        render(&mut state, rows.items(), 20, 8);

        // 6 visible rows, cursor on the last row: rows 25..=30 are shown
        assert_eq!(state.list_state.offset(), 25);
        assert_eq!(state.hit_test(5, 1), Some(25));
        assert_eq!(state.hit_test(5, 6), Some(30));
        // Border and outside
        assert_eq!(state.hit_test(0, 3), None);
        assert_eq!(state.hit_test(5, 7), None);
    }

    #[test]
    fn test_hit_test_below_last_row() {
        let rows = RowList::new();
        let mut state = RowListState::new(rows.len());
        state.viewport = Rect::new(1, 1, 18, 40);
        assert_eq!(state.hit_test(3, 31), Some(30));
        assert_eq!(state.hit_test(3, 32), None);
    }

    #[test]
    fn test_transition_styles_touched_rows_and_fades() {
        let changes = Changeset {
            moved: vec![5],
            reloaded: vec![5, 9],
            ..Default::default()
        };
        let start = Instant::now();
        let transition = Transition::new(changes, start, Duration::from_millis(400));

        let moved = RowItem::new(5);
        let reloaded = RowItem::new(9);
        let untouched = RowItem::new(1);

        let early = transition.style_for(&moved, start).unwrap();
        assert_eq!(early.fg, Some(Color::Yellow));
        assert!(early.add_modifier.contains(Modifier::BOLD));

        let late = start + Duration::from_millis(300);
        let faded = transition.style_for(&moved, late).unwrap();
        assert!(!faded.add_modifier.contains(Modifier::BOLD));

        assert_eq!(
            transition.style_for(&reloaded, start).unwrap().fg,
            Some(Color::Green)
        );
        assert!(transition.style_for(&untouched, start).is_none());

        let done = start + Duration::from_millis(400);
        assert!(transition.is_finished(done));
        assert!(transition.style_for(&moved, done).is_none());
    }

    #[test]
    fn test_zero_duration_transition_is_finished() {
        let transition = Transition::new(
            Changeset {
                moved: vec![1],
                ..Default::default()
            },
            Instant::now(),
            Duration::ZERO,
        );
        assert!(transition.is_finished(Instant::now()));
    }

    #[test]
    fn test_expire_transition() {
        let mut state = RowListState::new(31);
        state.start_transition(
            Changeset {
                moved: vec![3],
                ..Default::default()
            },
            Duration::ZERO,
        );
        assert!(state.is_animating());
        assert!(state.expire_transition(Instant::now()));
        assert!(!state.is_animating());
        assert!(!state.expire_transition(Instant::now()));
    }

    #[test]
    fn test_empty_changeset_does_not_animate() {
        let mut state = RowListState::new(31);
        state.start_transition(Changeset::default(), Duration::from_secs(1));
        assert!(!state.is_animating());
    }
}
