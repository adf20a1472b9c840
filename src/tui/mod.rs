//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a changeset highlight is fading): draws every ~40ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{RowListEvent, RowListState, TitleBar};
use crate::tui::event::{Polled, TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::Hit;

const ANIMATING_POLL: Duration = Duration::from_millis(40);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub row_list: RowListState,
    pub title_bar: TitleBar,
    pub marker: String,
    pub transition_duration: Duration,
    /// Full frame area of the last draw, for hit testing.
    pub frame_area: Rect,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig, row_count: usize) -> Self {
        Self {
            row_list: RowListState::new(row_count),
            title_bar: TitleBar::new(config.title.clone(), config.shuffle_label.clone()),
            marker: config.marker.clone(),
            transition_duration: config.transition,
            frame_area: Rect::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config, app.rows.len());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Mouse capture unavailable: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        if tui.row_list.expire_transition(now) {
            needs_redraw = true;
        }
        let animating = tui.row_list.is_animating();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui, now))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATING_POLL } else { IDLE_POLL };

        // Process first event + drain ALL pending events before next draw
        let first = poll_event_timeout(timeout)?;
        let drained = drain_events(first, poll_event_immediate, app, tui)?;
        if drained.quit {
            info!("Quitting");
            return Ok(());
        }
        needs_redraw |= drained.handled > 0;
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Drained {
    handled: usize,
    quit: bool,
}

/// Dispatch `first` and everything `next` yields until the queue is idle.
/// Unbound input is skipped, it does not end the drain.
fn drain_events<F>(
    first: Polled,
    mut next: F,
    app: &mut App,
    tui: &mut TuiState,
) -> std::io::Result<Drained>
where
    F: FnMut() -> std::io::Result<Polled>,
{
    let mut drained = Drained::default();
    let mut polled = first;
    loop {
        match polled {
            Polled::Idle => return Ok(drained),
            Polled::Unbound => {}
            Polled::Event(event) => {
                drained.handled += 1;
                if dispatch(event, app, tui) {
                    drained.quit = true;
                    return Ok(drained);
                }
            }
        }
        polled = next()?;
    }
}

/// Route one event. Returns true when the app should quit.
fn dispatch(event: TuiEvent, app: &mut App, tui: &mut TuiState) -> bool {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => false,
        TuiEvent::Quit => apply(Action::Quit, app, tui),
        TuiEvent::Shuffle => apply(Action::Shuffle, app, tui),
        // Clicks never move the cursor: the tap highlight is dropped at once
        TuiEvent::MouseClick(column, row) => match ui::hit_test(tui, column, row) {
            Some(Hit::ShuffleButton) => apply(Action::Shuffle, app, tui),
            Some(Hit::Row(position)) => apply(Action::Toggle(position), app, tui),
            None => false,
        },
        other => match tui.row_list.handle_event(&other) {
            Some(RowListEvent::Toggle(position)) => apply(Action::Toggle(position), app, tui),
            None => false,
        },
    }
}

fn apply(action: Action, app: &mut App, tui: &mut TuiState) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::Animate(changes) => {
            tui.row_list
                .start_transition(changes, tui.transition_duration);
            false
        }
        Effect::None => false,
    }
}
