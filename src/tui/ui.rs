use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::RowListView;

const KEY_HINTS: &str = "↑↓ Move  Enter Toggle  s Shuffle  q Quit";

/// Screen regions, computed from the full frame area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [header, _spacer, list, footer] = layout.areas(area);

    let inset = Margin {
        horizontal: 1,
        vertical: 0,
    };
    ScreenLayout {
        header: header.inner(inset),
        list: list.inner(inset),
        footer: footer.inner(inset),
    }
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ShuffleButton,
    Row(usize),
}

/// Hit test a click against the last rendered frame.
pub fn hit_test(tui: &TuiState, column: u16, row: u16) -> Option<Hit> {
    let header = screen_layout(tui.frame_area).header;
    if tui
        .title_bar
        .button_area(header)
        .contains(Position::new(column, row))
    {
        return Some(Hit::ShuffleButton);
    }
    tui.row_list.hit_test(column, row).map(Hit::Row)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    tui.frame_area = frame.area();
    let layout = screen_layout(frame.area());

    tui.title_bar.render(frame, layout.header);

    RowListView::new(
        &mut tui.row_list,
        app.rows.items(),
        app.rows.section(),
        &tui.marker,
        now,
    )
    .render(frame, layout.list);

    draw_footer(frame, layout.footer, &app.status_message);
}

fn draw_footer(frame: &mut Frame, area: Rect, status_message: &str) {
    let line = Line::from(vec![
        Span::raw(status_message),
        Span::raw("  "),
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(line, area);
}
