//! # TitleBar Component
//!
//! Header line: screen title on the left, the shuffle button on the right.
//!
//! ```text
//! Numbers                                         [ Shuffle ]
//! ```
//!
//! ## Hit Testing
//!
//! The button is the only clickable thing in the header. Its rectangle is a
//! pure function of the header area and the label width, so the event loop
//! can hit-test a click with [`TitleBar::button_area`] without rendering.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

pub struct TitleBar {
    pub title: String,
    pub shuffle_label: String,
}

impl TitleBar {
    pub fn new(title: String, shuffle_label: String) -> Self {
        Self {
            title,
            shuffle_label,
        }
    }

    fn button_text(&self) -> String {
        format!("[ {} ]", self.shuffle_label)
    }

    /// Where the shuffle button lands inside `area`, right-aligned.
    /// Clamped to the area on terminals narrower than the label.
    pub fn button_area(&self, area: Rect) -> Rect {
        let width = (self.button_text().width() as u16).min(area.width);
        Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: area.height.min(1),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let button = self.button_area(area);

        let title_width = area.width.saturating_sub(button.width + 1);
        let title_area = Rect {
            width: title_width,
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(
            Span::styled(
                self.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            title_area,
        );

        frame.render_widget(
            Line::from(Span::styled(
                self.button_text(),
                Style::default().fg(Color::Cyan),
            )),
            button,
        );
    }
}
