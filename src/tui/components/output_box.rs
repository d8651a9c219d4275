//! # OutputBox Component
//!
//! Read-only multi-line box showing the last fortune, with the inline error
//! line directly underneath.
//!
//! Purely presentational. The box shows a dimmed placeholder while the text
//! is empty; the error line renders only while there is an error.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::tui::component::Component;

pub const PLACEHOLDER: &str = "Press a button to fetch data from the API...";

/// Visible text rows inside the box.
pub const TEXT_ROWS: u16 = 6;

pub struct OutputBox<'a> {
    /// Displayed fortune (may be empty)
    pub text: &'a str,
    /// Inline error message (empty = none)
    pub error: &'a str,
}

impl<'a> OutputBox<'a> {
    pub fn new(text: &'a str, error: &'a str) -> Self {
        Self { text, error }
    }

    /// Box rows (text + borders) plus the error line.
    pub const fn height() -> u16 {
        TEXT_ROWS + 2 + 1
    }
}

impl Component for OutputBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [box_area, error_area] =
            Layout::vertical([Constraint::Length(TEXT_ROWS + 2), Constraint::Length(1)])
                .areas(area);

        let block = Block::bordered()
            .title(" Response ")
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = if self.text.is_empty() {
            Paragraph::new(PLACEHOLDER).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Paragraph::new(self.text)
        };

        frame.render_widget(
            paragraph.block(block).wrap(Wrap { trim: false }),
            box_area,
        );

        if !self.error.is_empty() {
            let error = Paragraph::new(self.error)
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
            frame.render_widget(error, error_area);
        }
    }
}
