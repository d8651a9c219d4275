//! # Header Component
//!
//! Heading and subtitle at the top of the card.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const TITLE: &str = "Vibe Code App";
pub const SUBTITLE: &str = "Automation Testing Demo";

pub struct Header {
    pub title: String,
    pub subtitle: String,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
        }
    }
}

impl Header {
    /// Lines the header occupies.
    pub const HEIGHT: u16 = 2;
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.title.as_str(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.subtitle.as_str(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
