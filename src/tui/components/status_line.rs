//! # StatusLine Component
//!
//! Bottom line echoing the resolved API base URL, plus key hints.
//!
//! Stateless: the URL comes from `ViewState` and never changes after
//! start-up.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct StatusLine {
    pub base_url: String,
}

impl StatusLine {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn text(&self) -> String {
        format!("API: {}", self.base_url)
    }
}

impl Component for StatusLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.text(), Style::default().fg(Color::Gray)),
            Span::styled(
                "  ·  r Random  n Next  q Quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_status_line_text() {
        let status = StatusLine::new("http://localhost:8000".to_string());
        assert_eq!(status.text(), "API: http://localhost:8000");
    }

    #[test]
    fn test_status_line_renders_url() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut status = StatusLine::new("http://backend:8000".to_string());

        terminal.draw(|f| status.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("API: http://backend:8000"));
    }
}
