use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::api::EndpointTarget;
use crate::core::state::ViewState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::button_bar::button_areas;
use crate::tui::components::{ButtonBar, Header, OutputBox, StatusLine};

const CARD_MAX_WIDTH: u16 = 72;

/// Screen areas of every part of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub card: Rect,
    pub header: Rect,
    pub output: Rect,
    pub buttons: Rect,
    pub status: Rect,
}

/// Centers the card in `frame_area` and splits it into sections.
pub fn card_layout(frame_area: Rect) -> CardLayout {
    use Constraint::Length;

    let inner_height =
        Header::HEIGHT + 1 + OutputBox::height() + 1 + ButtonBar::HEIGHT + 1 + 1;
    let card_height = inner_height + 2;

    let [card] = Layout::vertical([Length(card_height)])
        .flex(Flex::Center)
        .areas(frame_area);
    let [card] = Layout::horizontal([Length(CARD_MAX_WIDTH.min(frame_area.width))])
        .flex(Flex::Center)
        .areas(card);

    let inner = Block::bordered().inner(card);
    let [header, _, output, _, buttons, _, status] = Layout::vertical([
        Length(Header::HEIGHT),
        Length(1),
        Length(OutputBox::height()),
        Length(1),
        Length(ButtonBar::HEIGHT),
        Length(1),
        Length(1),
    ])
    .areas(inner);

    CardLayout {
        card,
        header,
        output,
        buttons,
        status,
    }
}

pub fn draw_ui(frame: &mut Frame, state: &ViewState, tui: &TuiState) {
    let layout = card_layout(frame.area());

    frame.render_widget(
        Block::bordered().border_style(Style::default().fg(Color::DarkGray)),
        layout.card,
    );

    Header::default().render(frame, layout.header);
    OutputBox::new(&state.displayed_text, &state.error_message).render(frame, layout.output);
    ButtonBar::new(&tui.buttons).render(frame, layout.buttons);
    StatusLine::new(state.base_url.clone()).render(frame, layout.status);
}

/// Hit test: which button (if any) is under the given screen cell.
pub fn hit_test_button(column: u16, row: u16, frame_area: Rect) -> Option<EndpointTarget> {
    let layout = card_layout(frame_area);
    let position = ratatui::layout::Position::new(column, row);
    EndpointTarget::ALL
        .into_iter()
        .zip(button_areas(layout.buttons))
        .find(|(_, area)| area.contains(position))
        .map(|(target, _)| target)
}
