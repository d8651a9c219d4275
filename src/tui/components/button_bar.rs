//! # ButtonBar Component
//!
//! The "Random" and "Next" buttons.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ButtonBarState` lives in `TuiState` (focus, disabled prop)
//! - `ButtonBar` is created each frame with borrowed state
//!
//! While `disabled` is set both buttons read "Loading..." and swallow
//! presses. That is the only thing stopping overlapping user requests; the
//! core reducer does not refuse them.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::api::EndpointTarget;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const LOADING_LABEL: &str = "Loading...";

const BUTTON_WIDTH: u16 = 16;
const BUTTON_GAP: u16 = 2;

/// Events emitted by the button bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed(EndpointTarget),
}

/// Persistent state for the button bar.
pub struct ButtonBarState {
    pub focused: EndpointTarget,
    /// Prop synced from `ViewState::is_loading` each loop iteration.
    pub disabled: bool,
}

impl Default for ButtonBarState {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonBarState {
    pub fn new() -> Self {
        Self {
            focused: EndpointTarget::Random,
            disabled: false,
        }
    }

    /// Press a button directly (keyboard shortcut or mouse click).
    /// Moves focus to it; emits nothing while disabled.
    pub fn press(&mut self, target: EndpointTarget) -> Option<ButtonEvent> {
        self.focused = target;
        if self.disabled {
            log::debug!("Ignoring {:?} press while loading", target);
            return None;
        }
        Some(ButtonEvent::Pressed(target))
    }

    fn cycle_focus(&mut self) {
        self.focused = match self.focused {
            EndpointTarget::Random => EndpointTarget::Next,
            EndpointTarget::Next => EndpointTarget::Random,
        };
    }

    /// Label a button currently shows.
    pub fn label(&self, target: EndpointTarget) -> &'static str {
        if self.disabled {
            LOADING_LABEL
        } else {
            target.label()
        }
    }
}

impl EventHandler for ButtonBarState {
    type Event = ButtonEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ButtonEvent> {
        match event {
            TuiEvent::PressRandom => self.press(EndpointTarget::Random),
            TuiEvent::PressNext => self.press(EndpointTarget::Next),
            TuiEvent::Activate => self.press(self.focused),
            // Two buttons: next and previous are the same move
            TuiEvent::FocusNext | TuiEvent::FocusPrev => {
                self.cycle_focus();
                None
            }
            _ => None,
        }
    }
}

/// Screen areas of the two buttons inside `area`, in `EndpointTarget::ALL` order.
pub fn button_areas(area: Rect) -> [Rect; 2] {
    Layout::horizontal([Constraint::Length(BUTTON_WIDTH), Constraint::Length(BUTTON_WIDTH)])
        .flex(Flex::Center)
        .spacing(BUTTON_GAP)
        .areas(area)
}

/// Transient render wrapper for the button bar.
pub struct ButtonBar<'a> {
    state: &'a ButtonBarState,
}

impl<'a> ButtonBar<'a> {
    pub fn new(state: &'a ButtonBarState) -> Self {
        Self { state }
    }

    /// Rows the bar occupies (bordered buttons).
    pub const HEIGHT: u16 = 3;
}

impl Component for ButtonBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (target, button_area) in EndpointTarget::ALL.into_iter().zip(button_areas(area)) {
            let accent = match target {
                EndpointTarget::Random => Color::Cyan,
                EndpointTarget::Next => Color::Green,
            };
            let style = if self.state.disabled {
                Style::default().fg(Color::DarkGray)
            } else if self.state.focused == target {
                Style::default()
                    .fg(accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(accent)
            };

            let button = Paragraph::new(self.state.label(target))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::bordered().border_style(style));
            frame.render_widget(button, button_area);
        }
    }
}
