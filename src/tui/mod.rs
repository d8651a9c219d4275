//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the viewer,
//! and translates keyboard and mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Flow
//!
//! A button press goes through `update()`, which marks the view as loading
//! and returns `Effect::SpawnFetch`. The fetch runs on a tokio task and
//! reports back over an mpsc channel as `FortuneLoaded` / `FetchFailed`,
//! which the loop drains between frames. The loop itself never awaits the
//! network.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws when an event arrived, a
//! background result was applied, or on the first frame.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::api::{EndpointTarget, FortuneSource, HttpFortuneSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::ViewState;
use crate::tui::component::EventHandler;
use crate::tui::components::{ButtonBarState, ButtonEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core view state)
pub struct TuiState {
    pub buttons: ButtonBarState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            buttons: ButtonBarState::new(),
        }
    }

    /// Copy props derived from the view state into components.
    fn sync(&mut self, state: &ViewState) {
        self.buttons.disabled = state.is_loading;
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// Run the viewer against the HTTP backend named in `config`.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn FortuneSource> = Arc::new(HttpFortuneSource::new(config.base_url));
    run_with_source(source)
}

/// Run the viewer against any fortune source. Must be called from within a
/// tokio runtime; fetches are spawned onto it.
pub fn run_with_source(source: Arc<dyn FortuneSource>) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, source));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, source: Arc<dyn FortuneSource>) -> std::io::Result<()> {
    let mut state = ViewState::new(source.base_url());
    let mut tui = TuiState::new();

    // Channel for actions from background fetch tasks
    let (tx, rx) = mpsc::channel();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &state, &tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let pressed = match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => continue,
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if update(&mut state, Action::Quit) == Effect::Quit {
                        should_quit = true;
                        break;
                    }
                    continue;
                }
                TuiEvent::MouseClick(column, row) => {
                    let frame_area = terminal.get_frame().area();
                    ui::hit_test_button(column, row, frame_area)
                        .and_then(|target| tui.buttons.press(target))
                }
                other => tui.buttons.handle_event(&other),
            };

            if let Some(ButtonEvent::Pressed(target)) = pressed {
                let effect = update(&mut state, Action::RequestFortune(target));
                tui.sync(&state);
                if let Effect::SpawnFetch(target) = effect {
                    spawn_fetch(source.clone(), target, tx.clone());
                }
            }
        }

        if should_quit {
            info!("Quit requested");
            break;
        }

        // Apply results from background fetches
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut state, action);
            tui.sync(&state);
            if effect == Effect::Quit {
                return Ok(());
            }
        }
    }

    Ok(())
}

fn spawn_fetch(source: Arc<dyn FortuneSource>, target: EndpointTarget, tx: mpsc::Sender<Action>) {
    info!("Spawning {:?} fetch", target);
    tokio::spawn(async move {
        let action = match source.fetch(target).await {
            Ok(text) => {
                debug!("Fetched {} bytes for {:?}", text.len(), target);
                Action::FortuneLoaded(text)
            }
            Err(e) => Action::FetchFailed(e),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver {:?} result: receiver dropped", target);
        }
    });
}
