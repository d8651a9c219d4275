//! # Actions
//!
//! Everything that can happen in the viewer becomes an `Action`.
//! User presses Random? That's `Action::RequestFortune(EndpointTarget::Random)`.
//! Backend answers? That's `Action::FortuneLoaded(text)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the caller what I/O to perform.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, warn};

use crate::api::{EndpointTarget, FetchError};
use crate::core::state::ViewState;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A button was pressed (or a request was triggered programmatically).
    RequestFortune(EndpointTarget),
    /// A request settled successfully with the text to display.
    FortuneLoaded(String),
    /// A request settled with an error.
    FetchFailed(FetchError),
    Quit,
}

/// Side effect the caller must carry out after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue the HTTP request for this target and report back with
    /// `FortuneLoaded` or `FetchFailed`.
    SpawnFetch(EndpointTarget),
    Quit,
}

pub fn update(state: &mut ViewState, action: Action) -> Effect {
    match action {
        Action::RequestFortune(target) => {
            state.in_flight += 1;
            state.is_loading = true;
            state.error_message.clear();
            debug!("Requesting {:?} ({} in flight)", target, state.in_flight);
            Effect::SpawnFetch(target)
        }
        Action::FortuneLoaded(text) => {
            settle(state);
            state.displayed_text = text;
            state.error_message.clear();
            Effect::None
        }
        Action::FetchFailed(err) => {
            settle(state);
            warn!("Fetch failed: {}", err);
            state.error_message = format!("Failed to fetch: {err}");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn settle(state: &mut ViewState) {
    state.in_flight = state.in_flight.saturating_sub(1);
    state.is_loading = state.in_flight > 0;
}
