//! Awaitable request path: runs the reducer around one fetch.
//!
//! The TUI spawns fetches in the background and feeds results back through
//! its action channel; callers that simply want to wait for the outcome
//! (headless mode, tests) use `request_fortune` instead. Both paths go
//! through the same `update()`.

use crate::api::{EndpointTarget, FortuneSource};
use crate::core::action::{Action, Effect, update};
use crate::core::state::ViewState;

/// Requests one fortune and applies the outcome to `state`.
///
/// When this returns, the request has settled: either `displayed_text` was
/// replaced or `error_message` was set, and `is_loading` is false unless
/// other requests are still outstanding.
pub async fn request_fortune(
    state: &mut ViewState,
    source: &dyn FortuneSource,
    target: EndpointTarget,
) {
    let effect = update(state, Action::RequestFortune(target));
    let Effect::SpawnFetch(target) = effect else {
        return;
    };

    let outcome = match source.fetch(target).await {
        Ok(text) => Action::FortuneLoaded(text),
        Err(e) => Action::FetchFailed(e),
    };
    update(state, outcome);
}

/// One-shot request from a fresh view, as used by headless mode.
///
/// Returns the displayed text on success, or the inline error message.
pub async fn fetch_once(source: &dyn FortuneSource, target: EndpointTarget) -> Result<String, String> {
    let mut state = ViewState::new(source.base_url());
    request_fortune(&mut state, source, target).await;
    if state.has_error() {
        Err(state.error_message)
    } else {
        Ok(state.displayed_text)
    }
}
