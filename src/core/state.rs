//! # View State
//!
//! Everything the fortune viewer shows, in one place. No TUI types here;
//! presentation state (button focus and the like) lives in the `tui` module.
//!
//! ```text
//! ViewState
//! ├── displayed_text: String   // last fortune shown in the output box
//! ├── is_loading: bool         // a request is in flight
//! ├── error_message: String    // inline error, empty when none
//! ├── base_url: String         // resolved API prefix, shown read-only
//! └── in_flight: usize         // outstanding requests
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub displayed_text: String,
    pub is_loading: bool,
    pub error_message: String,
    pub base_url: String,
    /// Requests issued but not yet settled. `is_loading` mirrors `in_flight > 0`.
    pub in_flight: usize,
}

impl ViewState {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            displayed_text: String::new(),
            is_loading: false,
            error_message: String::new(),
            base_url: base_url.into(),
            in_flight: 0,
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_state_new_defaults() {
        let state = ViewState::new("http://localhost:8000");
        assert!(state.displayed_text.is_empty());
        assert!(!state.is_loading);
        assert!(!state.has_error());
        assert_eq!(state.base_url, "http://localhost:8000");
        assert_eq!(state.in_flight, 0);
    }
}
