//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `Header`: heading and subtitle
//! - `OutputBox`: read-only fortune box with the inline error line
//! - `StatusLine`: resolved API base URL
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `ButtonBar`: the Random / Next buttons; `ButtonBarState` keeps focus
//!   and the disabled prop, and emits `ButtonEvent`s
//!
//! Components receive external data as props, never by reaching into
//! `ViewState` themselves:
//!
//! ```rust,ignore
//! OutputBox::new(&state.displayed_text, &state.error_message).render(frame, area);
//! ```

pub mod button_bar;
pub mod header;
pub mod output_box;
pub mod status_line;

pub use button_bar::{ButtonBar, ButtonBarState, ButtonEvent};
pub use header::Header;
pub use output_box::OutputBox;
pub use status_line::StatusLine;
