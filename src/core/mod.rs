//! # Core Application Logic
//!
//! The viewer's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewState            │
//!                    │  • Action / Effect      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │  Headless  │
//!          │  Adapter   │                │  (--once)  │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ViewState`, everything the viewer shows
//! - [`action`]: `Action` / `Effect` and the `update()` reducer
//! - [`viewer`]: awaitable request path built on the reducer
//! - [`config`]: config file, env vars and CLI overrides

pub mod action;
pub mod config;
pub mod state;
pub mod viewer;
