//! Terminal token explorer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: explorer state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   tokens, diagnostics, status bar)
//! - **[`theme`]**: colour palette shared by all panes
//!
//! Construct an [`App`] from a scan and a check of the same text and call
//! [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
