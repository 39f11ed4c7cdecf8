//! TUI pane rendering modules
//!
//! - [`source`]: source text highlighted from the scanned tokens
//! - [`tokens`]: the token list with positions
//! - [`diagnostics`]: verdict and error messages
//! - [`status`]: status bar with keybindings
//!
//! Each module exports a single `render_*` function taking the frame, its
//! area, the data to show and the pane's scroll offset.

pub mod diagnostics;
pub mod source;
pub mod status;
pub mod tokens;

pub use diagnostics::render_diagnostics_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border colour shows focus.
fn pane_block(title: &str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style)
}
