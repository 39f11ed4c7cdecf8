//! Token list pane

use super::pane_block;
use crate::scanner::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One row of the token list: position, kind and escaped spelling.
pub fn format_token_row(token: &Token) -> String {
    let pos = token.position;
    format!(
        "{:>4}:{:<3}-{:<3} {:<15} {}",
        pos.line,
        pos.col_start,
        pos.col_end,
        token.kind.to_string(),
        token.spelling.escape_debug()
    )
}

/// Render the token list, keeping `selected` inside the visible window.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: usize,
    is_focused: bool,
    scroll: &mut usize,
) {
    let title = format!(" Tokens ({}) ", tokens.len());
    let block = pane_block(&title, is_focused);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if selected < *scroll {
        *scroll = selected;
    } else if selected >= *scroll + visible_height {
        *scroll = selected + 1 - visible_height;
    }

    let rows: Vec<Line> = tokens
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(idx, token)| {
            let style = if idx == selected {
                Style::default()
                    .bg(DEFAULT_THEME.current_line_bg)
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD)
            } else if token.kind == TokenKind::Error {
                Style::default().fg(DEFAULT_THEME.error)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Line::from(Span::styled(format_token_row(token), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(rows).block(block), area);
}
