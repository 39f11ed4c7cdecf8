//! Source pane rendering with token-based highlighting
//!
//! Lines are drawn with tabs expanded exactly as the scanner counts columns,
//! so a token's `col_start..=col_end` lands on the characters it was scanned
//! from. Each character takes the style of the token covering it. Visible
//! text that no token covers can only be a comment and is greyed out.

use super::pane_block;
use crate::scanner::scan::next_tab_stop;
use crate::scanner::{Token, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Expand tabs so that index `c - 1` holds the character at column `c`.
pub fn expand_tabs(line: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(line.len());
    for ch in line.chars() {
        if ch == '\t' {
            let stop = next_tab_stop(out.len() + 1);
            while out.len() + 1 < stop {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
    out
}

fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Int | TokenKind::Float | TokenKind::Void | TokenKind::Boolean => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        k if k.is_keyword() => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::StringLiteral => Style::default().fg(DEFAULT_THEME.string),
        k if k.is_literal() => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::LCurly
        | TokenKind::RCurly
        | TokenKind::LParen
        | TokenKind::RParen
        | TokenKind::LBracket
        | TokenKind::RBracket => Style::default().fg(DEFAULT_THEME.primary),
        TokenKind::Error => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::UNDERLINED),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Tokens whose position is on `line`. `tokens` is in scan order.
fn tokens_on_line(tokens: &[Token], line: usize) -> &[Token] {
    let start = tokens.partition_point(|t| t.position.line < line);
    let len = tokens[start..]
        .iter()
        .take_while(|t| t.position.line == line)
        .count();
    &tokens[start..start + len]
}

fn highlight_line(
    text: &str,
    line_num: usize,
    tokens: &[Token],
    selected: Option<&Token>,
) -> Vec<Span<'static>> {
    let chars = expand_tabs(text);
    let mut styles: Vec<Style> = chars
        .iter()
        .map(|c| {
            if c.is_whitespace() {
                Style::default()
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            }
        })
        .collect();

    for token in tokens_on_line(tokens, line_num) {
        let style = token_style(token.kind);
        for col in token.position.col_start..=token.position.col_end {
            if let Some(slot) = styles.get_mut(col - 1) {
                *slot = style;
            }
        }
    }

    if let Some(sel) = selected.filter(|t| t.position.line == line_num) {
        for col in sel.position.col_start..=sel.position.col_end {
            if let Some(slot) = styles.get_mut(col - 1) {
                *slot = slot
                    .bg(DEFAULT_THEME.selection_bg)
                    .add_modifier(Modifier::BOLD);
            }
        }
    }

    // Merge runs of equally styled characters into spans
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();
    for (ch, style) in chars.into_iter().zip(styles) {
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }
    spans
}

/// Render the source pane.
///
/// When `follow_line` is set the scroll offset is adjusted so that line is
/// visible.
#[allow(clippy::too_many_arguments)]
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    tokens: &[Token],
    selected: Option<&Token>,
    follow_line: Option<usize>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(" Source ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if let Some(line) = follow_line.filter(|&l| l > 0) {
        let idx = line - 1;
        if idx < *scroll {
            *scroll = idx;
        } else if idx >= *scroll + visible_height {
            *scroll = idx + 1 - visible_height;
        }
    }
    *scroll = (*scroll).min(lines.len().saturating_sub(1));

    let selected_line = selected.map(|t| t.position.line);
    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible_height)
        .map(|(idx, text)| {
            let line_num = idx + 1;
            let num_style = if selected_line == Some(line_num) {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(highlight_line(text, line_num, tokens, selected));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
