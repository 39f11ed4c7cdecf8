//! Diagnostics pane: the recognition verdict followed by every diagnostic

use super::pane_block;
use crate::diagnostics::Diagnostic;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    diagnostics: &[Diagnostic],
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(" Diagnostics ", is_focused);

    let verdict = if diagnostics.is_empty() {
        Span::styled(
            "Compilation was successful.",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(
                "Compilation was unsuccessful ({} diagnostic{}).",
                diagnostics.len(),
                if diagnostics.len() == 1 { "" } else { "s" }
            ),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![Line::from(verdict)];
    lines.extend(diagnostics.iter().map(|d| {
        Line::from(Span::styled(
            d.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        ))
    }));

    *scroll = (*scroll).min(lines.len().saturating_sub(1));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
