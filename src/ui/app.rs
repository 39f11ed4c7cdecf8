//! Token explorer state and event loop

use crate::diagnostics::Diagnostic;
use crate::driver::{CheckReport, ScanReport};
use crate::scanner::{Token, TokenKind};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Tokens,
    Source,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (tokens -> source -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Tokens,
        }
    }
}

/// The explorer state
pub struct App {
    /// The text that was scanned
    pub source_code: String,

    /// Every scanned token, end-of-input included
    pub tokens: Vec<Token>,

    /// Diagnostics from the full recognition run
    pub diagnostics: Vec<Diagnostic>,

    /// Index into `tokens`
    pub selected: usize,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub token_scroll: usize,
    pub diagnostics_scroll: usize,

    /// Whether the source pane scrolls to the selected token's line
    pub source_follows: bool,

    pub should_quit: bool,

    pub status_message: String,
}

impl App {
    pub fn new(source_code: String, scan: ScanReport, check: CheckReport) -> Self {
        let status_message = if check.is_success() {
            "Compilation was successful.".to_string()
        } else {
            format!("{} problem(s), press n to visit", check.diagnostics.len())
        };
        App {
            source_code,
            tokens: scan.tokens,
            diagnostics: check.diagnostics,
            selected: 0,
            focused_pane: FocusedPane::Tokens,
            source_scroll: 0,
            token_scroll: 0,
            diagnostics_scroll: 0,
            source_follows: true,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    pub fn selected_token(&self) -> Option<&Token> {
        self.tokens.get(self.selected)
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Right column: Tokens (top) | Diagnostics (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[1]);

        let selected = self.tokens.get(self.selected);
        let follow_line = if self.source_follows {
            selected.map(|t| t.position.line)
        } else {
            None
        };

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            &self.tokens,
            selected,
            follow_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            &self.tokens,
            self.selected,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.token_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            right_rows[1],
            &self.diagnostics,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selected,
            self.tokens.len(),
            !self.diagnostics.is_empty(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Char('n') => self.jump_to_next_problem(),
            KeyCode::Up => self.move_by(-1),
            KeyCode::Down => self.move_by(1),
            KeyCode::PageUp => self.move_by(-(PAGE as isize)),
            KeyCode::PageDown => self.move_by(PAGE as isize),
            KeyCode::Home => self.move_by(isize::MIN),
            KeyCode::End => self.move_by(isize::MAX),
            _ => {}
        }
    }

    /// Apply a movement to whichever pane has focus.
    fn move_by(&mut self, delta: isize) {
        match self.focused_pane {
            FocusedPane::Tokens => {
                let last = self.tokens.len().saturating_sub(1);
                self.selected = offset(self.selected, delta).min(last);
                self.source_follows = true;
                if let Some(token) = self.tokens.get(self.selected) {
                    self.status_message = format!("{} {}", token.kind, token.position);
                }
            }
            FocusedPane::Source => {
                // The pane clamps the offset against the line count on render
                self.source_scroll = offset(self.source_scroll, delta);
                self.source_follows = false;
            }
            FocusedPane::Diagnostics => {
                self.diagnostics_scroll = offset(self.diagnostics_scroll, delta);
            }
        }
    }

    fn is_problem(&self, token: &Token) -> bool {
        token.kind == TokenKind::Error
            || self.diagnostics.iter().any(|d| {
                d.position == token.position
                    || d.position.covers(token.position.line, token.position.col_start)
            })
    }

    /// Select the next token that is an error or sits under a diagnostic,
    /// wrapping around to the start.
    pub fn jump_to_next_problem(&mut self) {
        let count = self.tokens.len();
        let found = (1..=count)
            .map(|step| (self.selected + step) % count.max(1))
            .find(|&idx| self.is_problem(&self.tokens[idx]));

        match found {
            Some(idx) => {
                self.selected = idx;
                self.focused_pane = FocusedPane::Tokens;
                self.source_follows = true;
                let token = &self.tokens[idx];
                self.status_message = match self
                    .diagnostics
                    .iter()
                    .find(|d| d.position.line == token.position.line)
                {
                    Some(d) => d.message.clone(),
                    None => format!("{} {}", token.kind, token.position),
                };
            }
            None => {
                self.status_message = "No problems found".to_string();
            }
        }
    }
}

fn offset(value: usize, delta: isize) -> usize {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta as usize)
    }
}
