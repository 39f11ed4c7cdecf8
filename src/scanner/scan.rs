//! The scanner: characters in, tokens out
//!
//! The scanner pulls characters from a [`CharSource`] on demand and builds
//! one [`Token`] per [`Scanner::get_token`] call. Classification relies on
//! non-destructive lookahead: the length of a keyword candidate or numeric
//! literal is measured with [`CharSource::peek`] before anything is consumed,
//! so no character is ever pushed back.
//!
//! Lexical errors (bad escapes, unterminated strings) go to the [`Reporter`]
//! as soon as they are seen. Scanning always continues afterwards.

use super::source::CharSource;
use super::token::{keywords, SourcePosition, Token, TokenKind, MAX_KEYWORD_LEN};
use crate::diagnostics::Reporter;
use tracing::debug;

const TAB_WIDTH: usize = 8;

/// Column reached after a tab at `column`: one past the next multiple of
/// eight strictly after it. A tab at column 8 therefore lands on 17.
pub fn next_tab_stop(column: usize) -> usize {
    column + TAB_WIDTH - column % TAB_WIDTH + 1
}

/// Translate the character after a backslash, if it forms a known escape.
fn translate_escape(ch: char) -> Option<char> {
    match ch {
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\'' => Some('\''),
        '"' => Some('"'),
        '\\' => Some('\\'),
        _ => None,
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Lexical analyser over a character source.
pub struct Scanner<'a, S: CharSource> {
    source: S,
    reporter: &'a dyn Reporter,
    current: Option<char>,
    spelling: String,
    line: usize,
    column: usize,
    debug: bool,
}

impl<'a, S: CharSource> Scanner<'a, S> {
    pub fn new(mut source: S, reporter: &'a dyn Reporter) -> Self {
        let current = source.next_char();
        Self {
            source,
            reporter,
            current,
            spelling: String::new(),
            line: 1,
            column: 1,
            debug: false,
        }
    }

    /// Trace every returned token at `debug` level.
    pub fn enable_debugging(&mut self) {
        self.debug = true;
    }

    /// Return the next token, skipping whitespace and comments first.
    pub fn get_token(&mut self) -> Token {
        self.skip_space_and_comments();
        self.spelling.clear();

        let line = self.line;
        let col_start = self.column;
        let kind = self.next_token();
        let position = SourcePosition::new(line, col_start, self.column - 1);

        let token = Token::new(kind, std::mem::take(&mut self.spelling), position);
        if self.debug {
            debug!("{}", token);
        }
        token
    }

    // ===== Character handling =====

    /// Character `offset` places ahead; offset 0 is the current character.
    fn at(&self, offset: usize) -> Option<char> {
        if offset == 0 {
            self.current
        } else {
            self.source.peek(offset)
        }
    }

    /// Move past the current character without recording it.
    fn skip(&mut self) {
        match self.current {
            None => return,
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some('\t') => self.column = next_tab_stop(self.column),
            Some(_) => self.column += 1,
        }
        self.current = self.source.next_char();
    }

    /// Append the current character to the spelling and move past it.
    fn accept(&mut self) {
        if let Some(ch) = self.current {
            self.spelling.push(ch);
        }
        self.skip();
    }

    // ===== Whitespace and comments =====

    fn skip_space_and_comments(&mut self) {
        loop {
            match self.current {
                Some(' ' | '\t' | '\n') => self.skip(),
                Some('/') if self.at(1) == Some('/') => self.skip_line_comment(),
                Some('/') if self.at(1) == Some('*') => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    /// Stops on the terminating newline so the line counter sees it.
    fn skip_line_comment(&mut self) {
        while !matches!(self.current, Some('\n') | None) {
            self.skip();
        }
    }

    /// An unterminated block comment runs to end of input without a diagnostic.
    fn skip_block_comment(&mut self) {
        self.skip(); // '/'
        self.skip(); // '*'
        loop {
            match self.current {
                None => break,
                Some('*') if self.at(1) == Some('/') => {
                    self.skip();
                    self.skip();
                    break;
                }
                Some(_) => self.skip(),
            }
        }
    }

    // ===== Classification =====

    fn next_token(&mut self) -> TokenKind {
        let Some(ch) = self.current else {
            self.spelling.push_str(TokenKind::Eof.spell());
            return TokenKind::Eof;
        };

        if ch.is_alphabetic() {
            return self.scan_word();
        }
        if ch.is_ascii_digit() || (ch == '.' && self.at(1).is_some_and(|c| c.is_ascii_digit())) {
            return self.scan_number();
        }
        if ch == '"' {
            return self.scan_string();
        }

        match ch {
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Mult),
            '/' => self.single(TokenKind::Div),
            '!' => self.pair('=', TokenKind::NotEq, TokenKind::Not),
            '=' => self.pair('=', TokenKind::EqEq, TokenKind::Eq),
            '<' => self.pair('=', TokenKind::LtEq, TokenKind::Lt),
            '>' => self.pair('=', TokenKind::GtEq, TokenKind::Gt),
            '&' => self.pair('&', TokenKind::AndAnd, TokenKind::Error),
            '|' => self.pair('|', TokenKind::OrOr, TokenKind::Error),
            '{' => self.single(TokenKind::LCurly),
            '}' => self.single(TokenKind::RCurly),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            _ => self.single(TokenKind::Error),
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.accept();
        kind
    }

    /// One- or two-character operator depending on whether `second` follows.
    fn pair(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        self.accept();
        if self.current == Some(second) {
            self.accept();
            double
        } else {
            single
        }
    }

    /// Keyword, boolean literal or identifier.
    fn scan_word(&mut self) -> TokenKind {
        let mut run = 1;
        while self.at(run).is_some_and(char::is_alphabetic) {
            run += 1;
        }

        let continues = self.at(run).is_some_and(is_identifier_char);
        if !continues && run <= MAX_KEYWORD_LEN {
            let candidate: String = (0..run).filter_map(|offset| self.at(offset)).collect();
            if let Some(&kind) = keywords().get(candidate.as_str()) {
                for _ in 0..run {
                    self.accept();
                }
                return kind;
            }
        }

        while self.current.is_some_and(is_identifier_char) {
            self.accept();
        }
        TokenKind::Id
    }

    /// Integer or float literal. The whole length is measured before consuming.
    fn scan_number(&mut self) -> TokenKind {
        let mut kind = TokenKind::IntLiteral;
        let mut len = 0;
        let mut seen_dot = false;
        let mut seen_exponent = false;

        loop {
            match self.at(len) {
                Some(c) if c.is_ascii_digit() => len += 1,
                Some('.') if !seen_dot && !seen_exponent => {
                    seen_dot = true;
                    kind = TokenKind::FloatLiteral;
                    len += 1;
                }
                Some('e' | 'E') if !seen_exponent => {
                    let digits_at = match self.at(len + 1) {
                        Some('+' | '-') => len + 2,
                        _ => len + 1,
                    };
                    if !self.at(digits_at).is_some_and(|c| c.is_ascii_digit()) {
                        break;
                    }
                    seen_exponent = true;
                    kind = TokenKind::FloatLiteral;
                    len = digits_at;
                }
                _ => break,
            }
        }

        for _ in 0..len {
            self.accept();
        }
        kind
    }

    /// String literal; the quotes are left out of the spelling.
    fn scan_string(&mut self) -> TokenKind {
        let col_start = self.column;
        self.skip(); // opening quote

        loop {
            match self.current {
                Some('"') => {
                    self.skip();
                    break;
                }
                Some('\n') | None => {
                    self.reporter.report(
                        "%: unterminated string",
                        &self.spelling,
                        SourcePosition::new(self.line, col_start, col_start),
                    );
                    break;
                }
                Some('\\') => self.scan_escape(),
                Some(_) => self.accept(),
            }
        }

        TokenKind::StringLiteral
    }

    /// Current character is a backslash.
    fn scan_escape(&mut self) {
        let next = self.at(1);
        if let Some(translated) = next.and_then(translate_escape) {
            self.spelling.push(translated);
            self.skip();
            self.skip();
            return;
        }

        let col = self.column;
        let mut escape = String::from('\\');
        let mut col_end = col;
        if let Some(ch) = next.filter(|&c| c != '\n') {
            escape.push(ch);
            col_end += 1;
        }
        self.reporter.report(
            "%: illegal escape character",
            &escape,
            SourcePosition::new(self.line, col, col_end),
        );

        self.accept();
        if col_end > col {
            self.accept();
        }
    }
}
