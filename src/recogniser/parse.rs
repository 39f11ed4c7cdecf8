//! Recogniser core
//!
//! This module provides the [`Recogniser`] struct, the [`SyntaxError`] type
//! and the token-cursor helpers shared by the grammar modules.
//!
//! # Architecture
//!
//! The grammar methods are split across files using `impl Recogniser` blocks:
//! - `declarations`: top-level and local declarations
//! - `statements`: compound, selection, iteration and jump statements
//! - `expressions`: the binary-operator cascade and primary expressions
//!
//! Every grammar method returns [`ParseResult`]. The first syntax error
//! travels back up with `?` and is reported once, in
//! [`Recogniser::parse_program`]. Nothing after it is examined.

use crate::diagnostics::{Diagnostic, Reporter};
use crate::scanner::{CharSource, Scanner, SourcePosition, Token, TokenKind};
use thiserror::Error;
use tracing::debug;

fn render(template: &str, spelling: &str) -> String {
    template.replacen('%', spelling, 1)
}

/// The first grammar violation in a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at {position}: {}", render(.template, .spelling))]
pub struct SyntaxError {
    pub template: &'static str,
    pub spelling: String,
    pub position: SourcePosition,
}

impl SyntaxError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::from_template(self.template, &self.spelling, self.position)
    }
}

pub(crate) type ParseResult = Result<(), SyntaxError>;

/// Single-lookahead recursive-descent recogniser for VC.
pub struct Recogniser<'a, S: CharSource> {
    scanner: Scanner<'a, S>,
    reporter: &'a dyn Reporter,
    pub(crate) current: Token,
}

impl<'a, S: CharSource> Recogniser<'a, S> {
    /// Prime the recogniser with the scanner's first token.
    pub fn new(mut scanner: Scanner<'a, S>, reporter: &'a dyn Reporter) -> Self {
        let current = scanner.get_token();
        Self {
            scanner,
            reporter,
            current,
        }
    }

    /// Recognise the whole token stream.
    ///
    /// A syntax error is reported to the reporter before being returned, and
    /// at most one is ever reported.
    pub fn parse_program(&mut self) -> Result<(), SyntaxError> {
        let outcome = self.parse_declarations();
        if let Err(err) = &outcome {
            debug!(position = %err.position, "recognition stopped at first syntax error");
            self.reporter
                .report(err.template, &err.spelling, err.position);
        }
        outcome
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(crate) fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current.kind)
    }

    /// Move to the next token unconditionally.
    pub(crate) fn accept(&mut self) {
        self.current = self.scanner.get_token();
    }

    /// Move past the current token if it has kind `expected`.
    pub(crate) fn match_kind(&mut self, expected: TokenKind) -> ParseResult {
        if self.check(expected) {
            self.accept();
            Ok(())
        } else {
            self.syntactic_error("\"%\" expected here", expected.spell())
        }
    }

    pub(crate) fn syntactic_error<T>(
        &self,
        template: &'static str,
        spelling: impl Into<String>,
    ) -> Result<T, SyntaxError> {
        Err(SyntaxError {
            template,
            spelling: spelling.into(),
            position: self.current.position,
        })
    }

    pub(crate) fn parse_ident(&mut self) -> ParseResult {
        if self.check(TokenKind::Id) {
            self.accept();
            Ok(())
        } else {
            self.syntactic_error(
                "identifier expected here, got %",
                self.current.kind.spell(),
            )
        }
    }
}
