//! Running the front end over a whole file
//!
//! [`check_source`] wires a [`SourceFile`], a [`Scanner`] and a
//! [`Recogniser`] to one [`CollectingReporter`] and returns everything that
//! was reported. [`scan_source`] runs the scanner alone and keeps the tokens.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::diagnostics::{CollectingReporter, Diagnostic};
use crate::error::{DriverError, Result};
use crate::recogniser::{Recogniser, SyntaxError};
use crate::scanner::{Scanner, SourceFile, Token, TokenKind};

#[derive(Clone, Debug, Default)]
pub struct CheckOptions {
    /// Trace every token the scanner returns.
    pub trace_tokens: bool,
}

/// Result of recognising one source text.
#[derive(Clone, Debug)]
pub struct CheckReport {
    /// Lexical and syntax diagnostics in emission order.
    pub diagnostics: Vec<Diagnostic>,
    pub syntax_error: Option<SyntaxError>,
}

impl CheckReport {
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Every token of a source text, end-of-input included.
#[derive(Clone, Debug)]
pub struct ScanReport {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.display().to_string(),
        source,
    })
}

pub fn check_source(name: &str, text: &str, opts: &CheckOptions) -> CheckReport {
    let source = SourceFile::new(name, text);
    info!(file = source.name(), "recognising");

    let reporter = CollectingReporter::new();
    let syntax_error = {
        let mut scanner = Scanner::new(source, &reporter);
        if opts.trace_tokens {
            scanner.enable_debugging();
        }
        Recogniser::new(scanner, &reporter).parse_program().err()
    };

    let diagnostics = reporter.into_diagnostics();
    info!(
        file = name,
        diagnostics = diagnostics.len(),
        accepted = syntax_error.is_none(),
        "recognition finished"
    );

    CheckReport {
        diagnostics,
        syntax_error,
    }
}

pub fn check_file(path: &Path, opts: &CheckOptions) -> Result<CheckReport> {
    let text = read_source(path)?;
    Ok(check_source(&path.display().to_string(), &text, opts))
}

pub fn scan_source(name: &str, text: &str, opts: &CheckOptions) -> ScanReport {
    let source = SourceFile::new(name, text);
    debug!(file = source.name(), "scanning");

    let reporter = CollectingReporter::new();
    let mut tokens = Vec::new();
    {
        let mut scanner = Scanner::new(source, &reporter);
        if opts.trace_tokens {
            scanner.enable_debugging();
        }
        loop {
            let token = scanner.get_token();
            let eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if eof {
                break;
            }
        }
    }
    debug!(file = name, tokens = tokens.len(), "scan finished");

    ScanReport {
        tokens,
        diagnostics: reporter.into_diagnostics(),
    }
}
