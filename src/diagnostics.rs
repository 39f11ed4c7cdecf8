//! Diagnostic sink shared by the scanner and the recogniser
//!
//! Both stages report through a [`Reporter`] with a message template holding
//! a single `%` placeholder. The scanner and the recogniser hold the same
//! reporter at once, so [`Reporter::report`] takes `&self`.

use crate::scanner::SourcePosition;
use std::cell::RefCell;
use std::fmt;

/// A rendered error message with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub position: SourcePosition,
}

impl Diagnostic {
    /// Substitute `spelling` for the first `%` in `template`.
    pub fn from_template(template: &str, spelling: &str, position: SourcePosition) -> Self {
        Self {
            message: template.replacen('%', spelling, 1),
            position,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR: {}: {}", self.position, self.message)
    }
}

/// Receives lexical and syntax errors.
pub trait Reporter {
    fn report(&self, template: &str, spelling: &str, position: SourcePosition);
}

/// Keeps every diagnostic in emission order.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, template: &str, spelling: &str, position: SourcePosition) {
        self.diagnostics
            .borrow_mut()
            .push(Diagnostic::from_template(template, spelling, position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_substitution() {
        let diag = Diagnostic::from_template(
            "\"%\" expected here",
            ";",
            SourcePosition::new(2, 4, 4),
        );
        assert_eq!(diag.message, "\";\" expected here");
        assert_eq!(diag.to_string(), "ERROR: 2(4)..2(4): \";\" expected here");
    }

    #[test]
    fn test_only_first_placeholder_is_replaced() {
        let diag = Diagnostic::from_template("% and %", "x", SourcePosition::new(1, 1, 1));
        assert_eq!(diag.message, "x and %");
    }

    #[test]
    fn test_collecting_reporter_keeps_order() {
        let reporter = CollectingReporter::new();
        assert!(reporter.is_empty());
        reporter.report("%: first", "a", SourcePosition::new(1, 1, 1));
        reporter.report("%: second", "b", SourcePosition::new(2, 1, 1));
        assert_eq!(reporter.len(), 2);

        let diags = reporter.into_diagnostics();
        assert_eq!(diags[0].message, "a: first");
        assert_eq!(diags[1].message, "b: second");
    }
}
