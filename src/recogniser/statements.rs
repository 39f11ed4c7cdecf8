//! Statement recognition
//!
//! # Grammar
//!
//! ```text
//! compound_stmt ::= "{" var_decl* stmt* "}"
//! stmt          ::= compound_stmt | if_stmt | for_stmt | while_stmt
//!                 | break_stmt | continue_stmt | return_stmt | expr_stmt
//! if_stmt       ::= "if" "(" expr ")" stmt ( "else" stmt )?
//! for_stmt      ::= "for" "(" expr? ";" expr? ";" expr? ")" stmt
//! while_stmt    ::= "while" "(" expr ")" stmt
//! break_stmt    ::= "break" ";"
//! continue_stmt ::= "continue" ";"
//! return_stmt   ::= "return" expr? ";"
//! expr_stmt     ::= expr? ";"
//! ```

use super::parse::{ParseResult, Recogniser};
use crate::scanner::{CharSource, TokenKind};

/// Tokens that can start an expression.
pub(crate) const EXPR_FIRST: [TokenKind; 9] = [
    TokenKind::Id,
    TokenKind::IntLiteral,
    TokenKind::FloatLiteral,
    TokenKind::BooleanLiteral,
    TokenKind::StringLiteral,
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Not,
    TokenKind::LParen,
];

impl<S: CharSource> Recogniser<'_, S> {
    pub(crate) fn parse_compound_stmt(&mut self) -> ParseResult {
        self.match_kind(TokenKind::LCurly)?;
        self.parse_var_decl_list()?;
        self.parse_stmt_list()?;
        self.match_kind(TokenKind::RCurly)
    }

    /// Statements up to the closing `}`. At end of input the expression
    /// statement fails on the missing `;`, so the loop always ends.
    fn parse_stmt_list(&mut self) -> ParseResult {
        while !self.check(TokenKind::RCurly) {
            self.parse_stmt()?;
        }
        Ok(())
    }

    fn parse_stmt(&mut self) -> ParseResult {
        match self.current.kind {
            TokenKind::LCurly => self.parse_compound_stmt(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::For => self.parse_for_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::Break => self.parse_break_stmt(),
            TokenKind::Continue => self.parse_continue_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            _ => self.parse_expr_stmt(),
        }
    }

    fn parse_if_stmt(&mut self) -> ParseResult {
        self.accept(); // 'if'
        self.match_kind(TokenKind::LParen)?;
        self.parse_expr()?;
        self.match_kind(TokenKind::RParen)?;
        self.parse_stmt()?;
        if self.check(TokenKind::Else) {
            self.accept();
            self.parse_stmt()?;
        }
        Ok(())
    }

    fn parse_for_stmt(&mut self) -> ParseResult {
        self.accept(); // 'for'
        self.match_kind(TokenKind::LParen)?;
        self.parse_optional_expr(TokenKind::Semicolon)?;
        self.match_kind(TokenKind::Semicolon)?;
        self.parse_optional_expr(TokenKind::Semicolon)?;
        self.match_kind(TokenKind::Semicolon)?;
        self.parse_optional_expr(TokenKind::RParen)?;
        self.match_kind(TokenKind::RParen)?;
        self.parse_stmt()
    }

    /// An expression unless the current token is `terminator`.
    fn parse_optional_expr(&mut self, terminator: TokenKind) -> ParseResult {
        if self.check(terminator) {
            Ok(())
        } else {
            self.parse_expr()
        }
    }

    fn parse_while_stmt(&mut self) -> ParseResult {
        self.accept(); // 'while'
        self.match_kind(TokenKind::LParen)?;
        self.parse_expr()?;
        self.match_kind(TokenKind::RParen)?;
        self.parse_stmt()
    }

    fn parse_break_stmt(&mut self) -> ParseResult {
        self.match_kind(TokenKind::Break)?;
        self.match_kind(TokenKind::Semicolon)
    }

    fn parse_continue_stmt(&mut self) -> ParseResult {
        self.match_kind(TokenKind::Continue)?;
        self.match_kind(TokenKind::Semicolon)
    }

    fn parse_return_stmt(&mut self) -> ParseResult {
        self.accept(); // 'return'
        self.parse_optional_expr(TokenKind::Semicolon)?;
        self.match_kind(TokenKind::Semicolon)
    }

    fn parse_expr_stmt(&mut self) -> ParseResult {
        if self.check_any(&EXPR_FIRST) {
            self.parse_expr()?;
        }
        self.match_kind(TokenKind::Semicolon)
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::CollectingReporter;
    use crate::recogniser::Recogniser;
    use crate::scanner::{Scanner, SourceFile};

    fn messages(src: &str) -> Vec<String> {
        let reporter = CollectingReporter::new();
        {
            let scanner = Scanner::new(SourceFile::new("stmt.vc", src), &reporter);
            let _ = Recogniser::new(scanner, &reporter).parse_program();
        }
        reporter
            .into_diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect()
    }

    fn body(stmts: &str) -> Vec<String> {
        messages(&format!("void f() {{ {} }}", stmts))
    }

    #[test]
    fn test_if_else() {
        assert!(body("if (x) y = 1;").is_empty());
        assert!(body("if (x < 1) { y = 1; } else if (x > 2) y = 2; else { }").is_empty());
        assert_eq!(body("if x) y = 1;"), vec!["\"(\" expected here"]);
    }

    #[test]
    fn test_for_clauses_are_optional() {
        assert!(body("for (;;) ;").is_empty());
        assert!(body("for (i = 0; i < 10; i = i + 1) { g(i); }").is_empty());
        assert!(body("for (; i < 10;) continue;").is_empty());
        assert_eq!(body("for (i = 0; i < 10) ;"), vec!["\";\" expected here"]);
    }

    #[test]
    fn test_while_and_jumps() {
        assert!(body("while (true) { continue; }").is_empty());
        assert!(body("while (a && !b) return a;").is_empty());
        assert_eq!(body("continue"), vec!["\";\" expected here"]);
    }

    #[test]
    fn test_break_scans_as_identifier() {
        // `break` has a kind but is not reserved; `break;` is an expression statement.
        assert!(body("while (1) break;").is_empty());
    }

    #[test]
    fn test_empty_and_nested_statements() {
        assert!(body(";;; { ; { } }").is_empty());
        assert_eq!(body("{ ;"), vec!["\";\" expected here"]);
    }

    #[test]
    fn test_return_forms() {
        assert!(body("return;").is_empty());
        assert!(body("return x * (y + 1);").is_empty());
        assert_eq!(body("return x"), vec!["\";\" expected here"]);
    }
}
