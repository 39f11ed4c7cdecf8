//! Declaration recognition
//!
//! # Grammar
//!
//! ```text
//! program        ::= ( type init_decl_list ( "(" para_list compound_stmt | ";" ) )*
//! var_decl       ::= ( "int" | "float" | "boolean" ) init_decl_list ";"
//! init_decl_list ::= init_decl ( "," init_decl )*
//! init_decl      ::= declarator ( "=" initialiser )?
//! declarator     ::= identifier ( "[" INTLITERAL? "]" )?
//! initialiser    ::= expr | "{" expr ( "," expr )* "}"
//! para_list      ::= ")" | type declarator ( "," type declarator )* ")"
//! ```
//!
//! A top-level declaration is only known to be a function once its whole
//! declarator list has been read and a `(` follows. Any declarator list is
//! accepted in front of that `(`, including ones that make no sense for a
//! function such as `int a, b = 1 () {}`.

use super::parse::{ParseResult, Recogniser};
use crate::scanner::{CharSource, TokenKind};

const TYPES: [TokenKind; 4] = [
    TokenKind::Void,
    TokenKind::Boolean,
    TokenKind::Int,
    TokenKind::Float,
];

const VARIABLE_TYPES: [TokenKind; 3] = [TokenKind::Int, TokenKind::Float, TokenKind::Boolean];

impl<S: CharSource> Recogniser<'_, S> {
    /// Top-level declarations up to end of input.
    pub(crate) fn parse_declarations(&mut self) -> ParseResult {
        while !self.check(TokenKind::Eof) {
            self.parse_type()?;
            self.parse_init_decl_list()?;
            if self.check(TokenKind::LParen) {
                self.accept();
                self.parse_func_decl()?;
            } else {
                self.match_kind(TokenKind::Semicolon)?;
            }
        }
        Ok(())
    }

    /// Entered just after the opening `(`.
    fn parse_func_decl(&mut self) -> ParseResult {
        self.parse_para_list()?;
        self.parse_compound_stmt()
    }

    /// Local declarations at the head of a compound statement.
    pub(crate) fn parse_var_decl_list(&mut self) -> ParseResult {
        while self.check_any(&VARIABLE_TYPES) {
            self.accept();
            self.parse_init_decl_list()?;
            self.match_kind(TokenKind::Semicolon)?;
        }
        Ok(())
    }

    fn parse_init_decl_list(&mut self) -> ParseResult {
        self.parse_init_decl()?;
        while self.check(TokenKind::Comma) {
            self.accept();
            self.parse_init_decl()?;
        }
        Ok(())
    }

    fn parse_init_decl(&mut self) -> ParseResult {
        self.parse_declarator()?;
        if self.check(TokenKind::Eq) {
            self.accept();
            self.parse_initialiser()?;
        }
        Ok(())
    }

    fn parse_initialiser(&mut self) -> ParseResult {
        if !self.check(TokenKind::LCurly) {
            return self.parse_expr();
        }

        self.accept();
        self.parse_expr()?;
        while !self.check(TokenKind::RCurly) {
            self.match_kind(TokenKind::Comma)?;
            self.parse_expr()?;
        }
        self.accept();
        Ok(())
    }

    /// Entered just after the opening `(`; consumes the closing `)`.
    fn parse_para_list(&mut self) -> ParseResult {
        if self.check(TokenKind::RParen) {
            self.accept();
            return Ok(());
        }

        self.parse_type()?;
        self.parse_declarator()?;
        while self.check(TokenKind::Comma) {
            self.accept();
            self.parse_type()?;
            self.parse_declarator()?;
        }
        self.match_kind(TokenKind::RParen)
    }

    fn parse_declarator(&mut self) -> ParseResult {
        self.parse_ident()?;
        if self.check(TokenKind::LBracket) {
            self.accept();
            if !self.check(TokenKind::RBracket) {
                self.parse_int_literal()?;
            }
            self.match_kind(TokenKind::RBracket)?;
        }
        Ok(())
    }

    fn parse_type(&mut self) -> ParseResult {
        if self.check_any(&TYPES) {
            self.accept();
            Ok(())
        } else {
            let spelling = self.current.spelling.clone();
            self.syntactic_error("Expected type int/float/char/void, got \"%\"", spelling)
        }
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
            let scanner = Scanner::new(SourceFile::new("decl.vc", src), &reporter);
            let _ = Recogniser::new(scanner, &reporter).parse_program();
        }
        reporter
            .into_diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect()
    }

    #[test]
    fn test_parameters() {
        assert!(messages("int f(int a, float b[], int c[3]) { }").is_empty());
        // `boolean` is not reserved, so it scans as an identifier.
        assert_eq!(
            messages("int f(boolean c) { }"),
            vec!["Expected type int/float/char/void, got \"boolean\""]
        );
        assert!(messages("void f(void v) { }").is_empty());
        assert_eq!(
            messages("int f(int a,) { }"),
            vec!["Expected type int/float/char/void, got \")\""]
        );
        assert_eq!(
            messages("int f(a) { }"),
            vec!["Expected type int/float/char/void, got \"a\""]
        );
    }

    #[test]
    fn test_array_size_must_be_int_literal() {
        assert_eq!(
            messages("int a[n];"),
            vec!["integer literal expected here, got <id>"]
        );
        assert_eq!(messages("int a[2.0];").len(), 1);
    }

    #[test]
    fn test_brace_initialiser() {
        assert!(messages("int a[] = {1, 2, x + 1};").is_empty());
        assert_eq!(
            messages("int a[] = {};"),
            vec!["illegal primary expression \"}\""]
        );
        assert_eq!(
            messages("int a[] = {1 2};"),
            vec!["\",\" expected here"]
        );
    }

    #[test]
    fn test_local_declarations_precede_statements() {
        assert!(messages("void f() { int a; float b = 2; a = 1; }").is_empty());
        assert_eq!(
            messages("void f() { a = 1; int b; }"),
            vec!["\";\" expected here"]
        );
    }

    #[test]
    fn test_void_is_not_a_local_type() {
        assert_eq!(messages("void f() { void x; }"), vec!["\";\" expected here"]);
    }
}
