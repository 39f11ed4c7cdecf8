//! Expression recognition
//!
//! Binary operators form a strict cascade, lowest precedence first. Every
//! level is left-associative, assignment included:
//!
//! ```text
//! expr         ::= assign_expr
//! assign_expr  ::= or_expr ( "=" or_expr )*
//! or_expr      ::= and_expr ( "||" and_expr )*
//! and_expr     ::= equal_expr ( "&&" equal_expr )*
//! equal_expr   ::= rel_expr ( ( "==" | "!=" ) rel_expr )*
//! rel_expr     ::= add_expr ( ( "<" | "<=" | ">" | ">=" ) add_expr )*
//! add_expr     ::= mult_expr ( ( "+" | "-" ) mult_expr )*
//! mult_expr    ::= unary_expr ( ( "*" | "/" ) unary_expr )*
//! unary_expr   ::= ( "+" | "-" | "!" ) unary_expr | primary_expr
//! primary_expr ::= identifier ( "[" expr "]" | arg_list )?
//!                | "(" expr ")"
//!                | INTLITERAL | FLOATLITERAL | BOOLLITERAL | STRINGLITERAL
//! arg_list     ::= "(" ( expr ( "," expr )* )? ")"
//! ```

use super::parse::{ParseResult, Recogniser};
use crate::scanner::{CharSource, TokenKind};

type Level<R> = fn(&mut R) -> ParseResult;

impl<S: CharSource> Recogniser<'_, S> {
    pub(crate) fn parse_expr(&mut self) -> ParseResult {
        self.parse_assign_expr()
    }

    /// `operand ( op operand )*` for any `op` in `operators`.
    fn parse_left_assoc(&mut self, operators: &[TokenKind], operand: Level<Self>) -> ParseResult {
        operand(self)?;
        while self.check_any(operators) {
            self.accept();
            operand(self)?;
        }
        Ok(())
    }

    fn parse_assign_expr(&mut self) -> ParseResult {
        self.parse_left_assoc(&[TokenKind::Eq], Self::parse_cond_or_expr)
    }

    fn parse_cond_or_expr(&mut self) -> ParseResult {
        self.parse_left_assoc(&[TokenKind::OrOr], Self::parse_cond_and_expr)
    }

    fn parse_cond_and_expr(&mut self) -> ParseResult {
        self.parse_left_assoc(&[TokenKind::AndAnd], Self::parse_equality_expr)
    }

    fn parse_equality_expr(&mut self) -> ParseResult {
        self.parse_left_assoc(
            &[TokenKind::EqEq, TokenKind::NotEq],
            Self::parse_rel_expr,
        )
    }

    fn parse_rel_expr(&mut self) -> ParseResult {
        self.parse_left_assoc(
            &[TokenKind::Lt, TokenKind::LtEq, TokenKind::Gt, TokenKind::GtEq],
            Self::parse_additive_expr,
        )
    }

    fn parse_additive_expr(&mut self) -> ParseResult {
        self.parse_left_assoc(
            &[TokenKind::Plus, TokenKind::Minus],
            Self::parse_multiplicative_expr,
        )
    }

    fn parse_multiplicative_expr(&mut self) -> ParseResult {
        self.parse_left_assoc(&[TokenKind::Mult, TokenKind::Div], Self::parse_unary_expr)
    }

    fn parse_unary_expr(&mut self) -> ParseResult {
        if self.check_any(&[TokenKind::Plus, TokenKind::Minus, TokenKind::Not]) {
            self.accept();
            self.parse_unary_expr()
        } else {
            self.parse_primary_expr()
        }
    }

    fn parse_primary_expr(&mut self) -> ParseResult {
        match self.current.kind {
            TokenKind::Id => {
                self.parse_ident()?;
                if self.check(TokenKind::LBracket) {
                    self.accept();
                    self.parse_expr()?;
                    self.match_kind(TokenKind::RBracket)?;
                } else if self.check(TokenKind::LParen) {
                    self.parse_arg_list()?;
                }
                Ok(())
            }
            TokenKind::LParen => {
                self.accept();
                self.parse_expr()?;
                self.match_kind(TokenKind::RParen)
            }
            TokenKind::IntLiteral => self.parse_int_literal(),
            TokenKind::FloatLiteral | TokenKind::BooleanLiteral | TokenKind::StringLiteral => {
                self.accept();
                Ok(())
            }
            _ => {
                let spelling = self.current.spelling.clone();
                self.syntactic_error("illegal primary expression \"%\"", spelling)
            }
        }
    }

    fn parse_arg_list(&mut self) -> ParseResult {
        self.match_kind(TokenKind::LParen)?;
        if self.check(TokenKind::RParen) {
            self.accept();
            return Ok(());
        }

        self.parse_expr()?;
        while self.check(TokenKind::Comma) {
            self.accept();
            self.parse_expr()?;
        }
        self.match_kind(TokenKind::RParen)
    }

    pub(crate) fn parse_int_literal(&mut self) -> ParseResult {
        if self.check(TokenKind::IntLiteral) {
            self.accept();
            Ok(())
        } else {
            self.syntactic_error(
                "integer literal expected here, got %",
                self.current.kind.spell(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::{CollectingReporter, Diagnostic};
    use crate::recogniser::Recogniser;
    use crate::scanner::{Scanner, SourceFile, SourcePosition};

    fn expr(text: &str) -> Vec<Diagnostic> {
        let src = format!("void f() {{ {}; }}", text);
        let reporter = CollectingReporter::new();
        {
            let scanner = Scanner::new(SourceFile::new("expr.vc", &src), &reporter);
            let _ = Recogniser::new(scanner, &reporter).parse_program();
        }
        reporter.into_diagnostics()
    }

    #[test]
    fn test_precedence_cascade() {
        for text in [
            "a = b = c",
            "a || b && c == d != e < f <= g > h >= i + j - k * l / m",
            "- + ! x",
            "(a + b) * c",
            "x[i + 1] = f(1, 2.5, true, \"s\", g())",
            "!(a == b) || c[0] && d",
        ] {
            assert!(expr(text).is_empty(), "rejected {:?}", text);
        }
    }

    #[test]
    fn test_illegal_primary() {
        let diags = expr("a + * b");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "illegal primary expression \"*\"");
        assert_eq!(diags[0].position, SourcePosition::new(1, 16, 16));
    }

    #[test]
    fn test_unclosed_groups() {
        assert_eq!(expr("(a + b")[0].message, "\")\" expected here");
        assert_eq!(expr("a[1")[0].message, "\"]\" expected here");
        assert_eq!(expr("f(1, 2")[0].message, "\")\" expected here");
        assert_eq!(expr("f(1,)")[0].message, "illegal primary expression \")\"");
    }

    #[test]
    fn test_error_tokens_are_not_operators() {
        assert_eq!(expr("a & b")[0].message, "\";\" expected here");
    }
}
