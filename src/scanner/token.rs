//! Token kinds, tokens and source positions
//!
//! A [`Token`] is the unit the scanner hands to the recogniser: a
//! [`TokenKind`], the consumed spelling and the [`SourcePosition`] of the
//! consumed characters.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Line and column span of a token or diagnostic.
///
/// Both columns are on `line`. `col_end` is the column of the last consumed
/// character, so it is `col_start - 1` for the end-of-input token, which
/// consumes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourcePosition {
    pub line: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl SourcePosition {
    pub fn new(line: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            line,
            col_start,
            col_end,
        }
    }

    /// Whether `column` on `line` falls inside this span.
    pub fn covers(&self, line: usize, column: usize) -> bool {
        self.line == line && column >= self.col_start && column <= self.col_end
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})..{}({})",
            self.line, self.col_start, self.line, self.col_end
        )
    }
}

/// Every token kind the scanner can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Boolean,
    Break,
    Continue,
    Else,
    Float,
    For,
    If,
    Int,
    Return,
    Void,
    While,

    // Operators
    Plus,   // +
    Minus,  // -
    Mult,   // *
    Div,    // /
    Not,    // !
    NotEq,  // !=
    Eq,     // =
    EqEq,   // ==
    Lt,     // <
    LtEq,   // <=
    Gt,     // >
    GtEq,   // >=
    AndAnd, // &&
    OrOr,   // ||

    // Separators
    LCurly,    // {
    RCurly,    // }
    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    Semicolon, // ;
    Comma,     // ,

    // Identifiers and literals
    Id,
    IntLiteral,
    FloatLiteral,
    BooleanLiteral,
    StringLiteral,

    // Special
    Error,
    Eof,
}

impl TokenKind {
    /// Canonical spelling used in diagnostics and token dumps.
    pub fn spell(self) -> &'static str {
        match self {
            TokenKind::Boolean => "boolean",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Else => "else",
            TokenKind::Float => "float",
            TokenKind::For => "for",
            TokenKind::If => "if",
            TokenKind::Int => "int",
            TokenKind::Return => "return",
            TokenKind::Void => "void",
            TokenKind::While => "while",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mult => "*",
            TokenKind::Div => "/",
            TokenKind::Not => "!",
            TokenKind::NotEq => "!=",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::LCurly => "{",
            TokenKind::RCurly => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Id => "<id>",
            TokenKind::IntLiteral => "<int-literal>",
            TokenKind::FloatLiteral => "<float-literal>",
            TokenKind::BooleanLiteral => "<boolean-literal>",
            TokenKind::StringLiteral => "<string-literal>",
            TokenKind::Error => "<error>",
            TokenKind::Eof => "$",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Boolean
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Else
                | TokenKind::Float
                | TokenKind::For
                | TokenKind::If
                | TokenKind::Int
                | TokenKind::Return
                | TokenKind::Void
                | TokenKind::While
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::BooleanLiteral
                | TokenKind::StringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Reserved spellings. `boolean` and `break` have kinds but are not reserved.
const RESERVED: [(&str, TokenKind); 11] = [
    ("true", TokenKind::BooleanLiteral),
    ("false", TokenKind::BooleanLiteral),
    ("continue", TokenKind::Continue),
    ("else", TokenKind::Else),
    ("float", TokenKind::Float),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("int", TokenKind::Int),
    ("return", TokenKind::Return),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
];

/// Length of the longest reserved spelling.
pub const MAX_KEYWORD_LEN: usize = 8;

/// The keyword table, built on first use.
pub fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| RESERVED.iter().copied().collect())
}

/// A classified, position-tagged unit of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub spelling: String,
    pub position: SourcePosition,
}

impl Token {
    pub fn new(kind: TokenKind, spelling: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            kind,
            spelling: spelling.into(),
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Kind = {} [{}], spelling = \"{}\", position = {}",
            self.kind,
            self.kind.spell(),
            self.spelling,
            self.position
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_contents() {
        let table = keywords();
        assert_eq!(table.len(), 11);
        assert_eq!(table.get("while"), Some(&TokenKind::While));
        assert_eq!(table.get("true"), Some(&TokenKind::BooleanLiteral));
        assert_eq!(table.get("boolean"), None);
        assert_eq!(table.get("break"), None);
        assert!(table.keys().all(|k| k.len() <= MAX_KEYWORD_LEN));
    }

    #[test]
    fn test_position_display() {
        let pos = SourcePosition::new(3, 5, 7);
        assert_eq!(pos.to_string(), "3(5)..3(7)");
        assert!(pos.covers(3, 5));
        assert!(pos.covers(3, 7));
        assert!(!pos.covers(3, 8));
        assert!(!pos.covers(2, 6));
    }

    #[test]
    fn test_token_display() {
        let tok = Token::new(TokenKind::Int, "int", SourcePosition::new(1, 1, 3));
        assert_eq!(
            tok.to_string(),
            "Kind = Int [int], spelling = \"int\", position = 1(1)..1(3)"
        );
    }
}
