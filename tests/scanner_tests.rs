// Integration tests for the scanner through the public library API

use vcfront::diagnostics::CollectingReporter;
use vcfront::scanner::{Scanner, SourceFile, SourcePosition, Token, TokenKind};

fn scan_all(src: &str) -> (Vec<Token>, CollectingReporter) {
    let reporter = CollectingReporter::new();
    let mut tokens = Vec::new();
    {
        let mut scanner = Scanner::new(SourceFile::new("test.vc", src), &reporter);
        loop {
            let token = scanner.get_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
    }
    (tokens, reporter)
}

fn kinds(src: &str) -> Vec<TokenKind> {
    scan_all(src).0.into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_blank_input_is_only_eof() {
    let (tokens, reporter) = scan_all("  // a comment\n/* block\n comment */\t\n");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].spelling, "$");
    assert_eq!(tokens[0].position, SourcePosition::new(4, 1, 0));
    assert!(reporter.is_empty());
}

#[test]
fn test_keywords_need_an_exact_match() {
    use TokenKind::*;
    assert_eq!(
        kinds("int integer in float floats while_ for1 true false"),
        vec![Int, Id, Id, Float, Id, Id, Id, BooleanLiteral, BooleanLiteral, Eof]
    );
}

#[test]
fn test_number_forms() {
    let (tokens, _) = scan_all("123 12.5 1e10 1e .5 2E-3");
    let got: Vec<(TokenKind, &str)> = tokens
        .iter()
        .map(|t| (t.kind, t.spelling.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::IntLiteral, "123"),
            (TokenKind::FloatLiteral, "12.5"),
            (TokenKind::FloatLiteral, "1e10"),
            (TokenKind::IntLiteral, "1"),
            (TokenKind::Id, "e"),
            (TokenKind::FloatLiteral, ".5"),
            (TokenKind::FloatLiteral, "2E-3"),
            (TokenKind::Eof, "$"),
        ]
    );
}

#[test]
fn test_string_escapes() {
    let (tokens, reporter) = scan_all("\"a\\nb\"");
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].spelling, "a\nb");
    assert_eq!(tokens[0].position, SourcePosition::new(1, 1, 6));
    assert!(reporter.is_empty());
}

#[test]
fn test_illegal_escape_is_reported_and_scanning_continues() {
    let (tokens, reporter) = scan_all("\"\\q\" x");
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].spelling, "\\q");
    assert_eq!(tokens[1].kind, TokenKind::Id);
    assert_eq!(tokens[1].spelling, "x");

    let diags = reporter.into_diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(
        diags[0].to_string(),
        "ERROR: 1(2)..1(3): \\q: illegal escape character"
    );
}

#[test]
fn test_unterminated_string() {
    let (tokens, reporter) = scan_all("\"abc\nx");
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].spelling, "abc");
    assert_eq!(tokens[1].position, SourcePosition::new(2, 1, 1));

    let diags = reporter.into_diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "abc: unterminated string");
    assert_eq!(diags[0].position, SourcePosition::new(1, 1, 1));
}

#[test]
fn test_string_cut_off_by_end_of_input() {
    let (tokens, reporter) = scan_all("\"abc");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].spelling, "abc");
    assert_eq!(tokens[0].position, SourcePosition::new(1, 1, 4));
    assert_eq!(tokens[1].kind, TokenKind::Eof);

    let diags = reporter.into_diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].to_string(), "ERROR: 1(1)..1(1): abc: unterminated string");
}

#[test]
fn test_backslash_before_newline() {
    let (tokens, reporter) = scan_all("\"a\\\nx");
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].spelling, "a\\");
    assert_eq!(tokens[1].kind, TokenKind::Id);
    assert_eq!(tokens[1].position, SourcePosition::new(2, 1, 1));

    let rendered: Vec<String> = reporter
        .into_diagnostics()
        .iter()
        .map(|d| d.to_string())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "ERROR: 1(3)..1(3): \\: illegal escape character",
            "ERROR: 1(1)..1(1): a\\: unterminated string",
        ]
    );
}

#[test]
fn test_tab_on_a_stop_column() {
    let (tokens, _) = scan_all("       \tx\n               \ty");
    assert_eq!(tokens[0].position, SourcePosition::new(1, 17, 17));
    assert_eq!(tokens[1].position, SourcePosition::new(2, 25, 25));
}

#[test]
fn test_block_comment_needs_its_own_close() {
    // The opening slash never doubles as the closing one
    let (tokens, _) = scan_all("/*/ x */ y");
    assert_eq!(tokens[0].kind, TokenKind::Id);
    assert_eq!(tokens[0].spelling, "y");
    assert_eq!(tokens[0].position, SourcePosition::new(1, 10, 10));
}

#[test]
fn test_operators() {
    use TokenKind::*;
    assert_eq!(
        kinds("!= ! a & && || | <= >= == ="),
        vec![NotEq, Not, Id, Error, AndAnd, OrOr, Error, LtEq, GtEq, EqEq, Eq, Eof]
    );
}

#[test]
fn test_tab_stops() {
    let (tokens, _) = scan_all("\tx\n  \ty");
    assert_eq!(tokens[0].position, SourcePosition::new(1, 9, 9));
    assert_eq!(tokens[1].position, SourcePosition::new(2, 9, 9));
}

#[test]
fn test_token_display() {
    let (tokens, _) = scan_all("int");
    assert_eq!(
        tokens[0].to_string(),
        "Kind = Int [int], spelling = \"int\", position = 1(1)..1(3)"
    );
}
