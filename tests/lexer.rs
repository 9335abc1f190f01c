//! Integration tests for lexan-lexer crate.

use lexan_lexer::{KEYWORDS, LexError, Lexer, Token, TokenKind, TokenValue, tokenize};
use proptest::prelude::*;

fn lex(source: &str) -> Vec<Token> {
    tokenize(source).expect("source should tokenize")
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

fn text(value: &str) -> TokenValue {
    TokenValue::from(value)
}

// ============================================================================
// Words
// ============================================================================

#[test]
fn test_every_keyword_alone() {
    for keyword in KEYWORDS {
        let tokens = lex(keyword);
        assert_eq!(tokens.len(), 1, "keyword {keyword}");
        assert_eq!(tokens[0].kind, TokenKind::Keyword, "keyword {keyword}");
        assert_eq!(tokens[0].text(), Some(*keyword));
    }
}

#[test]
fn test_identifiers() {
    for word in ["x", "whileLoop", "Int", "a_b", "x1", "mainly"] {
        let tokens = lex(word);
        assert_eq!(tokens.len(), 1, "word {word}");
        assert_eq!(tokens[0].kind, TokenKind::Identifier, "word {word}");
        assert_eq!(tokens[0].text(), Some(word));
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(kinds("While"), vec![TokenKind::Identifier]);
    assert_eq!(kinds("while"), vec![TokenKind::Keyword]);
}

#[test]
fn test_attached_assignment() {
    let tokens = lex("x=5");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, text("x"));
    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].value, text("="));
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].number(), Some(5.0));

    // The `=` shares the word's line and column.
    assert_eq!(tokens[1].location(), tokens[0].location());
}

#[test]
fn test_detached_assignment() {
    let tokens = lex("x = 5");
    assert_eq!(
        kinds("x = 5"),
        vec![TokenKind::Identifier, TokenKind::Operator, TokenKind::Number]
    );
    assert_eq!(tokens[1].column, 2);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_numbers() {
    assert_eq!(lex("42")[0].number(), Some(42.0));
    assert_eq!(lex("3.25")[0].number(), Some(3.25));
}

#[test]
fn test_number_with_extra_dots() {
    let tokens = lex("1.2.3");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].number(), Some(1.2));
    assert_eq!(tokens[0].span.range(), 0..5);
}

#[test]
fn test_number_then_word() {
    assert_eq!(
        kinds("12ab"),
        vec![TokenKind::Number, TokenKind::Identifier]
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_strings() {
    for source in ["'hello'", "\"hello\""] {
        let tokens = lex(source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].value, text("hello"));
    }
}

#[test]
fn test_string_keeps_other_quote() {
    let tokens = lex("\"it's\"");
    assert_eq!(tokens[0].value, text("it's"));
}

#[test]
fn test_string_has_no_escapes() {
    let tokens = lex(r"'a\n'");
    assert_eq!(tokens[0].value, text(r"a\n"));
}

#[test]
fn test_multiline_string_keeps_line() {
    let tokens = lex("'a\nb' c");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, text("a\nb"));
    assert_eq!(tokens[1].line, 1);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("x 'hello").unwrap_err();
    assert!(matches!(error, LexError::UnterminatedString { .. }));
    assert_eq!(error.line(), 1);
    assert_eq!(error.column(), 2);
}

// ============================================================================
// Comments
// ============================================================================

#[test]
fn test_block_comment() {
    let tokens = lex("/* a */");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[0].value, text(" a "));
}

#[test]
fn test_line_comment() {
    let tokens = lex("// a\nb");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Newline);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, text("b"));
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_line_comment_at_end() {
    assert_eq!(kinds("a // trailing"), vec![TokenKind::Identifier]);
}

#[test]
fn test_unterminated_comment() {
    let error = tokenize("/* a").unwrap_err();
    assert!(matches!(error, LexError::UnterminatedComment { .. }));
    assert_eq!(error.line(), 1);
}

// ============================================================================
// Punctuation
// ============================================================================

#[test]
fn test_operators() {
    let source = "+ - * ^ ~ & | % ! < > . : =";
    let tokens = lex(source);
    assert_eq!(tokens.len(), 14);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Operator));
    assert_eq!(tokens[7].operator_name(), Some("remainder"));
    assert_eq!(tokens[12].operator_name(), Some("colon"));
}

#[test]
fn test_brackets() {
    assert_eq!(
        kinds("()[]{}"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftSquareBracket,
            TokenKind::RightSquareBracket,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
        ]
    );
}

#[test]
fn test_statement() {
    assert_eq!(
        kinds("int a, b;"),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::DelimiterComma,
            TokenKind::Identifier,
            TokenKind::DelimiterSemicolon,
        ]
    );
}

#[test]
fn test_unknown_character() {
    let error = tokenize("@").unwrap_err();
    assert!(matches!(error, LexError::UnknownCharacter { ch: '@', .. }));
    assert_eq!(error.line(), 1);
    assert_eq!(error.to_string(), "unknown character '@' at line 1, index 0");
}

#[test]
fn test_unknown_character_stops_scan() {
    let error = tokenize("a b\nc # d").unwrap_err();
    assert!(matches!(error, LexError::UnknownCharacter { ch: '#', .. }));
    assert_eq!(error.line(), 2);
    assert_eq!(error.column(), 2);
    assert_eq!(error.span().range(), 6..7);
}

#[test]
fn test_byte_order_mark_is_whitespace() {
    let tokens = lex("\u{FEFF}int x;");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::DelimiterSemicolon,
        ]
    );
    assert_eq!(tokens[0].column, 1);
    assert_eq!(kinds("a\u{3000}b\u{A0}c").len(), 3);
}

#[test]
fn test_next_line_character_is_unknown() {
    let error = tokenize("a\u{85}b").unwrap_err();
    assert!(matches!(error, LexError::UnknownCharacter { ch: '\u{85}', .. }));
    assert_eq!(error.column(), 1);
}

#[test]
fn test_non_ascii_letter_is_unknown() {
    let error = tokenize("é").unwrap_err();
    assert!(matches!(error, LexError::UnknownCharacter { ch: 'é', .. }));
}

// ============================================================================
// Block depth
// ============================================================================

#[test]
fn test_nested_brace_depths() {
    let tokens = lex("{ { } }");
    let depths: Vec<i32> = tokens.iter().map(|t| t.block_depth).collect();
    assert_eq!(depths, vec![1, 2, 1, 0]);
    assert!(tokens.iter().all(|t| t.kind.is_bracket()));
}

#[test]
fn test_tokens_inside_block() {
    let tokens = lex("if (x) { y; }");
    let y = tokens
        .iter()
        .find(|t| t.text() == Some("y"))
        .expect("y token");
    assert_eq!(y.block_depth, 1);
    assert_eq!(tokens[0].block_depth, 0);
}

#[test]
fn test_balanced_final_depth() {
    let source = "{ a { b } { c { d } } }";
    let tokens = lex(source);
    let opens = source.matches('{').count() as i32;
    let closes = source.matches('}').count() as i32;
    let last = tokens.last().expect("non-empty");
    assert_eq!(last.block_depth, opens - closes);
    assert!(tokens.iter().all(|t| t.block_depth >= 0));
}

/// Build a balanced brace source from open/close choices. A close with
/// nothing open becomes an open, and leftover opens are closed at the end.
fn balanced_source(steps: &[(bool, bool)]) -> String {
    let mut source = String::new();
    let mut depth = 0usize;
    for &(open, word) in steps {
        if open || depth == 0 {
            source.push('{');
            depth += 1;
        } else {
            source.push('}');
            depth -= 1;
        }
        if word {
            source.push_str(" a ");
        }
    }
    source.push_str(&"}".repeat(depth));
    source
}

proptest! {
    #[test]
    fn test_balanced_braces_any_nesting(
        steps in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..64)
    ) {
        let source = balanced_source(&steps);
        let tokens = tokenize(&source).expect("braces and words tokenize");

        let mut running = 0i32;
        for token in &tokens {
            match token.kind {
                TokenKind::LeftBrace => running += 1,
                TokenKind::RightBrace => running -= 1,
                _ => {}
            }
            prop_assert_eq!(token.block_depth, running);
            prop_assert!(token.block_depth >= 0);
        }

        let opens = source.matches('{').count() as i32;
        let closes = source.matches('}').count() as i32;
        let final_depth = tokens.last().map_or(0, |t| t.block_depth);
        prop_assert_eq!(final_depth, opens - closes);
        prop_assert_eq!(final_depth, 0);
    }
}

#[test]
fn test_depth_may_go_negative() {
    let tokens = lex("} {");
    assert_eq!(tokens[0].block_depth, -1);
    assert_eq!(tokens[1].block_depth, 0);
}

// ============================================================================
// Lines and columns
// ============================================================================

#[test]
fn test_newline_tokens() {
    let tokens = lex("a\nb\nc");
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 1, 2, 2, 3]);
    assert_eq!(tokens[1].value, text("\n"));
    assert_eq!(tokens[4].column, 0);
}

#[test]
fn test_columns_after_spaces() {
    let tokens = lex("ab  cd\n  ef");
    assert_eq!(tokens[0].column, 0);
    assert_eq!(tokens[1].column, 4);
    assert_eq!(tokens[3].line, 2);
    assert_eq!(tokens[3].column, 2);
}

#[test]
fn test_newline_after_trailing_space_keeps_old_column() {
    let tokens = lex("ab \nc");
    assert_eq!(tokens[1].kind, TokenKind::Newline);
    assert_eq!(tokens[1].column, 0);
    assert_eq!(tokens[1].span.range(), 3..4);
}

#[test]
fn test_empty_source() {
    assert!(lex("").is_empty());
    assert!(lex("  \t ").is_empty());
}

// ============================================================================
// Lexer API
// ============================================================================

#[test]
fn test_lexer_matches_free_function() {
    let source = "while (i < 10) { i = i + 1; }";
    assert_eq!(Lexer::new(source).tokenize().unwrap(), lex(source));
}

#[test]
fn test_parallel_scans() {
    let sources = ["int a;", "{ b }", "'c' /* d */", "e=1.5"];
    let handles: Vec<_> = sources
        .iter()
        .map(|source| {
            let source = source.to_string();
            std::thread::spawn(move || tokenize(&source).map(|tokens| tokens.len()))
        })
        .collect();

    let counts: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked").expect("tokenize"))
        .collect();
    assert_eq!(counts, vec![3, 3, 2, 3]);
}
