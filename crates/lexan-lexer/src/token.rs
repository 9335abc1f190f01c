//! Token definitions for Lexan.

use crate::rules::rules;
use lexan_common::{Location, Span};
use std::fmt;

/// A scanned token with its value, position, and block depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// 1-based line the token was recognized on.
    pub line: usize,
    /// 0-based column, see `Cursor::sync_column` for when it is refreshed.
    pub column: usize,
    /// `{` seen minus `}` seen when the token was emitted. May be negative.
    pub block_depth: i32,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        value: TokenValue,
        location: Location,
        block_depth: i32,
        span: Span,
    ) -> Self {
        Self {
            kind,
            value,
            line: location.line,
            column: location.column,
            block_depth,
            span,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    /// The textual payload, or `None` for numbers.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            TokenValue::Number(_) => None,
        }
    }

    /// The numeric payload, or `None` for non-numbers.
    pub fn number(&self) -> Option<f64> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            TokenValue::Text(_) => None,
        }
    }

    /// Canonical operator name (`plus`, `assignment`, ...) for operator tokens.
    pub fn operator_name(&self) -> Option<&'static str> {
        if self.kind != TokenKind::Operator {
            return None;
        }
        self.text().and_then(|symbol| rules().operator_name(symbol))
    }
}

/// The payload of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Numeric literals carry their parsed value.
    Number(f64),
    /// Everything else carries its literal text.
    Text(String),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{n}"),
            TokenValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        TokenValue::Text(text.to_owned())
    }
}

impl From<String> for TokenValue {
    fn from(text: String) -> Self {
        TokenValue::Text(text)
    }
}

impl From<char> for TokenValue {
    fn from(ch: char) -> Self {
        TokenValue::Text(ch.to_string())
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Newline,
    Number,
    Identifier,
    Keyword,
    Operator,

    // Brackets
    LeftParen,          // (
    RightParen,         // )
    LeftBrace,          // {
    RightBrace,         // }
    LeftSquareBracket,  // [
    RightSquareBracket, // ]
    /// Bracket with no registered name, tagged with its character.
    Bracket(char),

    // Delimiters
    DelimiterColon,     // :
    DelimiterSemicolon, // ;
    DelimiterComma,     // ,
    DelimiterDot,       // .
    /// Delimiter with no registered name, tagged with its character.
    Delimiter(char),

    String,
    Comment,
}

impl TokenKind {
    /// Canonical display name of this kind.
    ///
    /// Generic brackets and delimiters have no name of their own and are
    /// displayed as their literal character instead.
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            TokenKind::Newline => "NEWLINE",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftSquareBracket => "LEFT_SQUARE_BRACKET",
            TokenKind::RightSquareBracket => "RIGHT_SQUARE_BRACKET",
            TokenKind::DelimiterColon => "Delimiter_COLON",
            TokenKind::DelimiterSemicolon => "Delimiter_SEMICOLON",
            TokenKind::DelimiterComma => "Delimiter_COMMA",
            TokenKind::DelimiterDot => "Delimiter_DOT",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Bracket(_) | TokenKind::Delimiter(_) => return None,
        };
        Some(name)
    }

    /// Returns true for the six named brackets and the generic bracket.
    pub fn is_bracket(&self) -> bool {
        matches!(
            self,
            TokenKind::LeftParen
                | TokenKind::RightParen
                | TokenKind::LeftBrace
                | TokenKind::RightBrace
                | TokenKind::LeftSquareBracket
                | TokenKind::RightSquareBracket
                | TokenKind::Bracket(_)
        )
    }

    /// Returns true for the four named delimiters and the generic delimiter.
    pub fn is_delimiter(&self) -> bool {
        matches!(
            self,
            TokenKind::DelimiterColon
                | TokenKind::DelimiterSemicolon
                | TokenKind::DelimiterComma
                | TokenKind::DelimiterDot
                | TokenKind::Delimiter(_)
        )
    }

    /// Returns true for tokens that carry no grammatical meaning.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Bracket(ch) | TokenKind::Delimiter(ch) => write!(f, "{ch}"),
            other => f.write_str(other.name().unwrap_or_default()),
        }
    }
}
