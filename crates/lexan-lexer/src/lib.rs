//! Lexical analysis for Lexan.
//! Lexan 词法分析模块。
//!
//! This crate turns source text into classified tokens annotated with line,
//! column, and brace depth.
//! 本 crate 将源代码转换为带有行号、列号和花括号深度的分类 token。

mod cursor;
mod error;
mod lexer;
mod rules;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use rules::{KEYWORDS, Rule, RuleTable, rules};
pub use token::{Token, TokenKind, TokenValue};

/// Tokenize a complete source text.
/// 对完整的源文本进行词法分析。
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
