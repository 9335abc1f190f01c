//! Lexan: a lexical analyzer for a small C/JS-like language.
//! Lexan：一个面向类 C/JS 小型语言的词法分析器。
//!
//! This facade re-exports the workspace crates so integration tests and
//! downstream users can depend on a single package.

pub use lexan_common as common;
pub use lexan_diagnostic as diagnostic;
pub use lexan_lexer as lexer;

pub use lexan_lexer::{LexError, Token, TokenKind, TokenValue, tokenize};
