//! CLI command implementations.

pub mod check;
pub mod expr;
pub mod tokens;

use lexan_diagnostic::emit;
use lexan_lexer::{Token, tokenize};
use std::fs;

/// Read a source file into memory.
pub(crate) fn read_source(file: &str) -> Result<String, String> {
    fs::read_to_string(file).map_err(|e| format!("cannot read file '{}': {}", file, e))
}

/// Tokenize `source`, rendering any lexical error against `name`.
pub(crate) fn lex_source(source: &str, name: &str) -> Result<Vec<Token>, String> {
    tokenize(source).map_err(|error| {
        if let Err(io) = emit(source, name, &error.to_diagnostic()) {
            tracing::warn!(%io, "cannot render diagnostic");
        }
        format!("lexical error in {name}")
    })
}
