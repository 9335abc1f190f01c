//! The `lexan tokens` command.
//! `lexan tokens` 命令。

use super::{lex_source, read_source};
use crate::render::{RenderConfig, render};

/// Print the token table for a file.
/// 打印文件的 token 表。
pub fn run(file: &str, config: &RenderConfig) -> Result<(), String> {
    let source = read_source(file)?;
    let tokens = lex_source(&source, file)?;
    tracing::debug!(file, tokens = tokens.len(), "rendering tokens");
    print!("{}", render(&tokens, config)?);
    Ok(())
}
