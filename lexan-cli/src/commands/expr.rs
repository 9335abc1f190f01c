//! The `lexan expr` command.

use super::lex_source;
use crate::render::{RenderConfig, render};

/// Print the token table for source text given on the command line.
pub fn run(source: &str, config: &RenderConfig) -> Result<(), String> {
    let tokens = lex_source(source, "<expr>")?;
    print!("{}", render(&tokens, config)?);
    Ok(())
}
