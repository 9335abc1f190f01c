//! The `lexan check` command.
//! `lexan check` 命令。

use super::{lex_source, read_source};
use crate::output;
use lexan_diagnostic::{Diagnostic, ErrorCode, Label};
use lexan_lexer::{Token, TokenKind};

/// Tokenize a file and report whether it scans cleanly.
/// 对文件进行词法分析并报告是否通过。
pub fn run(file: &str, verbose: bool) -> Result<(), String> {
    let source = read_source(file)?;
    let tokens = lex_source(&source, file)?;

    if verbose {
        let comments = tokens.iter().filter(|t| t.kind == TokenKind::Comment).count();
        let lines = tokens.iter().map(|t| t.line).max().unwrap_or(1);
        eprintln!("{} tokens, {} comments, {} lines", tokens.len(), comments, lines);
    }

    // Unbalanced braces do not stop the scan; report them as a warning.
    // 花括号不平衡不会中断扫描，作为警告报告。
    if let Some(diagnostic) = unbalanced_braces(&tokens) {
        output::diagnostic(&source, file, &diagnostic);
        output::warning(&diagnostic.message);
    }

    output::success(&format!("OK - {} tokens", tokens.len()));
    Ok(())
}

/// Warn about the first `}` that closes nothing, or the innermost `{` left open.
/// 对第一个多余的 `}` 或最内层未闭合的 `{` 给出警告。
fn unbalanced_braces(tokens: &[Token]) -> Option<Diagnostic> {
    if let Some(extra) = tokens
        .iter()
        .find(|t| t.kind == TokenKind::RightBrace && t.block_depth < 0)
    {
        return Some(
            Diagnostic::warning(extra.span, "closing brace without a matching `{`")
                .with_code(ErrorCode::UnbalancedBraces)
                .with_label(Label::new(extra.span, "closes nothing")),
        );
    }

    let mut open: Vec<&Token> = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::LeftBrace => open.push(token),
            TokenKind::RightBrace => {
                open.pop();
            }
            _ => {}
        }
    }

    let last = open.last()?;
    Some(
        Diagnostic::warning(last.span, format!("{} unclosed brace(s)", open.len()))
            .with_code(ErrorCode::UnbalancedBraces)
            .with_label(Label::new(last.span, "opened here")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexan_lexer::tokenize;

    #[test]
    fn balanced_source_has_no_warning() {
        let tokens = tokenize("{ a { b } }").unwrap();
        assert!(unbalanced_braces(&tokens).is_none());
    }

    #[test]
    fn extra_closing_brace_is_reported() {
        let tokens = tokenize("} {").unwrap();
        let diagnostic = unbalanced_braces(&tokens).unwrap();
        assert_eq!(diagnostic.code, Some(ErrorCode::UnbalancedBraces));
        assert_eq!(diagnostic.span.range(), 0..1);
    }

    #[test]
    fn unclosed_brace_is_reported() {
        let tokens = tokenize("{ { }").unwrap();
        let diagnostic = unbalanced_braces(&tokens).unwrap();
        assert_eq!(diagnostic.message, "1 unclosed brace(s)");
        assert_eq!(diagnostic.span.range(), 0..1);
        assert!(!diagnostic.is_error());
    }
}
