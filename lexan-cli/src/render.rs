//! Token table rendering.
//! Token 表格渲染。

use lexan_common::Span;
use lexan_lexer::{Token, TokenKind, TokenValue};
use serde::Serialize;
use std::fmt::Write as _;

/// Output format for token listings.
/// Token 列表的输出格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table. / 对齐的文本表格。
    #[default]
    Table,
    /// JSON array of token objects. / token 对象的 JSON 数组。
    Json,
}

/// Rendering configuration.
/// 渲染配置。
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Include NEWLINE tokens.
    pub show_newlines: bool,
    /// Add an operator-name column for operator tokens.
    pub show_operator_names: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            show_newlines: true,
            show_operator_names: false,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Show or hide NEWLINE tokens.
    pub fn show_newlines(mut self, show: bool) -> Self {
        self.show_newlines = show;
        self
    }

    /// Show or hide the operator-name column.
    pub fn show_operator_names(mut self, show: bool) -> Self {
        self.show_operator_names = show;
        self
    }
}

/// Render tokens according to `config`.
/// 按照 `config` 渲染 token。
pub fn render(tokens: &[Token], config: &RenderConfig) -> Result<String, String> {
    let visible: Vec<&Token> = tokens
        .iter()
        .filter(|t| config.show_newlines || t.kind != TokenKind::Newline)
        .collect();

    match config.format {
        OutputFormat::Table => Ok(render_table(&visible, config)),
        OutputFormat::Json => render_json(&visible, config),
    }
}

const HEADERS: [&str; 5] = ["TYPE", "VALUE", "LINE", "INDEX", "BLOCK"];

fn render_table(tokens: &[&Token], config: &RenderConfig) -> String {
    let rows: Vec<Vec<String>> = tokens
        .iter()
        .map(|token| {
            let mut row = vec![
                token.kind.to_string(),
                escape(&token.value.to_string()),
                token.line.to_string(),
                token.column.to_string(),
                token.block_depth.to_string(),
            ];
            if config.show_operator_names {
                row.push(token.operator_name().unwrap_or_default().to_owned());
            }
            row
        })
        .collect();

    let mut headers: Vec<&str> = HEADERS.to_vec();
    if config.show_operator_names {
        headers.push("OPERATOR");
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, headers.iter().copied(), &widths);
    for row in &rows {
        write_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut line = String::new();
    for (cell, &width) in cells.zip(widths) {
        let _ = write!(line, "{cell:<width$}  ");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Make control characters visible in a single table cell.
/// 使控制字符在单个表格单元中可见。
fn escape(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n").replace('\t', "\\t")
}

#[derive(Serialize)]
#[serde(untagged)]
enum RowValue<'a> {
    Number(f64),
    Text(&'a str),
}

#[derive(Serialize)]
struct TokenRow<'a> {
    #[serde(rename = "type")]
    kind: String,
    value: RowValue<'a>,
    line: usize,
    index: usize,
    block: i32,
    span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    operator: Option<&'static str>,
}

fn render_json(tokens: &[&Token], config: &RenderConfig) -> Result<String, String> {
    let rows: Vec<TokenRow<'_>> = tokens
        .iter()
        .map(|token| TokenRow {
            kind: token.kind.to_string(),
            value: match &token.value {
                TokenValue::Number(n) => RowValue::Number(*n),
                TokenValue::Text(text) => RowValue::Text(text),
            },
            line: token.line,
            index: token.column,
            block: token.block_depth,
            span: token.span,
            operator: if config.show_operator_names {
                token.operator_name()
            } else {
                None
            },
        })
        .collect();

    serde_json::to_string_pretty(&rows).map_err(|e| format!("cannot serialize tokens: {e}"))
}
