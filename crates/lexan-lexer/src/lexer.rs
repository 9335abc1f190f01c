//! The Lexan lexer.
//! Lexan 词法分析器。

use crate::cursor::{Cursor, is_blank};
use crate::error::LexError;
use crate::rules::{RuleTable, rules};
use crate::token::{Token, TokenKind, TokenValue};
use lexan_common::Span;
use tracing::{debug, trace};

/// The Lexan lexer.
/// Lexan 词法分析器。
///
/// Converts source text into a sequence of tokens in a single pass. The
/// first error stops the scan and no tokens are returned with it.
/// 单遍将源码转换为 token 序列。遇到第一个错误即停止，且不返回任何 token。
pub struct Lexer {
    /// Scan position and line/column/depth bookkeeping
    /// 扫描位置以及行、列、深度的记录
    cursor: Cursor,
    /// Shared read-only rule table
    /// 共享的只读规则表
    rules: &'static RuleTable,
    /// Tokens emitted so far
    /// 已输出的 token
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            rules: rules(),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    /// 对整个源代码进行词法分析。
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        debug!(chars = self.cursor.len(), "tokenizing");

        while !self.cursor.is_eof() {
            if let Err(error) = self.step() {
                debug!(%error, emitted = self.tokens.len(), "tokenizing failed");
                return Err(error);
            }
            self.cursor.sync_column();
        }

        debug!(
            tokens = self.tokens.len(),
            depth = self.cursor.depth(),
            "tokenizing finished"
        );
        Ok(self.tokens)
    }

    /// Run one iteration of the dispatch loop.
    /// 执行一次分派循环。
    ///
    /// The arms are tried in order and several character sets overlap, so
    /// an earlier arm wins: `:` and `.` are operators, never delimiters, and
    /// `=`, `>` and `+` never reach the second operator arm.
    /// 各分支按顺序匹配且字符集有重叠，靠前的分支优先。
    fn step(&mut self) -> Result<(), LexError> {
        let Some(ch) = self.cursor.current() else {
            return Ok(());
        };
        let start = self.cursor.pos();

        match ch {
            // Newline - 换行
            '\n' => {
                let token = self.cursor.token(
                    TokenKind::Newline,
                    TokenValue::from(ch),
                    Span::single(start),
                );
                self.push(token);
                self.cursor.advance();
                self.cursor.start_line();
            }

            // Numbers - 数字
            c if c.is_ascii_digit() => {
                let token = scan_number(&mut self.cursor);
                self.push(token);
            }

            // Identifiers and keywords - 标识符和关键字
            c if c.is_ascii_alphabetic() => {
                let (word, assign) = scan_word(&mut self.cursor, self.rules);
                self.push(word);
                if let Some(assign) = assign {
                    self.push(assign);
                }
            }

            // Operators claimed before the delimiter arm - 优先于分隔符的运算符
            '+' | '=' | '.' | ':' | '>' => {
                self.push_operator(ch, start);
                self.cursor.advance();
            }

            // Delimiters - 分隔符
            ';' | ',' => {
                let token = scan_delimiter(&mut self.cursor, self.rules);
                self.push(token);
                self.cursor.advance();
            }

            // Brackets - 括号
            '(' | ')' | '{' | '}' | '[' | ']' => {
                let token = scan_bracket(&mut self.cursor, self.rules);
                self.push(token);
                self.cursor.advance();
            }

            // Strings advance past their own closing quote
            // 字符串自行越过结尾引号
            '\'' | '"' => {
                let token = scan_string(&mut self.cursor, ch)?;
                self.push(token);
            }

            // Whitespace - 空白字符
            c if is_blank(c) => self.cursor.advance(),

            // Remaining single-character operators - 其余单字符运算符
            '!' | '<' | '-' | '*' | '^' | '~' | '&' | '|' | '%' => {
                self.push_operator(ch, start);
                self.cursor.advance();
            }

            // Comments - 注释
            '/' if matches!(self.cursor.peek(), Some('/' | '*')) => {
                if let Some(token) = scan_comment(&mut self.cursor)? {
                    self.push(token);
                }
            }

            _ => {
                return Err(LexError::UnknownCharacter {
                    ch,
                    location: self.cursor.location(),
                    span: Span::single(start),
                });
            }
        }

        Ok(())
    }

    fn push(&mut self, token: Token) {
        trace!(
            kind = %token.kind,
            value = %token.value,
            line = token.line,
            column = token.column,
            depth = token.block_depth,
            "token"
        );
        self.tokens.push(token);
    }

    fn push_operator(&mut self, ch: char, start: usize) {
        let token = self
            .cursor
            .token(TokenKind::Operator, TokenValue::from(ch), Span::single(start));
        self.push(token);
    }
}

/// Scan a number: digits and dots, as many as follow.
/// 扫描数字：连续的数字和点。
///
/// Extra dots are accepted; the value is the longest prefix that reads as a
/// decimal number, so `1.2.3` is `1.2`.
/// 多余的点会被接受；取值为可解析为十进制数的最长前缀，因此 `1.2.3` 为 `1.2`。
fn scan_number(cursor: &mut Cursor) -> Token {
    let start = cursor.pos();
    let mut text = String::new();

    while let Some(ch) = cursor.current() {
        if ch.is_ascii_digit() || ch == '.' {
            text.push(ch);
            cursor.advance();
        } else {
            break;
        }
    }

    let value = leading_number(&text);
    cursor.token(
        TokenKind::Number,
        TokenValue::Number(value),
        Span::from_usize(start, cursor.pos()),
    )
}

/// Parse the leading `digits[.digits]` part of a digit/dot run.
/// 解析数字与点序列开头的 `digits[.digits]` 部分。
fn leading_number(text: &str) -> f64 {
    let int_end = text.find('.').unwrap_or(text.len());
    let frac_len = text[int_end..]
        .chars()
        .skip(1)
        .take_while(char::is_ascii_digit)
        .count();
    let end = if frac_len > 0 { int_end + 1 + frac_len } else { int_end };

    // The prefix is non-empty ASCII digits with at most one dot.
    text[..end].parse().unwrap_or(f64::NAN)
}

/// Scan an identifier or keyword, plus a directly attached `=`.
/// 扫描标识符或关键字，以及紧随其后的 `=`。
///
/// `x=` yields the word and an `=` operator sharing its column. The `=` is
/// consumed here, so the dispatch loop never sees it.
/// `x=` 会产生该单词以及与其同列的 `=` 运算符。
fn scan_word(cursor: &mut Cursor, rules: &RuleTable) -> (Token, Option<Token>) {
    let start = cursor.pos();
    let mut text = String::new();

    while let Some(ch) = cursor.current() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            text.push(ch);
            cursor.advance();
        } else {
            break;
        }
    }

    // Check for keywords - 检查是否为关键字
    let kind = if rules.is_keyword(&text) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    let word = cursor.token(kind, text.into(), Span::from_usize(start, cursor.pos()));

    let assign = if cursor.current() == Some('=') {
        let token = cursor.token(
            TokenKind::Operator,
            TokenValue::from('='),
            Span::single(cursor.pos()),
        );
        cursor.advance();
        Some(token)
    } else {
        None
    };

    (word, assign)
}

/// Build a delimiter token for the character under the cursor.
/// 为游标处的字符构建分隔符 token。
fn scan_delimiter(cursor: &mut Cursor, rules: &RuleTable) -> Token {
    let ch = cursor.current().unwrap_or_default();
    let kind = rules.delimiter_kind(ch);
    cursor.token(kind, ch.into(), Span::single(cursor.pos()))
}

/// Build a bracket token, adjusting the depth first for braces.
/// 构建括号 token，遇到花括号时先调整深度。
fn scan_bracket(cursor: &mut Cursor, rules: &RuleTable) -> Token {
    let ch = cursor.current().unwrap_or_default();
    match ch {
        '{' => cursor.open_block(),
        '}' => cursor.close_block(),
        _ => {}
    }
    let kind = rules.bracket_kind(ch);
    cursor.token(kind, ch.into(), Span::single(cursor.pos()))
}

/// Scan a quoted string up to the matching quote.
/// 扫描引号字符串，直到匹配的结尾引号。
///
/// There are no escapes and newlines are kept verbatim. The token takes the
/// line and column of the opening quote.
/// 不处理转义，换行原样保留。token 使用开头引号的行列。
fn scan_string(cursor: &mut Cursor, quote: char) -> Result<Token, LexError> {
    let start = cursor.pos();
    let location = cursor.location();
    let mut value = String::new();

    cursor.advance(); // opening quote

    loop {
        match cursor.current() {
            Some(ch) if ch == quote => break,
            Some(ch) => {
                value.push(ch);
                cursor.advance();
            }
            None => {
                return Err(LexError::UnterminatedString {
                    location,
                    span: Span::single(start),
                });
            }
        }
    }

    cursor.advance(); // closing quote

    let span = Span::from_usize(start, cursor.pos());
    Ok(Token::new(
        TokenKind::String,
        value.into(),
        location,
        cursor.depth(),
        span,
    ))
}

/// Scan a `//` or `/* */` comment.
/// 扫描 `//` 或 `/* */` 注释。
///
/// Line comments stop before the newline and produce nothing. Block comments
/// produce a COMMENT token with the text between the delimiters.
/// 行注释在换行前结束且不产生 token。块注释产生包含分隔符之间文本的 COMMENT token。
fn scan_comment(cursor: &mut Cursor) -> Result<Option<Token>, LexError> {
    let start = cursor.pos();

    if cursor.peek() == Some('/') {
        while !matches!(cursor.current(), Some('\n') | None) {
            cursor.advance();
        }
        return Ok(None);
    }

    let location = cursor.location();
    let mut value = String::new();

    cursor.advance(); // '/'
    cursor.advance(); // '*'

    while !(cursor.current() == Some('*') && cursor.peek() == Some('/')) {
        let Some(ch) = cursor.current() else {
            return Err(LexError::UnterminatedComment {
                location,
                span: Span::from_usize(start, start + 2),
            });
        };
        value.push(ch);
        cursor.advance();
    }

    cursor.advance(); // '*'
    cursor.advance(); // '/'

    let span = Span::from_usize(start, cursor.pos());
    Ok(Some(Token::new(
        TokenKind::Comment,
        value.into(),
        location,
        cursor.depth(),
        span,
    )))
}
