//! Scan state shared by the dispatch loop and the sub-scans.
//! 主循环与各子扫描共享的扫描状态。

use crate::token::{Token, TokenKind, TokenValue};
use lexan_common::{Location, Span};

/// Character cursor over the input text.
/// 输入文本上的字符游标。
///
/// Also tracks the current line, the offset the line starts at, the column
/// handed to new tokens, and the brace nesting depth.
/// 同时跟踪当前行号、行起始偏移、新 token 使用的列号以及花括号嵌套深度。
#[derive(Debug)]
pub(crate) struct Cursor {
    chars: Vec<char>,
    pos: usize,
    current: Option<char>,
    line: usize,
    line_start: usize,
    column: usize,
    depth: i32,
}

impl Cursor {
    pub(crate) fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let current = chars.first().copied();
        Self {
            chars,
            pos: 0,
            current,
            line: 1,
            line_start: 0,
            column: 0,
            depth: 0,
        }
    }

    /// Character under the cursor, `None` at end of input.
    /// 游标处的字符，输入结束时为 `None`。
    pub(crate) fn current(&self) -> Option<char> {
        self.current
    }

    /// Character just after the cursor.
    /// 游标后一个字符。
    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Move one character forward.
    /// 前进一个字符。
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
        self.current = self.chars.get(self.pos).copied();
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.current.is_none()
    }

    pub(crate) fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    pub(crate) fn depth(&self) -> i32 {
        self.depth
    }

    /// Record that the cursor has just stepped over a `\n`.
    /// 记录游标刚刚越过一个 `\n`。
    pub(crate) fn start_line(&mut self) {
        self.line += 1;
        self.line_start = self.pos;
    }

    pub(crate) fn open_block(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn close_block(&mut self) {
        self.depth -= 1;
    }

    /// Refresh the column used for upcoming tokens.
    /// 刷新后续 token 使用的列号。
    ///
    /// The column only moves when the cursor rests on a non-whitespace
    /// character (end of input counts as non-whitespace). A token scanned
    /// right after leading whitespace on a new line therefore keeps the
    /// column of an earlier position.
    /// 只有当游标停在非空白字符上（输入结束也算）时列号才会更新。
    pub(crate) fn sync_column(&mut self) {
        if !self.current.is_some_and(is_blank) {
            self.column = self.pos - self.line_start;
        }
    }

    /// Build a token at the current line, column, and depth.
    /// 以当前行、列和深度构建 token。
    pub(crate) fn token(&self, kind: TokenKind, value: TokenValue, span: Span) -> Token {
        Token::new(kind, value, self.location(), self.depth, span)
    }
}

/// Whitespace as the language defines it.
/// 语言定义的空白字符。
///
/// Includes U+FEFF so a byte-order mark is skipped, and excludes U+0085,
/// which `char::is_whitespace` would accept.
/// 包含 U+FEFF（字节序标记会被跳过），不包含 U+0085。
pub(crate) fn is_blank(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
