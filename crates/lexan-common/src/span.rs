//! Source code span and position tracking.
//! 源码范围和位置跟踪。
//!
//! Offsets count `char`s, not bytes, which is what ariadne expects when
//! labelling a `Source`.
//! 偏移量以字符而非字节计数，与 ariadne 对 `Source` 的标注方式一致。

use serde::Serialize;
use std::fmt;

/// A character position in source code.
/// 源码中的字符位置。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Pos(pub u32);

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({})", self.0)
    }
}

/// Offsets past `u32::MAX` saturate.
impl From<usize> for Pos {
    fn from(pos: usize) -> Self {
        Pos(u32::try_from(pos).unwrap_or(u32::MAX))
    }
}

impl From<Pos> for usize {
    fn from(pos: Pos) -> Self {
        pos.0 as usize
    }
}

/// A span representing a range in source code.
/// 表示源码中一个范围的 Span。
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Start position. / 起始位置。
    pub start: Pos,
    /// End position (exclusive). / 结束位置（不包含）。
    pub end: Pos,
}

impl Span {
    pub fn from_usize(start: usize, end: usize) -> Self {
        Span {
            start: Pos::from(start),
            end: Pos::from(end),
        }
    }

    /// A one-character span starting at `pos`.
    /// 从 `pos` 开始、长度为一个字符的范围。
    pub fn single(pos: usize) -> Self {
        Span::from_usize(pos, pos + 1)
    }

    /// Whether `pos` falls inside this span.
    pub fn contains(&self, pos: Pos) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Create a span that covers both `self` and `other`.
    /// 创建一个覆盖 `self` 和 `other` 的范围。
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: std::cmp::min(self.start, other.start),
            end: std::cmp::max(self.end, other.end),
        }
    }

    /// Returns the length of this span in characters.
    /// 返回此范围的字符长度。
    pub fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize
    }

    /// Returns true if this span has zero length.
    /// 如果此范围长度为零则返回 true。
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the character range for this span.
    /// 返回此范围对应的字符区间。
    pub fn range(&self) -> std::ops::Range<usize> {
        usize::from(self.start)..usize::from(self.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start.0, self.end.0)
    }
}
