//! Line/column locations as reported to users.

use serde::Serialize;
use std::fmt;

/// A 1-based line and 0-based column pair.
///
/// Columns count characters from the start of the line. Lexan reports
/// them under the name "index", matching the token table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// The location of the first character of a source file.
    pub const START: Location = Location { line: 1, column: 0 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, index {}", self.line, self.column)
    }
}
