//! Error codes for Lexan diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,
    UnterminatedComment,

    // Lexer warnings (W0001 - W0099)
    UnbalancedBraces,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",
            ErrorCode::UnterminatedComment => "E0003",
            ErrorCode::UnbalancedBraces => "W0001",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "unknown character in input",
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::UnterminatedComment => "multi-line comment is not terminated",
            ErrorCode::UnbalancedBraces => "braces are not balanced",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnterminatedString => {
                Some("add a closing quote of the same kind as the opening one")
            }
            ErrorCode::UnterminatedComment => Some("add `*/` to close the comment"),
            ErrorCode::UnbalancedBraces => Some("add the matching `{` or `}`"),
            ErrorCode::UnexpectedCharacter => None,
        }
    }

    /// Whether diagnostics with this code stop the scan.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ErrorCode::UnbalancedBraces)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
