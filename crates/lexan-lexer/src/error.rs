//! Lexical errors.

use lexan_common::{Location, Span};
use lexan_diagnostic::{Diagnostic, ErrorCode, Label};
use thiserror::Error;

/// A fatal scan error. The scan stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unknown character '{ch}' at {location}")]
    UnknownCharacter {
        ch: char,
        location: Location,
        span: Span,
    },

    /// `location` is where the string starts.
    #[error("unterminated string at {location}")]
    UnterminatedString { location: Location, span: Span },

    /// `location` is where the comment starts.
    #[error("unterminated multi-line comment at {location}")]
    UnterminatedComment { location: Location, span: Span },
}

impl LexError {
    pub fn location(&self) -> Location {
        match self {
            LexError::UnknownCharacter { location, .. }
            | LexError::UnterminatedString { location, .. }
            | LexError::UnterminatedComment { location, .. } => *location,
        }
    }

    pub fn line(&self) -> usize {
        self.location().line
    }

    pub fn column(&self) -> usize {
        self.location().column
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnknownCharacter { span, .. }
            | LexError::UnterminatedString { span, .. }
            | LexError::UnterminatedComment { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnknownCharacter { .. } => ErrorCode::UnexpectedCharacter,
            LexError::UnterminatedString { .. } => ErrorCode::UnterminatedString,
            LexError::UnterminatedComment { .. } => ErrorCode::UnterminatedComment,
        }
    }

    /// Convert into a diagnostic pointing at the offending source.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self {
            LexError::UnknownCharacter { .. } => "unknown character here",
            LexError::UnterminatedString { .. } => "string starts here",
            LexError::UnterminatedComment { .. } => "comment starts here",
        };
        let code = self.code();
        Diagnostic::error(self.span(), self.to_string())
            .with_code(code)
            .with_label(Label::new(self.span(), label))
            .with_note(code.description())
    }
}

impl From<&LexError> for Diagnostic {
    fn from(error: &LexError) -> Self {
        error.to_diagnostic()
    }
}
