//! Common source location types for Lexan.
//!
//! This crate provides the position types used by the lexer and the
//! diagnostic renderer:
//! - `Pos`: a character offset into the source text
//! - `Span`: a half-open range of character offsets
//! - `Location`: a line/column pair for user-facing messages

mod location;
mod span;

pub use location::Location;
pub use span::{Pos, Span};
