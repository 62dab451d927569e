//! Line/column spans for reported locations

use super::span::{LineCol, LineIndex, TextRange};

/// A range in source code as 0-indexed line/column pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: LineCol,
    pub end: LineCol,
}

impl Span {
    /// Convert a byte range into a line/column span
    pub fn from_range(index: &LineIndex, range: TextRange) -> Self {
        Self {
            start: index.line_col(range.start()),
            end: index.line_col(range.end()),
        }
    }
}
