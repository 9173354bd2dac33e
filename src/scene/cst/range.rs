//! Position and range tracking for source locations
//!
//! Tokens record where they came from so that editor integrations can map diagnostics and
//! hovered syntax nodes back to the scene text.
//!
//! ## Key Design
//!
//! - **1-based positions**: lines and columns start at 1, as editors display them
//! - **Columns count characters**, not bytes, so Cyrillic text lines up with what users see
//! - **Byte spans preserved**: the span indexes directly into the source `&str`
//! - **Exclusive end**: `end` is the position right after the last character of the range

use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;

/// A line:column position in scene source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position after consuming `text` starting from `self`.
    pub fn advance(self, text: &str) -> Self {
        let mut next = self;
        for ch in text.chars() {
            if ch == '\n' {
                next.line += 1;
                next.column = 1;
            } else {
                next.column += 1;
            }
        }
        next
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A source range: byte span plus start and (exclusive) end positions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub span: ByteRange<usize>,
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(span: ByteRange<usize>, start: Position, end: Position) -> Self {
        Self { span, start, end }
    }

    /// Zero-width range at a position
    pub fn empty_at(offset: usize, position: Position) -> Self {
        Self::new(offset..offset, position, position)
    }

    /// Check if a position falls inside this range
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Check if a byte offset falls inside this range
    pub fn contains_offset(&self, offset: usize) -> bool {
        self.span.contains(&offset)
    }

    /// Check if another range overlaps with this one
    pub fn overlaps(&self, other: &Range) -> bool {
        self.span.start < other.span.end && other.span.start < self.span.end
    }

    /// Build the smallest range containing all provided ranges.
    pub fn bounding_box<'a, I>(mut ranges: I) -> Option<Range>
    where
        I: Iterator<Item = &'a Range>,
    {
        let first = ranges.next()?.clone();
        Some(ranges.fold(first, |acc, range| {
            let (span_start, start) = if range.span.start < acc.span.start {
                (range.span.start, range.start)
            } else {
                (acc.span.start, acc.start)
            };
            let (span_end, end) = if range.span.end > acc.span.end {
                (range.span.end, range.end)
            } else {
                (acc.span.end, acc.end)
            };
            Range::new(span_start..span_end, start, end)
        }))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::empty_at(0, Position::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_advance_counts_chars() {
        let start = Position::new(1, 1);
        assert_eq!(start.advance("Экран"), Position::new(1, 6));
        assert_eq!(start.advance("ab\ncd"), Position::new(2, 3));
        assert_eq!(start.advance("\n"), Position::new(2, 1));
    }

    #[test]
    fn test_position_comparison() {
        assert!(Position::new(1, 5) < Position::new(2, 1));
        assert!(Position::new(2, 1) < Position::new(2, 3));
    }

    #[test]
    fn test_range_contains_is_end_exclusive() {
        let range = Range::new(0..4, Position::new(1, 1), Position::new(1, 5));
        assert!(range.contains(Position::new(1, 1)));
        assert!(range.contains(Position::new(1, 4)));
        assert!(!range.contains(Position::new(1, 5)));
        assert!(range.contains_offset(3));
        assert!(!range.contains_offset(4));
    }

    #[test]
    fn test_range_overlaps() {
        let a = Range::new(0..5, Position::new(1, 1), Position::new(1, 6));
        let b = Range::new(4..8, Position::new(1, 5), Position::new(1, 9));
        let c = Range::new(5..8, Position::new(1, 6), Position::new(1, 9));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_bounding_box() {
        let ranges = [
            Range::new(6..10, Position::new(1, 7), Position::new(1, 11)),
            Range::new(0..5, Position::new(1, 1), Position::new(1, 6)),
            Range::new(11..12, Position::new(1, 12), Position::new(2, 1)),
        ];
        let bbox = Range::bounding_box(ranges.iter()).unwrap();
        assert_eq!(bbox.span, 0..12);
        assert_eq!(bbox.start, Position::new(1, 1));
        assert_eq!(bbox.end, Position::new(2, 1));

        assert!(Range::bounding_box(std::iter::empty()).is_none());
    }
}
