//! Byte offset to line/column conversion.

use crate::span::{Location, Position, Span};

/// Line start table for a piece of text.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to a position.
    ///
    /// Uses binary search for O(log n) lookup. Returns `None` past the end of
    /// the text or inside a multi-byte character.
    pub fn position(&self, offset: usize) -> Option<Position> {
        if offset > self.source.len() || !self.source.is_char_boundary(offset) {
            return None;
        }

        let line_idx = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line_idx];
        let column = self.source[line_start..offset].chars().count();

        Some(Position::new((line_idx + 1) as u32, column as u32))
    }

    pub fn location(&self, span: Span) -> Option<Location> {
        Some(Location::new(
            self.position(span.start)?,
            self.position(span.end)?,
        ))
    }
}
