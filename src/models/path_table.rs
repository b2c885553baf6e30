// src/models/path_table.rs
//
// Ordered segment layout with cumulative distance intervals.
// Rebuilt once per layout pass; segments are validated here so the
// resolver never sees a zero-length interval.

use thiserror::Error;

use crate::models::Segment;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PathError {
    #[error("path has no segments to resolve")]
    EmptyPath,
    #[error("segment {index} has non-positive length {length}")]
    DegenerateSegment { index: usize, length: f32 },
}

/// Distance interval one segment covers along the whole path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

#[derive(Debug, Clone, Default)]
pub struct PathTable {
    segments: Vec<Segment>,
    spans: Vec<Span>,
    total_length: f32,
}

impl PathTable {
    /// Builds the cumulative layout. Zero- and negative-length segments are
    /// rejected here; an empty table is allowed and only fails at resolve
    /// time.
    pub fn new(segments: Vec<Segment>) -> Result<Self, PathError> {
        let mut spans = Vec::with_capacity(segments.len());
        let mut cursor = 0.0;

        for (index, segment) in segments.iter().enumerate() {
            if segment.length <= 0.0 {
                return Err(PathError::DegenerateSegment {
                    index,
                    length: segment.length,
                });
            }
            spans.push(Span {
                start: cursor,
                end: cursor + segment.length,
            });
            cursor += segment.length;
        }

        Ok(Self {
            segments,
            spans,
            total_length: cursor,
        })
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Finds the segment covering `target_distance` and the normalized
    /// position within it. At a boundary shared by two spans the next
    /// segment wins, so a shared boundary resolves to local_t == 0 in the
    /// later segment. The last span is closed at its end so the path's
    /// endpoint resolves to local_t == 1.
    pub fn locate(&self, target_distance: f32) -> Option<(usize, f32)> {
        if self.segments.is_empty() {
            return None;
        }

        let mut index = self.spans.len() - 1;
        for (i, span) in self.spans.iter().enumerate() {
            if target_distance < span.end {
                index = i;
                break;
            }
        }

        let span = self.spans[index];
        let local_t = (target_distance - span.start) / self.segments[index].length;
        Some((index, local_t.clamp(0.0, 1.0)))
    }
}
