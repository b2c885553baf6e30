// src/models/segment.rs
// Declarative segment types for the scroll path

/// Orientation of one straight stretch of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Horizontal,
    Vertical,
    Diagonal,
}

/// One straight stretch of the path, declared in document coordinates
/// (y grows downward). `angle_degrees` only matters for diagonals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub length: f32,
    pub origin: (f32, f32),
    pub angle_degrees: f32,
}

impl Segment {
    pub fn horizontal(length: f32, x: f32, y: f32) -> Self {
        Self {
            kind: SegmentKind::Horizontal,
            length,
            origin: (x, y),
            angle_degrees: 0.0,
        }
    }

    pub fn vertical(length: f32, x: f32, y: f32) -> Self {
        Self {
            kind: SegmentKind::Vertical,
            length,
            origin: (x, y),
            angle_degrees: 90.0,
        }
    }

    pub fn diagonal(length: f32, angle_degrees: f32, x: f32, y: f32) -> Self {
        Self {
            kind: SegmentKind::Diagonal,
            length,
            origin: (x, y),
            angle_degrees,
        }
    }

    /// Where the segment ends, in document coordinates.
    pub fn endpoint(&self) -> (f32, f32) {
        let (x, y) = self.origin;
        match self.kind {
            SegmentKind::Horizontal => (x + self.length, y),
            SegmentKind::Vertical => (x, y + self.length),
            SegmentKind::Diagonal => {
                let angle = self.angle_degrees.to_radians();
                (x + angle.cos() * self.length, y + angle.sin() * self.length)
            }
        }
    }
}

/// An on-screen rectangle as measured by the layout provider,
/// document coordinates, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}
