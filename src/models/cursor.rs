// src/models/cursor.rs

/// The computed position and orientation of the gliding icon.
/// Recomputed on every progress update; document coordinates, y down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub x: f32,
    pub y: f32,
    pub rotation_degrees: f32,
}
