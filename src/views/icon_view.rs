// src/views/icon_view.rs
//
// The gliding shield icon, centered on the resolved cursor and rotated
// with it.

use nannou::prelude::*;

use crate::models::CursorState;
use crate::views::PageViewport;

// Shield outline in unit space, y down, centered on the cursor.
const SHIELD_OUTLINE: [(f32, f32); 9] = [
    (0.0, -0.50),
    (0.38, -0.38),
    (0.42, -0.05),
    (0.34, 0.22),
    (0.0, 0.50),
    (-0.34, 0.22),
    (-0.42, -0.05),
    (-0.38, -0.38),
    (0.0, -0.50),
];

pub struct IconView {
    pub size: f32,
    pub color: Rgb8,
    pub stroke_weight: f32,
}

impl IconView {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            color: rgb8(37, 99, 235),
            stroke_weight: 2.5,
        }
    }

    pub fn draw(&self, draw: &Draw, cursor: &CursorState, viewport: &PageViewport) {
        let rotation = cursor.rotation_degrees.to_radians();
        let cos_rot = rotation.cos();
        let sin_rot = rotation.sin();

        let points = SHIELD_OUTLINE.iter().map(|&(x, y)| {
            // scale, rotate in document space, translate to the cursor
            let scaled_x = x * self.size;
            let scaled_y = y * self.size;
            let rotated_x = scaled_x * cos_rot - scaled_y * sin_rot;
            let rotated_y = scaled_x * sin_rot + scaled_y * cos_rot;
            viewport.to_window(cursor.x + rotated_x, cursor.y + rotated_y)
        });

        draw.polyline()
            .weight(self.stroke_weight)
            .points(points)
            .color(self.color);
    }
}
