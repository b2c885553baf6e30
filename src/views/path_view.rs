// src/views/path_view.rs
//
// Draws the declared path as gold strokes.

use nannou::prelude::*;

use crate::models::PathTable;
use crate::views::PageViewport;

pub struct PathView {
    pub thickness: f32,
    pub color: Rgb8,
}

impl PathView {
    pub fn new(thickness: f32) -> Self {
        Self {
            thickness,
            // #FFD700
            color: rgb8(255, 215, 0),
        }
    }

    pub fn draw(&self, draw: &Draw, table: &PathTable, viewport: &PageViewport) {
        for segment in table.segments() {
            let (start_x, start_y) = segment.origin;
            let (end_x, end_y) = segment.endpoint();

            draw.line()
                .points(
                    viewport.to_window(start_x, start_y),
                    viewport.to_window(end_x, end_y),
                )
                .weight(self.thickness)
                .color(self.color);
        }
    }
}
