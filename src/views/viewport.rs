// src/views/viewport.rs
//
// The path and cursor live in document space: origin at the page's
// top-left, y down. nannou draws from a centered y-up origin, so views
// convert on the way out.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct PageViewport {
    pub scroll_y: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl PageViewport {
    pub fn new(scroll_y: f32, window: Rect) -> Self {
        Self {
            scroll_y,
            window_width: window.w(),
            window_height: window.h(),
        }
    }

    /// Document point to nannou window point, accounting for the scroll.
    pub fn to_window(&self, x: f32, y: f32) -> Point2 {
        pt2(
            x - self.window_width / 2.0,
            self.window_height / 2.0 - (y - self.scroll_y),
        )
    }

    /// Largest scroll offset that still keeps the page filling the window.
    pub fn max_scroll(document_height: f32, window_height: f32) -> f32 {
        (document_height - window_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_y: f32) -> PageViewport {
        PageViewport {
            scroll_y,
            window_width: 1000.0,
            window_height: 800.0,
        }
    }

    #[test]
    fn test_document_origin_maps_to_top_left() {
        let point = viewport(0.0).to_window(0.0, 0.0);

        assert_eq!(point.x, -500.0);
        assert_eq!(point.y, 400.0);
    }

    #[test]
    fn test_scrolling_moves_content_up() {
        let before = viewport(0.0).to_window(100.0, 600.0);
        let after = viewport(200.0).to_window(100.0, 600.0);

        assert_eq!(after.x, before.x);
        assert_eq!(after.y, before.y + 200.0);
    }

    #[test]
    fn test_max_scroll_never_negative() {
        assert_eq!(PageViewport::max_scroll(2200.0, 800.0), 1400.0);
        assert_eq!(PageViewport::max_scroll(500.0, 800.0), 0.0);
    }
}
