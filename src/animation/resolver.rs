// src/animation/resolver.rs
//
// Maps a normalized scroll progress to a point and rotation on the path.
// Pure: the only inputs are the table, the layout measurements and the
// progress value, so it runs the same with or without a window.

use crate::models::{CursorState, PathError, PathTable, Rect, Segment, SegmentKind};

/// Supplies a segment's on-screen rectangle at resolve time. Implemented by
/// whatever lays the path out; the resolver never touches the rendering
/// surface itself.
pub trait SegmentLayout {
    fn measure(&self, index: usize, segment: &Segment) -> Rect;
}

/// Layout taken straight from the segment declarations, with a fixed stroke
/// thickness. Verticals are measured by height, horizontals and diagonals
/// by width.
#[derive(Debug, Clone, Copy)]
pub struct DeclaredLayout {
    pub thickness: f32,
}

impl Default for DeclaredLayout {
    fn default() -> Self {
        Self { thickness: 4.0 }
    }
}

impl SegmentLayout for DeclaredLayout {
    fn measure(&self, _index: usize, segment: &Segment) -> Rect {
        let (x, y) = segment.origin;
        match segment.kind {
            SegmentKind::Horizontal | SegmentKind::Diagonal => Rect {
                left: x,
                top: y,
                width: segment.length,
                height: self.thickness,
            },
            SegmentKind::Vertical => Rect {
                left: x,
                top: y,
                width: self.thickness,
                height: segment.length,
            },
        }
    }
}

pub fn resolve(
    table: &PathTable,
    layout: &dyn SegmentLayout,
    progress: f32,
) -> Result<CursorState, PathError> {
    let progress = progress.clamp(0.0, 1.0);
    let target_distance = progress * table.total_length();

    let (index, local_t) = table.locate(target_distance).ok_or(PathError::EmptyPath)?;
    let segment = &table.segments()[index];
    let rect = layout.measure(index, segment);

    let state = match segment.kind {
        SegmentKind::Horizontal => CursorState {
            x: rect.left + rect.width * local_t,
            y: rect.top,
            rotation_degrees: 0.0,
        },
        SegmentKind::Vertical => CursorState {
            x: rect.left,
            y: rect.top + rect.height * local_t,
            rotation_degrees: 90.0,
        },
        SegmentKind::Diagonal => {
            let angle = segment.angle_degrees.to_radians();
            CursorState {
                x: rect.left + angle.cos() * rect.width * local_t,
                y: rect.top + angle.sin() * rect.width * local_t,
                rotation_degrees: segment.angle_degrees,
            }
        }
    };

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    fn shield_table() -> PathTable {
        PathTable::new(vec![
            Segment::horizontal(200.0, 100.0, 200.0),
            Segment::diagonal(141.0, 45.0, 300.0, 200.0),
        ])
        .unwrap()
    }

    fn layout() -> DeclaredLayout {
        DeclaredLayout::default()
    }

    mod placement_tests {
        use super::*;

        #[test]
        fn test_worked_example_halfway() {
            // total = 341, so progress 0.5 lands at distance 170.5,
            // inside the first segment at local_t = 0.8525
            let state = resolve(&shield_table(), &layout(), 0.5).unwrap();

            assert_close(state.x, 270.5);
            assert_close(state.y, 200.0);
            assert_eq!(state.rotation_degrees, 0.0);
        }

        #[test]
        fn test_progress_zero_is_first_segment_start() {
            let state = resolve(&shield_table(), &layout(), 0.0).unwrap();

            assert_close(state.x, 100.0);
            assert_close(state.y, 200.0);
            assert_eq!(state.rotation_degrees, 0.0);
        }

        #[test]
        fn test_progress_one_is_last_segment_end() {
            let state = resolve(&shield_table(), &layout(), 1.0).unwrap();
            let expected = 141.0 * std::f32::consts::FRAC_1_SQRT_2;

            assert_close(state.x, 300.0 + expected);
            assert_close(state.y, 200.0 + expected);
            assert_eq!(state.rotation_degrees, 45.0);
        }

        #[test]
        fn test_vertical_segment_moves_down_at_ninety_degrees() {
            let table = PathTable::new(vec![Segment::vertical(200.0, 400.0, 300.0)]).unwrap();
            let state = resolve(&table, &layout(), 0.25).unwrap();

            assert_close(state.x, 400.0);
            assert_close(state.y, 350.0);
            assert_eq!(state.rotation_degrees, 90.0);
        }

        #[test]
        fn test_diagonal_rotation_uses_configured_angle() {
            let table = PathTable::new(vec![Segment::diagonal(100.0, 30.0, 0.0, 0.0)]).unwrap();
            let state = resolve(&table, &layout(), 1.0).unwrap();

            assert_eq!(state.rotation_degrees, 30.0);
            assert_close(state.x, 100.0 * 30.0_f32.to_radians().cos());
            assert_close(state.y, 100.0 * 30.0_f32.to_radians().sin());
        }
    }

    mod contract_tests {
        use super::*;

        #[test]
        fn test_empty_path_fails_to_resolve() {
            let table = PathTable::new(Vec::new()).unwrap();

            assert_eq!(
                resolve(&table, &layout(), 0.5).unwrap_err(),
                PathError::EmptyPath
            );
        }

        #[test]
        fn test_out_of_range_progress_is_clamped() {
            let table = shield_table();

            assert_eq!(
                resolve(&table, &layout(), -0.5).unwrap(),
                resolve(&table, &layout(), 0.0).unwrap()
            );
            assert_eq!(
                resolve(&table, &layout(), 1.5).unwrap(),
                resolve(&table, &layout(), 1.0).unwrap()
            );
        }

        #[test]
        fn test_resolve_is_idempotent() {
            let table = shield_table();

            assert_eq!(
                resolve(&table, &layout(), 0.37).unwrap(),
                resolve(&table, &layout(), 0.37).unwrap()
            );
        }

        #[test]
        fn test_shared_boundary_enters_next_segment() {
            // distance 200 is the boundary between both segments;
            // the diagonal wins with local_t == 0
            let state = resolve(&shield_table(), &layout(), 200.0 / 341.0).unwrap();

            assert_close(state.x, 300.0);
            assert_close(state.y, 200.0);
            assert_eq!(state.rotation_degrees, 45.0);
        }

        #[test]
        fn test_horizontal_progress_is_monotonic_in_x() {
            let table = PathTable::new(vec![Segment::horizontal(500.0, 0.0, 50.0)]).unwrap();
            let mut previous_x = f32::MIN;

            for step in 0..=20 {
                let state = resolve(&table, &layout(), step as f32 / 20.0).unwrap();
                assert!(state.x > previous_x || step == 0);
                assert_eq!(state.y, 50.0);
                previous_x = state.x;
            }
        }

        #[test]
        fn test_point_stays_inside_the_active_segment_rect() {
            let table = shield_table();
            let layout = layout();

            for step in 0..=40 {
                let progress = step as f32 / 40.0;
                let state = resolve(&table, &layout, progress).unwrap();
                let inside = table.segments().iter().enumerate().any(|(i, segment)| {
                    let rect = layout.measure(i, segment);
                    // diagonal rects extend along the angle, so widen the
                    // check to the segment's swept box
                    let (end_x, end_y) = segment.endpoint();
                    let min_x = rect.left.min(end_x) - 1e-3;
                    let max_x = rect.left.max(end_x).max(rect.right()) + 1e-3;
                    let min_y = rect.top.min(end_y) - 1e-3;
                    let max_y = rect.top.max(end_y).max(rect.bottom()) + 1e-3;
                    state.x >= min_x && state.x <= max_x && state.y >= min_y && state.y <= max_y
                });

                assert!(inside, "progress {progress} escaped the path");
                assert!(state.rotation_degrees.is_finite());
            }
        }
    }
}
