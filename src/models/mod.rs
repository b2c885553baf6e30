pub mod cursor;
pub mod data_model;
pub mod path_table;
pub mod segment;

pub use cursor::CursorState;
pub use data_model::{PathProject, SegmentSpec};
pub use path_table::{PathError, PathTable, Span};
pub use segment::{Rect, Segment, SegmentKind};
