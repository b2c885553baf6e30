pub mod icon_view;
pub mod path_view;
pub mod viewport;

pub use icon_view::IconView;
pub use path_view::PathView;
pub use viewport::PageViewport;
