pub mod driver;
pub mod resolver;
pub mod smoothing;
pub mod sweep;

pub use driver::{
    ContainerBounds, ContainerEdge, DriverConfig, DriverError, DriverHandle, DriverState,
    EntranceConfig, Marker, ProgressDriver, ScrollFrame, SmoothingConfig,
};
pub use resolver::{resolve, DeclaredLayout, SegmentLayout};
pub use smoothing::ProgressSmoother;
pub use sweep::{ease_in_out, EntranceSweep};
