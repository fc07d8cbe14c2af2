pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;
pub mod obstacle;

pub use constants::*;
pub use error::GridError;
pub use geometry::Bounds;
pub use info::GridInfo;
pub use obstacle::ObstacleRecord;
