pub mod builder;
pub mod grid;
pub mod loaders;
pub mod types;
pub mod visualization;

pub use builder::{GridConfig, build_grid};
pub use grid::OccupancyGrid;
pub use loaders::colliders::load_obstacles;
pub use loaders::scenario::load_scenario;
pub use types::{GridError, GridInfo, ObstacleRecord};
