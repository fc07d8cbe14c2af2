pub mod colliders;
pub mod scenario;

pub use colliders::{load_obstacles, parse_obstacles};
pub use scenario::{Scenario, load_scenario, resolve_data_path};
