//! Occupancy grid construction from 3D obstacle boxes.
//!
//! The builder projects axis-aligned obstacle boxes onto the x/y plane,
//! keeps the ones whose inflated top surface clears the query altitude, and
//! rasterizes each footprint (inflated by the safety margin) into a dense
//! binary grid with unit cells.

use glam::{UVec2, Vec2};

use crate::grid::OccupancyGrid;
use crate::types::{
    Bounds, DEFAULT_ALTITUDE, DEFAULT_SAFETY_MARGIN, GridError, GridInfo, ObstacleRecord,
};

/// Configuration for a grid build.
///
/// Groups the two caller-supplied parameters. Defaults match the urban data
/// set this crate was written against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Altitude of the planar slice (meters). Obstacles whose inflated top
    /// surface does not rise above this plane are ignored.
    pub altitude: f32,
    /// Clearance added around every obstacle footprint (meters). Must be
    /// non-negative.
    pub safety_margin: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            altitude: DEFAULT_ALTITUDE,
            safety_margin: DEFAULT_SAFETY_MARGIN,
        }
    }
}

impl GridConfig {
    pub fn new(altitude: f32, safety_margin: f32) -> Self {
        Self {
            altitude,
            safety_margin,
        }
    }

    fn validate(&self) -> Result<(), GridError> {
        if self.safety_margin < 0.0 {
            return Err(GridError::InvalidArgument(format!(
                "safety margin must be non-negative, got {}",
                self.safety_margin
            )));
        }
        Ok(())
    }
}

/// Build a binary occupancy grid of the obstacles at `config.altitude`.
///
/// The grid covers the floor/ceil-snapped bounding box of the *raw* obstacle
/// footprints; the safety margin inflates each obstacle during rasterization
/// but never grows the bounding box. An obstacle inflated past the boundary
/// is clamped to it, so footprints near the extremes can lose part of their
/// margin. Downstream planners rely on this exact shape, so it is kept
/// rather than corrected.
///
/// The returned grid's [`origin`](OccupancyGrid::origin) is the world
/// coordinate of cell (0, 0); planners need it to translate between world
/// and grid coordinates.
///
/// Footprints combine by union: duplicate and overlapping obstacles mark
/// cells once, and the result does not depend on input order.
///
/// # Errors
///
/// `InvalidArgument` if the safety margin or any half-extent component is
/// negative. Validation runs before the extent pass, so no partial grid is
/// ever returned.
///
/// An empty obstacle list is not an error: no extent can be derived, so the
/// minimal 1x1 all-free grid with origin (0, 0) comes back.
pub fn build_grid(
    obstacles: &[ObstacleRecord],
    config: &GridConfig,
) -> Result<OccupancyGrid, GridError> {
    config.validate()?;
    for obstacle in obstacles {
        obstacle.validate()?;
    }

    if obstacles.is_empty() {
        return Ok(OccupancyGrid::new(GridInfo::default()));
    }

    let info = grid_extent(obstacles);
    let mut grid = OccupancyGrid::new(info);

    for obstacle in obstacles {
        if let Some((min, max)) = footprint_cells(obstacle, config, grid.info()) {
            grid.block_region(min, max);
        }
    }

    Ok(grid)
}

/// Floor/ceil-snapped bounding box of the raw footprints, as grid metadata.
/// The safety margin is deliberately excluded here (see [`build_grid`]).
fn grid_extent(obstacles: &[ObstacleRecord]) -> GridInfo {
    let mut bounds = Bounds::empty();
    for obstacle in obstacles {
        bounds.expand_to_include(obstacle.footprint_min());
        bounds.expand_to_include(obstacle.footprint_max());
    }
    let bounds = bounds.snapped_outward();

    // Snapping already made both ends whole; the max(1) below keeps
    // coincident point obstacles from allocating a zero-size grid.
    let size = (bounds.max - bounds.min).ceil();
    GridInfo {
        width: (size.x as u32).max(1),
        height: (size.y as u32).max(1),
        origin: bounds.min,
    }
}

/// Inclusive cell rectangle covered by the obstacle's inflated footprint, or
/// None when the altitude filter excludes the obstacle.
fn footprint_cells(
    obstacle: &ObstacleRecord,
    config: &GridConfig,
    info: &GridInfo,
) -> Option<(UVec2, UVec2)> {
    if obstacle.top() + config.safety_margin <= config.altitude {
        return None;
    }

    let margin = Vec2::splat(config.safety_margin);
    let lo = obstacle.footprint_min() - margin - info.origin;
    let hi = obstacle.footprint_max() + margin - info.origin;

    let min = UVec2::new(clamp_cell(lo.x, info.width), clamp_cell(lo.y, info.height));
    let max = UVec2::new(clamp_cell(hi.x, info.width), clamp_cell(hi.y, info.height));
    Some((min, max))
}

/// Clamp a cell offset to [0, size - 1] in the real domain, then truncate
/// toward zero. The clamp must happen before the cast.
#[inline]
fn clamp_cell(offset: f32, size: u32) -> u32 {
    offset.clamp(0.0, (size - 1) as f32) as u32
}

#[cfg(feature = "rayon")]
pub mod parallel {
    use rayon::prelude::*;

    use super::*;
    use crate::types::BLOCKED;

    /// Parallel [`build_grid`]: identical output for all inputs.
    ///
    /// Footprint rectangles are computed serially (they are cheap), then the
    /// grid rows are marked in parallel. Each row is owned by exactly one
    /// task, which serializes writes to overlapping footprints; the union is
    /// commutative, so the order rows and obstacles are processed in does
    /// not matter.
    pub fn build_grid_par(
        obstacles: &[ObstacleRecord],
        config: &GridConfig,
    ) -> Result<OccupancyGrid, GridError> {
        config.validate()?;
        for obstacle in obstacles {
            obstacle.validate()?;
        }

        if obstacles.is_empty() {
            return Ok(OccupancyGrid::new(GridInfo::default()));
        }

        let info = grid_extent(obstacles);
        let rects: Vec<(UVec2, UVec2)> = obstacles
            .iter()
            .filter_map(|obstacle| footprint_cells(obstacle, config, &info))
            .collect();

        let width = info.width as usize;
        let mut grid = OccupancyGrid::new(info);
        grid.data_mut()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                let y = y as u32;
                for (min, max) in &rects {
                    if y >= min.y && y <= max.y {
                        row[min.x as usize..=max.x as usize].fill(BLOCKED);
                    }
                }
            });

        Ok(grid)
    }
}
