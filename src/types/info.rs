//! Grid metadata.

use glam::Vec2;

use crate::types::Bounds;

/// Dimensions and placement of an occupancy grid.
///
/// Cells are one world unit on a side: cell (i, j) covers the half-open
/// region `[origin.x + i, origin.x + i + 1) x [origin.y + j, origin.y + j + 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridInfo {
    pub width: u32,
    pub height: u32,
    /// World coordinate of the corner of cell (0, 0) (meters).
    pub origin: Vec2,
}

impl Default for GridInfo {
    /// The smallest valid grid: a single free cell with its corner at the
    /// world origin. This is what an empty obstacle list builds.
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            origin: Vec2::ZERO,
        }
    }
}

impl GridInfo {
    /// Total cell count.
    #[inline]
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// World-axis-aligned rectangle covered by the grid.
    pub fn world_bounds(&self) -> Bounds {
        Bounds {
            min: self.origin,
            max: self.origin + Vec2::new(self.width as f32, self.height as f32),
        }
    }
}
