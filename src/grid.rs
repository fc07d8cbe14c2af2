use glam::{UVec2, Vec2};

use crate::types::{BLOCKED, FREE, GridError, GridInfo};

/// Dense 2D binary occupancy grid over unit cells.
///
/// Row-major storage, index = y * width + x. Cells hold [`FREE`] or
/// [`BLOCKED`]. The grid's [`GridInfo`] carries the origin offset that maps
/// cell (0, 0) back to world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyGrid {
    info: GridInfo,
    data: Vec<u8>,
}

impl OccupancyGrid {
    /// Create an all-free grid with the given metadata.
    pub fn new(info: GridInfo) -> Self {
        let len = info.len();
        Self {
            info,
            data: vec![FREE; len],
        }
    }

    /// Wrap existing cell data; the length must match the metadata.
    pub fn from_data(info: GridInfo, data: Vec<u8>) -> Result<Self, GridError> {
        let expected_len = info.len();
        if data.len() != expected_len {
            return Err(GridError::InvalidArgument(format!(
                "data length {} does not match grid size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self { info, data })
    }

    pub fn info(&self) -> &GridInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// World coordinate of the corner of cell (0, 0).
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.info.origin
    }

    pub fn get(&self, pos: UVec2) -> Option<u8> {
        if pos.x >= self.info.width || pos.y >= self.info.height {
            return None;
        }
        let idx = self.index(pos);
        Some(self.data[idx])
    }

    pub fn is_blocked(&self, pos: UVec2) -> bool {
        self.get(pos) == Some(BLOCKED)
    }

    fn index(&self, pos: UVec2) -> usize {
        (pos.y as usize) * (self.info.width as usize) + (pos.x as usize)
    }

    /// Mark every cell in the inclusive rectangle [min.x, max.x] x
    /// [min.y, max.y] as blocked.
    ///
    /// The rectangle is intersected with the grid before writing, and
    /// already-blocked cells stay blocked, so repeated and overlapping calls
    /// accumulate as a union.
    pub fn block_region(&mut self, min: UVec2, max: UVec2) {
        let x_hi = max.x.min(self.info.width.saturating_sub(1));
        let y_hi = max.y.min(self.info.height.saturating_sub(1));
        if min.x > x_hi || min.y > y_hi {
            return;
        }

        for y in min.y..=y_hi {
            let row = (y as usize) * (self.info.width as usize);
            self.data[row + min.x as usize..=row + x_hi as usize].fill(BLOCKED);
        }
    }

    /// Number of blocked cells in the whole grid.
    pub fn blocked_count(&self) -> usize {
        self.data.iter().filter(|&&cell| cell == BLOCKED).count()
    }

    /// Cell containing the world position, or None outside the grid.
    ///
    /// Cells are half-open: a position exactly on the grid's upper world
    /// boundary is outside.
    pub fn world_to_map(&self, pos: Vec2) -> Option<UVec2> {
        let mx = pos.x - self.info.origin.x;
        let my = pos.y - self.info.origin.y;
        if mx < 0.0 || my < 0.0 || mx >= self.info.width as f32 || my >= self.info.height as f32 {
            return None;
        }
        Some(UVec2::new(mx as u32, my as u32))
    }

    /// World coordinate of the given cell's corner.
    pub fn map_to_world(&self, pos: UVec2) -> Vec2 {
        self.info.origin + Vec2::new(pos.x as f32, pos.y as f32)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[cfg(feature = "rayon")]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn test_info() -> GridInfo {
        GridInfo {
            width: 10,
            height: 8,
            origin: Vec2::new(-3.0, 2.0),
        }
    }

    #[test]
    fn from_data_checks_length() {
        assert!(OccupancyGrid::from_data(test_info(), vec![FREE; 80]).is_ok());
        assert!(OccupancyGrid::from_data(test_info(), vec![FREE; 79]).is_err());
    }

    #[test]
    fn world_to_map_to_world() {
        let grid = OccupancyGrid::new(test_info());

        // Cell corners map back exactly.
        let cell = grid.world_to_map(Vec2::new(-3.0, 2.0)).unwrap();
        assert_eq!(cell, UVec2::new(0, 0));
        assert_eq!(grid.map_to_world(cell), Vec2::new(-3.0, 2.0));

        // Interior positions land in the cell whose corner is below them.
        let cell = grid.world_to_map(Vec2::new(-0.5, 4.9)).unwrap();
        assert_eq!(cell, UVec2::new(2, 2));
        let corner = grid.map_to_world(cell);
        assert_relative_eq!(corner.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(corner.y, 4.0, epsilon = 1e-6);

        // The upper world boundary is outside (half-open cells).
        assert_eq!(grid.world_to_map(Vec2::new(7.0, 2.0)), None);
        assert_eq!(grid.world_to_map(Vec2::new(-3.1, 2.0)), None);
    }

    #[test]
    fn block_region_is_inclusive_union() {
        let mut grid = OccupancyGrid::new(test_info());

        grid.block_region(UVec2::new(1, 1), UVec2::new(2, 3));
        assert_eq!(grid.blocked_count(), 2 * 3);
        assert!(grid.is_blocked(UVec2::new(2, 3)));
        assert!(!grid.is_blocked(UVec2::new(3, 3)));

        // Overlapping region only adds the new cells.
        grid.block_region(UVec2::new(2, 2), UVec2::new(3, 3));
        assert_eq!(grid.blocked_count(), 6 + 2);
    }

    #[test]
    fn block_region_clamps_to_grid() {
        let mut grid = OccupancyGrid::new(test_info());

        grid.block_region(UVec2::new(8, 6), UVec2::new(100, 100));
        assert_eq!(grid.blocked_count(), 2 * 2);
        assert!(grid.is_blocked(UVec2::new(9, 7)));

        // Entirely outside: nothing marked, nothing panics.
        grid.block_region(UVec2::new(50, 0), UVec2::new(60, 2));
        assert_eq!(grid.blocked_count(), 4);
    }
}
