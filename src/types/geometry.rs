//! Geometric types shared by the extent pass and the grid API.

use glam::Vec2;

/// World-axis-aligned rectangle in meters.
/// Convention: [min.x, max.x) x [min.y, max.y) in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Create bounds that represent "no region" (empty). Use this as the
    /// initial value before points expand it; expansion only grows, never
    /// shrinks.
    pub fn empty() -> Self {
        Self {
            min: Vec2::new(f32::INFINITY, f32::INFINITY),
            max: Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Returns true if the bounds cover no area (min >= max in either axis).
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Expand this bounds to include the point (in place).
    pub fn expand_to_include(&mut self, p: Vec2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Snap outward to whole cells: floor the minimum, ceil the maximum.
    pub fn snapped_outward(&self) -> Bounds {
        Bounds {
            min: self.min.floor(),
            max: self.max.ceil(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_accumulate_corners() {
        let mut b = Bounds::empty();
        assert!(b.is_empty());

        b.expand_to_include(Vec2::new(-4.5, 7.0));
        b.expand_to_include(Vec2::new(2.25, -3.0));
        b.expand_to_include(Vec2::new(0.0, 9.5));
        assert!(!b.is_empty());
        assert_eq!(b.min, Vec2::new(-4.5, -3.0));
        assert_eq!(b.max, Vec2::new(2.25, 9.5));
    }

    #[test]
    fn bounds_snap_outward() {
        let mut b = Bounds::empty();
        b.expand_to_include(Vec2::new(-0.3, 1.2));
        b.expand_to_include(Vec2::new(4.7, 6.0));

        let snapped = b.snapped_outward();
        assert_eq!(snapped.min, Vec2::new(-1.0, 1.0));
        assert_eq!(snapped.max, Vec2::new(5.0, 6.0));
    }
}
