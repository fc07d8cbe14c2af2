use glam::{Vec2, Vec3};

use crate::types::GridError;

/// One axis-aligned obstacle box.
///
/// `center` and `half_extent` share the same axis convention: x and y are the
/// planar axes kept by the 2D projection, z is the altitude axis the builder
/// filters on. The box spans `center - half_extent` to `center + half_extent`
/// along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleRecord {
    pub center: Vec3,
    /// Half-widths per axis (meters). Components must be non-negative.
    pub half_extent: Vec3,
}

impl ObstacleRecord {
    pub fn new(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// Lowest corner of the raw (un-inflated) planar footprint.
    #[inline]
    pub fn footprint_min(&self) -> Vec2 {
        self.center.truncate() - self.half_extent.truncate()
    }

    /// Highest corner of the raw (un-inflated) planar footprint.
    #[inline]
    pub fn footprint_max(&self) -> Vec2 {
        self.center.truncate() + self.half_extent.truncate()
    }

    /// Altitude of the obstacle's top surface, before any safety margin.
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.z + self.half_extent.z
    }

    pub fn validate(&self) -> Result<(), GridError> {
        let h = self.half_extent;
        if h.x < 0.0 || h.y < 0.0 || h.z < 0.0 {
            return Err(GridError::InvalidArgument(format!(
                "obstacle at ({}, {}, {}) has negative half extent ({}, {}, {})",
                self.center.x, self.center.y, self.center.z, h.x, h.y, h.z
            )));
        }
        Ok(())
    }
}
