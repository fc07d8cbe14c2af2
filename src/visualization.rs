use glam::UVec2;
use image::{GrayImage, Luma};

use crate::OccupancyGrid;
use crate::types::BLOCKED;

/// Render an occupancy grid as a grayscale preview image.
///
/// Blocked cells become black, free cells white. The output is oriented
/// like typical map images: the grid's y = 0 row (lowest in world
/// coordinates) lands at the **bottom** of the image.
pub fn grid_to_image(grid: &OccupancyGrid) -> GrayImage {
    let width = grid.width();
    let height = grid.height();
    let mut img = GrayImage::new(width, height);

    for y_img in 0..height {
        // Flip vertically so north stays up.
        let y_grid = height - 1 - y_img;
        for x in 0..width {
            let value = grid.get(UVec2::new(x, y_grid)).unwrap_or(BLOCKED);
            img.put_pixel(x, y_img, Luma([cell_to_gray(value)]));
        }
    }

    img
}

fn cell_to_gray(value: u8) -> u8 {
    // 254 rather than 255 keeps the palette of common map previews.
    if value == BLOCKED { 0 } else { 254 }
}
