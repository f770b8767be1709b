//! Grid model: pixel → cell conversion and bounds helpers.

use crate::entities::{GridPosition, PixelPosition, OFF_GRID};

/// Floor-divide pixel coordinates by the cell size.
///
/// Pixels left of / above the field map to negative cells rather than
/// truncating towards zero.
pub fn to_grid(pixel: PixelPosition, cell_size_px: u32) -> GridPosition {
    let cell = cell_size_px as i32;
    GridPosition {
        x: pixel.x.div_euclid(cell),
        y: pixel.y.div_euclid(cell),
    }
}

pub fn is_off_grid(pos: GridPosition) -> bool {
    pos == OFF_GRID
}

pub fn equals(a: GridPosition, b: GridPosition) -> bool {
    a.x == b.x && a.y == b.y
}

/// True iff `pos` lies in `[0, dimension)` on both axes.
pub fn in_bounds(pos: GridPosition, dimension: i32) -> bool {
    (0..dimension).contains(&pos.x) && (0..dimension).contains(&pos.y)
}

pub fn clamp(pos: GridPosition, dimension: i32) -> GridPosition {
    let max = (dimension - 1).max(0);
    GridPosition {
        x: pos.x.clamp(0, max),
        y: pos.y.clamp(0, max),
    }
}
