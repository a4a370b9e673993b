//! src/utils/math.rs
//! Grid arithmetic shared by the world, physics and input layers
use glam::{IVec2, Vec2};

/// Floor division: rounds toward negative infinity, so `-1 / 16 == -1`.
#[inline]
pub fn floor_div(value: i32, divisor: i32) -> i32 {
    value.div_euclid(divisor)
}

/// Remainder always in `[0, divisor)` regardless of the sign of `value`.
#[inline]
pub fn wrap_offset(value: i32, divisor: i32) -> i32 {
    ((value % divisor) + divisor) % divisor
}

/// Maps `[-1, 1]` onto `[0, 1]`.
#[inline]
pub fn remap_unit(v: f64) -> f64 {
    v * 0.5 + 0.5
}

/// Cell containing a world-space coordinate.
#[inline]
pub fn world_to_cell(coord: f32, block_size: f32) -> i32 {
    (coord / block_size).floor() as i32
}

/// Inclusive range of cells covered by the half-open span `[min, min + extent)`.
///
/// A span ending exactly on a cell boundary does not reach into the next cell.
#[inline]
pub fn span_cells(min: f32, extent: f32, block_size: f32) -> (i32, i32) {
    let first = world_to_cell(min, block_size);
    let last = ((min + extent) / block_size).ceil() as i32 - 1;
    (first, last.max(first))
}

/// Cell under the pointer: `floor((screen + camera_offset) / block_size)`.
pub fn target_cell(screen: Vec2, camera_offset: Vec2, block_size: f32) -> IVec2 {
    let world = screen + camera_offset;
    IVec2::new(
        world_to_cell(world.x, block_size),
        world_to_cell(world.y, block_size),
    )
}

/// Euclidean distance between two cells.
pub fn cell_distance(a: IVec2, b: IVec2) -> f32 {
    (a - b).as_vec2().length()
}
