use crate::utils::math::{span_cells, world_to_cell};
use glam::{IVec2, Vec2};

/// Axis-aligned moving box in world units. `position` is the top-left corner;
/// y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub on_ground: bool,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            velocity: Vec2::ZERO,
            on_ground: false,
        }
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Block coordinate of the top-left corner.
    pub fn cell(&self, block_size: f32) -> IVec2 {
        IVec2::new(
            world_to_cell(self.position.x, block_size),
            world_to_cell(self.position.y, block_size),
        )
    }

    /// Inclusive column range the box overlaps.
    pub fn columns(&self, block_size: f32) -> (i32, i32) {
        span_cells(self.position.x, self.size.x, block_size)
    }

    /// Inclusive row range the box overlaps.
    pub fn rows(&self, block_size: f32) -> (i32, i32) {
        span_cells(self.position.y, self.size.y, block_size)
    }
}
