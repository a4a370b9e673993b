use crate::config::gameplay::PhysicsConfig;
use crate::physics::body::Body;
use crate::player::input::InputSnapshot;
use crate::utils::math::{span_cells, world_to_cell};
use crate::world::core::World;
use log::trace;

/// What collision resolution did during one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub blocked_x: bool,
    pub blocked_y: bool,
    pub landed: bool,
    pub jumped: bool,
}

pub struct PlayerPhysicsHandler {
    config: PhysicsConfig,
    block_size: f32,
}

impl PlayerPhysicsHandler {
    pub fn new(config: PhysicsConfig, block_size: f32) -> Self {
        Self { config, block_size }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    /// One fixed step: gravity, friction, input, then X and Y collision.
    pub fn step(&self, body: &mut Body, input: &InputSnapshot, world: &World) -> CollisionReport {
        let jumped = self.integrate(body, input);
        let blocked_x = self.resolve_x(body, world);
        let (blocked_y, landed) = self.resolve_y(body, world);

        trace!(
            "body at ({:.2}, {:.2}) vel ({:.2}, {:.2}) ground {}",
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            body.on_ground
        );

        CollisionReport {
            blocked_x,
            blocked_y,
            landed,
            jumped,
        }
    }

    /// Velocity update only. Returns whether a jump was taken.
    pub fn integrate(&self, body: &mut Body, input: &InputSnapshot) -> bool {
        body.velocity.y = (body.velocity.y + self.config.gravity).min(self.config.terminal_velocity);
        body.velocity.x *= self.config.friction;
        body.velocity.x += input.horizontal() * self.config.move_acceleration;

        if input.jump && body.on_ground {
            body.velocity.y = self.config.jump_velocity;
            body.on_ground = false;
            return true;
        }
        false
    }

    /// Moves along X and snaps flush against the first solid column hit.
    pub fn resolve_x(&self, body: &mut Body, world: &World) -> bool {
        body.position.x += body.velocity.x;
        if body.velocity.x == 0.0 {
            return false;
        }

        let size = self.block_size;
        let (top, bottom) = body.rows(size);
        let moving_right = body.velocity.x > 0.0;
        let column = if moving_right {
            span_cells(body.position.x, body.size.x, size).1
        } else {
            world_to_cell(body.position.x, size)
        };

        if !(top..=bottom).any(|row| world.is_solid(column, row)) {
            return false;
        }

        body.position.x = if moving_right {
            column as f32 * size - body.size.x
        } else {
            (column + 1) as f32 * size
        };
        body.velocity.x = 0.0;
        true
    }

    /// Moves along Y and snaps flush against the first solid row hit.
    /// Returns `(blocked, landed)`.
    pub fn resolve_y(&self, body: &mut Body, world: &World) -> (bool, bool) {
        body.on_ground = false;
        body.position.y += body.velocity.y;
        if body.velocity.y == 0.0 {
            return (false, false);
        }

        let size = self.block_size;
        let (left, right) = body.columns(size);
        let falling = body.velocity.y > 0.0;
        let row = if falling {
            span_cells(body.position.y, body.size.y, size).1
        } else {
            world_to_cell(body.position.y, size)
        };

        if !(left..=right).any(|column| world.is_solid(column, row)) {
            return (false, false);
        }

        if falling {
            body.position.y = row as f32 * size - body.size.y;
            body.on_ground = true;
        } else {
            body.position.y = (row + 1) as f32 * size;
        }
        body.velocity.y = 0.0;
        (true, falling)
    }
}
