use crate::world::core::World;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Single-writer, multi-reader handle on the world.
///
/// The simulation holds the write guard for one whole step; a presentation
/// thread holds a read guard for one whole draw pass. Chunk storage must not
/// be mutated while a reader is iterating it, and the lock enforces that.
#[derive(Debug, Clone)]
pub struct SharedWorld(Arc<RwLock<World>>);

impl SharedWorld {
    pub fn new(world: World) -> Self {
        Self(Arc::new(RwLock::new(world)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, World> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, World> {
        self.0.write()
    }

    /// Frame-consistent copy for readers that cannot hold the lock.
    pub fn snapshot(&self) -> World {
        self.0.read().clone()
    }

    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}
