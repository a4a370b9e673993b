use crate::player::inventory::Inventory;
use crate::utils::error::PlacementError;
use crate::world::block::{Block, BlockType};
use crate::world::World;
use glam::IVec2;
use log::debug;

/// A block that was put down, and how many remain in the slot it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub cell: IVec2,
    pub kind: BlockType,
    pub remaining: u8,
}

/// Places one block from `slot` into `target`. On any error neither the world
/// nor the inventory is changed.
pub fn place_block(
    world: &mut World,
    inventory: &mut Inventory,
    target: IVec2,
    slot: usize,
) -> Result<Placement, PlacementError> {
    let kind = inventory.placeable(slot)?;

    let occupant = world.get_block(target.x, target.y);
    if !occupant.is_air() {
        return Err(PlacementError::Occupied {
            x: target.x,
            y: target.y,
            occupant: occupant.kind,
        });
    }

    world.set_block(target.x, target.y, Block::new(kind))?;
    let remaining = inventory.consume(slot);
    debug!("Placed {:?} at {}, {} left in slot {}", kind, target, remaining, slot);

    Ok(Placement {
        cell: target,
        kind,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::gameplay::StartingStack;
    use crate::utils::error::GridError;
    use crate::world::chunk_coord::{ChunkCoord, ChunkRect};

    fn setup() -> (World, Inventory) {
        let world = World::empty(0, ChunkRect::new(ChunkCoord::new(0, 0), ChunkCoord::new(0, 0)));
        let inventory = Inventory::with_stacks(&[
            StartingStack {
                kind: BlockType::Dirt,
                count: 2,
            },
            StartingStack {
                kind: BlockType::Wood,
                count: 64,
            },
        ]);
        (world, inventory)
    }

    #[test]
    fn test_place_into_air() {
        let (mut world, mut inventory) = setup();
        let placement = place_block(&mut world, &mut inventory, IVec2::new(4, 4), 0).unwrap();
        assert_eq!(
            placement,
            Placement {
                cell: IVec2::new(4, 4),
                kind: BlockType::Dirt,
                remaining: 1
            }
        );
        assert_eq!(world.get_block(4, 4), Block::new(BlockType::Dirt));
        assert_eq!(world.get_block(4, 4).hardness, 2);

        place_block(&mut world, &mut inventory, IVec2::new(5, 4), 0).unwrap();
        assert!(inventory.slot(0).unwrap().is_empty());
        assert_eq!(
            place_block(&mut world, &mut inventory, IVec2::new(6, 4), 0),
            Err(PlacementError::EmptySlot { slot: 0 })
        );
        assert!(world.get_block(6, 4).is_air());
    }

    #[test]
    fn test_place_onto_solid_changes_nothing() {
        let (mut world, mut inventory) = setup();
        world.set_block(1, 1, Block::new(BlockType::Stone)).unwrap();

        let result = place_block(&mut world, &mut inventory, IVec2::new(1, 1), 1);
        assert_eq!(
            result,
            Err(PlacementError::Occupied {
                x: 1,
                y: 1,
                occupant: BlockType::Stone
            })
        );
        assert_eq!(world.get_block(1, 1).kind, BlockType::Stone);
        assert_eq!(inventory.slot(1).unwrap().count, 64);
    }

    #[test]
    fn test_place_outside_world_keeps_stack() {
        let (mut world, mut inventory) = setup();
        let before = world.clone();

        let result = place_block(&mut world, &mut inventory, IVec2::new(-1, 3), 1);
        assert_eq!(
            result,
            Err(PlacementError::Grid(GridError::UngeneratedChunk {
                chunk: ChunkCoord::new(-1, 0)
            }))
        );
        assert_eq!(world, before);
        assert_eq!(inventory.slot(1).unwrap().count, 64);
        assert_eq!(
            place_block(&mut world, &mut inventory, IVec2::ZERO, 9),
            Err(PlacementError::InvalidSlot { slot: 9 })
        );
    }
}
