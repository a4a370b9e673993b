use crate::config::gameplay::StartingStack;
use crate::utils::error::{InventoryError, PlacementError};
use crate::world::block::BlockType;
use log::{debug, warn};

pub const INVENTORY_SLOTS: usize = 9;
pub const MAX_STACK: u8 = 64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventorySlot {
    pub kind: BlockType,
    pub count: u8,
}

impl InventorySlot {
    pub const EMPTY: InventorySlot = InventorySlot {
        kind: BlockType::Air,
        count: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.kind.is_air()
    }

    pub fn is_full(&self) -> bool {
        self.count >= MAX_STACK
    }
}

/// Nine-slot hotbar. Slots only grow through `add_block` and only shrink
/// through `consume`, and a count never leaves `[0, MAX_STACK]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    slots: [InventorySlot; INVENTORY_SLOTS],
    selected: usize,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            slots: [InventorySlot::EMPTY; INVENTORY_SLOTS],
            selected: 0,
        }
    }

    /// Fills slots 0.. in order from `stacks`; anything beyond the ninth
    /// stack is ignored.
    pub fn with_stacks(stacks: &[StartingStack]) -> Self {
        let mut inventory = Self::new();
        for (slot, stack) in inventory.slots.iter_mut().zip(stacks) {
            if !stack.kind.is_air() {
                *slot = InventorySlot {
                    kind: stack.kind,
                    count: stack.count.min(MAX_STACK),
                };
            }
        }
        inventory
    }

    pub fn slots(&self) -> &[InventorySlot; INVENTORY_SLOTS] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&InventorySlot> {
        self.slots.get(index)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_slot(&self) -> &InventorySlot {
        &self.slots[self.selected]
    }

    /// Returns false and keeps the current selection if `index` is not a slot.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= INVENTORY_SLOTS {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn count_of(&self, kind: BlockType) -> u32 {
        self.slots
            .iter()
            .filter(|slot| slot.kind == kind)
            .map(|slot| slot.count as u32)
            .sum()
    }

    /// Stores one unit of `kind`, topping up an existing stack before opening
    /// a new one. Returns the slot used.
    pub fn add_block(&mut self, kind: BlockType) -> Result<usize, InventoryError> {
        if kind.is_air() {
            return Err(InventoryError::EmptyBlock);
        }

        if let Some(index) = self
            .slots
            .iter()
            .position(|slot| slot.kind == kind && !slot.is_empty() && !slot.is_full())
        {
            self.slots[index].count += 1;
            return Ok(index);
        }

        if let Some(index) = self.slots.iter().position(|slot| slot.count == 0) {
            self.slots[index] = InventorySlot { kind, count: 1 };
            debug!("Opened slot {} for {:?}", index, kind);
            return Ok(index);
        }

        warn!("Inventory full, dropped {:?}", kind);
        Err(InventoryError::Full { kind })
    }

    /// Block type that placing from `index` would put down, without taking it.
    pub fn placeable(&self, index: usize) -> Result<BlockType, PlacementError> {
        let slot = self
            .slots
            .get(index)
            .ok_or(PlacementError::InvalidSlot { slot: index })?;
        if slot.is_empty() {
            return Err(PlacementError::EmptySlot { slot: index });
        }
        Ok(slot.kind)
    }

    /// Removes one unit from `index`. Callers check `placeable` first.
    pub(crate) fn consume(&mut self, index: usize) -> u8 {
        let slot = &mut self.slots[index];
        slot.count = slot.count.saturating_sub(1);
        if slot.count == 0 {
            *slot = InventorySlot::EMPTY;
        }
        slot.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacking_fills_slots_in_order() {
        for n in [1u32, 63, 64, 65, 128, 200, 576] {
            let mut inventory = Inventory::new();
            for _ in 0..n {
                inventory.add_block(BlockType::Dirt).unwrap();
            }

            let occupied: Vec<_> = inventory.slots().iter().filter(|s| !s.is_empty()).collect();
            assert_eq!(occupied.len() as u32, (n + 63) / 64);

            let mut remaining = n;
            for slot in occupied {
                assert_eq!(slot.kind, BlockType::Dirt);
                assert_eq!(slot.count as u32, remaining.min(64));
                remaining -= slot.count as u32;
            }
            assert_eq!(inventory.count_of(BlockType::Dirt), n);
        }
    }

    #[test]
    fn test_full_inventory_reports_drop() {
        let mut inventory = Inventory::new();
        for _ in 0..(INVENTORY_SLOTS * MAX_STACK as usize) {
            inventory.add_block(BlockType::Stone).unwrap();
        }
        let before = inventory.clone();

        assert_eq!(
            inventory.add_block(BlockType::Stone),
            Err(InventoryError::Full {
                kind: BlockType::Stone
            })
        );
        assert_eq!(
            inventory.add_block(BlockType::Wood),
            Err(InventoryError::Full {
                kind: BlockType::Wood
            })
        );
        assert_eq!(inventory, before);
    }

    #[test]
    fn test_air_is_not_stored() {
        let mut inventory = Inventory::new();
        assert_eq!(inventory.add_block(BlockType::Air), Err(InventoryError::EmptyBlock));
        assert_eq!(inventory, Inventory::new());
    }

    #[test]
    fn test_partial_stack_preferred_over_empty_slot() {
        let mut inventory = Inventory::with_stacks(&[
            StartingStack {
                kind: BlockType::Dirt,
                count: 64,
            },
            StartingStack {
                kind: BlockType::Air,
                count: 0,
            },
            StartingStack {
                kind: BlockType::Wood,
                count: 10,
            },
        ]);

        assert_eq!(inventory.add_block(BlockType::Wood), Ok(2));
        assert_eq!(inventory.slot(2).unwrap().count, 11);
        // Full dirt stack spills into the first empty slot
        assert_eq!(inventory.add_block(BlockType::Dirt), Ok(1));
    }

    #[test]
    fn test_consume_clears_emptied_slot() {
        let mut inventory = Inventory::with_stacks(&[StartingStack {
            kind: BlockType::Leaves,
            count: 1,
        }]);
        assert_eq!(inventory.placeable(0), Ok(BlockType::Leaves));
        assert_eq!(inventory.consume(0), 0);
        assert_eq!(*inventory.slot(0).unwrap(), InventorySlot::EMPTY);
        assert_eq!(inventory.placeable(0), Err(PlacementError::EmptySlot { slot: 0 }));
        assert_eq!(inventory.placeable(9), Err(PlacementError::InvalidSlot { slot: 9 }));
    }

    #[test]
    fn test_select_bounds() {
        let mut inventory = Inventory::new();
        assert!(inventory.select(8));
        assert!(!inventory.select(9));
        assert_eq!(inventory.selected(), 8);
    }
}
