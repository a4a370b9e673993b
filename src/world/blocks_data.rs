// blocks_data.rs - Block catalog: hardness and display metadata per block type

use crate::world::block::BlockType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDefinition {
    pub kind: BlockType,
    pub name: &'static str,
    pub hardness: u8,
    pub color: [u8; 4],
}

pub static BLOCKS: [BlockDefinition; 6] = [
    BlockDefinition {
        kind: BlockType::Air,
        name: "air",
        hardness: 0,
        color: [0, 0, 0, 0],
    },
    BlockDefinition {
        kind: BlockType::Grass,
        name: "grass",
        hardness: 1,
        color: [85, 170, 0, 255],
    },
    BlockDefinition {
        kind: BlockType::Dirt,
        name: "dirt",
        hardness: 2,
        color: [139, 69, 19, 255],
    },
    BlockDefinition {
        kind: BlockType::Stone,
        name: "stone",
        hardness: 5,
        color: [128, 128, 128, 255],
    },
    BlockDefinition {
        kind: BlockType::Wood,
        name: "wood",
        hardness: 3,
        color: [160, 82, 45, 255],
    },
    BlockDefinition {
        kind: BlockType::Leaves,
        name: "leaves",
        hardness: 1,
        color: [34, 139, 34, 255],
    },
];

pub fn definition(kind: BlockType) -> &'static BlockDefinition {
    // BLOCKS is laid out in enum declaration order
    &BLOCKS[kind as usize]
}
