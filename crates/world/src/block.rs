//! Block table and per-block properties.

use serde::{Deserialize, Serialize};

/// Block type identifier.
pub type BlockId = u16;

/// Block IDs known to the world model.
pub mod blocks {
    use super::BlockId;

    pub const AIR: BlockId = 0;
    pub const STONE: BlockId = 1;
    pub const DIRT: BlockId = 2;
    pub const GRASS: BlockId = 3;
    pub const SAND: BlockId = 4;
    pub const GRAVEL: BlockId = 5;
    pub const OAK_LOG: BlockId = 6;
    pub const OAK_PLANKS: BlockId = 7;
    pub const GLASS: BlockId = 8;
    pub const WATER: BlockId = 9;
    pub const LAVA: BlockId = 10;
    pub const LEVER: BlockId = 11;
    pub const OAK_DOOR: BlockId = 12;
    pub const CRAFTING_TABLE: BlockId = 13;
    pub const TORCH: BlockId = 14;
}

/// Properties of a block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockProperties {
    /// Whether the block stops rays and collides (affects raycasting).
    pub is_solid: bool,
    /// Whether the block is a liquid (rays pass through, never stop).
    pub is_liquid: bool,
    /// Whether a right-click on the block is consumed by the block itself
    /// (levers, doors) instead of falling through to the held item.
    pub interactive: bool,
}

impl Default for BlockProperties {
    fn default() -> Self {
        Self {
            is_solid: true,
            is_liquid: false,
            interactive: false,
        }
    }
}

/// Look up the properties for a block id.
pub fn properties(id: BlockId) -> BlockProperties {
    match id {
        blocks::AIR => BlockProperties {
            is_solid: false,
            is_liquid: false,
            interactive: false,
        },
        blocks::WATER | blocks::LAVA => BlockProperties {
            is_solid: false,
            is_liquid: true,
            interactive: false,
        },
        blocks::TORCH => BlockProperties {
            is_solid: false,
            ..Default::default()
        },
        blocks::LEVER | blocks::OAK_DOOR => BlockProperties {
            interactive: true,
            ..Default::default()
        },
        _ => BlockProperties::default(),
    }
}

/// Whether the block id is air.
pub fn is_air(id: BlockId) -> bool {
    id == blocks::AIR
}

/// Whether the block stops rays.
pub fn is_solid(id: BlockId) -> bool {
    properties(id).is_solid
}

/// Whether the block is a liquid.
pub fn is_liquid(id: BlockId) -> bool {
    properties(id).is_liquid
}
