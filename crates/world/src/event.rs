//! World event log.
//!
//! Every observable side effect of an interaction is appended to the owning
//! world's event log; drivers and tests drain it after each tick. The
//! empty-click variants are the external signals fired on a true miss with an
//! empty hand (particle/sound hooks in a full client).

use crate::block::BlockId;
use crate::entity::EntityId;
use clickcraft_core::Direction;
use serde::{Deserialize, Serialize};

/// An observable world-side effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorldEvent {
    /// A right-click hit nothing and the hand was empty.
    EmptyRightClick {
        /// Profile name of the clicking actor.
        player: String,
    },
    /// A left-click hit nothing and the hand was empty.
    EmptyLeftClick {
        /// Profile name of the clicking actor.
        player: String,
    },
    /// An interactive block consumed a right-click.
    BlockUsed {
        /// Block position.
        pos: [i32; 3],
        /// Click point relative to the anchor position of the using machine.
        hit: [f64; 3],
    },
    /// A block item was placed.
    BlockPlaced {
        /// Position of the new block.
        pos: [i32; 3],
        /// The placed block id.
        block: BlockId,
    },
    /// A left-click started breaking a block.
    BlockBreakStarted {
        /// Block position.
        pos: [i32; 3],
        /// Face that was clicked.
        face: Direction,
    },
    /// An entity took attack damage.
    EntityAttacked {
        /// Target entity.
        id: EntityId,
        /// Damage dealt in half-hearts.
        damage: f64,
    },
    /// An entity consumed an interact / interact-at action.
    EntityUsed {
        /// Target entity.
        id: EntityId,
    },
    /// A food item was eaten via generic right-click.
    ItemConsumed,
    /// An item stack was dropped into the world.
    ItemDropped {
        /// The dropped-item entity.
        id: EntityId,
    },
}

impl WorldEvent {
    /// Short kind label for log lines and JSONL records.
    pub const fn kind(&self) -> &'static str {
        match self {
            WorldEvent::EmptyRightClick { .. } => "empty_right_click",
            WorldEvent::EmptyLeftClick { .. } => "empty_left_click",
            WorldEvent::BlockUsed { .. } => "block_used",
            WorldEvent::BlockPlaced { .. } => "block_placed",
            WorldEvent::BlockBreakStarted { .. } => "block_break_started",
            WorldEvent::EntityAttacked { .. } => "entity_attacked",
            WorldEvent::EntityUsed { .. } => "entity_used",
            WorldEvent::ItemConsumed => "item_consumed",
            WorldEvent::ItemDropped { .. } => "item_dropped",
        }
    }
}
