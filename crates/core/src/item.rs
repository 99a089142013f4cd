//! Item system - tools, block items, food, and their held-slot modifiers.

use crate::attribute::{Attribute, AttributeModifier};
use serde::{Deserialize, Serialize};

/// Identifier referencing a block type (mirrors `clickcraft-world`'s table).
pub type BlockId = u16;

/// Identifier for generic items with no special behavior.
pub type ItemId = u16;

/// Maximum stack size for most items.
pub const DEFAULT_STACK_SIZE: u32 = 64;

/// Tool kinds, each with a fixed mainhand damage profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    /// Combat weapon.
    Sword,
    /// Mines stone and ores.
    Pickaxe,
    /// Chops wood; slow but heavy-hitting.
    Axe,
    /// Digs dirt, sand, gravel.
    Shovel,
    /// Tills farmland.
    Hoe,
}

impl ToolKind {
    /// Extra attack damage contributed while held, in half-hearts.
    pub const fn attack_damage(self) -> f64 {
        match self {
            ToolKind::Sword => 7.0,
            ToolKind::Pickaxe => 4.0,
            ToolKind::Axe => 9.0,
            ToolKind::Shovel => 4.5,
            ToolKind::Hoe => 1.0,
        }
    }

    /// Attack speed delta while held (attacks per second, negative = slower).
    pub const fn attack_speed(self) -> f64 {
        match self {
            ToolKind::Sword => -2.4,
            ToolKind::Pickaxe => -2.8,
            ToolKind::Axe => -3.1,
            ToolKind::Shovel => -3.0,
            ToolKind::Hoe => -1.0,
        }
    }

    const fn modifier_id_base(self) -> u64 {
        match self {
            ToolKind::Sword => 0x10,
            ToolKind::Pickaxe => 0x20,
            ToolKind::Axe => 0x30,
            ToolKind::Shovel => 0x40,
            ToolKind::Hoe => 0x50,
        }
    }
}

/// What an item is, which determines how using it behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// A tool; contributes attribute modifiers while held.
    Tool(ToolKind),
    /// A placeable block item.
    Block(BlockId),
    /// Food; consumed by a generic right-click.
    Food {
        /// Hunger restored when eaten.
        nutrition: u8,
    },
    /// Generic item with no use behavior.
    Simple(ItemId),
}

/// A stack of items occupying a single slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// What the stack contains.
    pub kind: ItemKind,
    /// Number of items (always >= 1; an absent stack is `None`, not zero).
    pub count: u32,
}

impl ItemStack {
    /// Create a new stack.
    pub fn new(kind: ItemKind, count: u32) -> Self {
        debug_assert!(count >= 1);
        Self { kind, count }
    }

    /// Convenience constructor for a single tool.
    pub fn tool(kind: ToolKind) -> Self {
        Self::new(ItemKind::Tool(kind), 1)
    }

    /// Maximum stack size for this item.
    pub fn max_stack_size(&self) -> u32 {
        match self.kind {
            ItemKind::Tool(_) => 1,
            ItemKind::Food { .. } => 16,
            _ => DEFAULT_STACK_SIZE,
        }
    }

    /// Remove `amount` items, returning `None` when the stack empties.
    ///
    /// Consumption during use (placing a block, eating) goes through this so
    /// an emptied slot is represented uniformly as `None`.
    pub fn shrink(mut self, amount: u32) -> Option<Self> {
        if amount >= self.count {
            None
        } else {
            self.count -= amount;
            Some(self)
        }
    }

    /// Attribute modifiers this item contributes while held in the mainhand.
    ///
    /// Ids are stable per tool kind so apply/remove pairs always match.
    pub fn mainhand_modifiers(&self) -> Vec<AttributeModifier> {
        match self.kind {
            ItemKind::Tool(tool) => {
                let base = tool.modifier_id_base();
                vec![
                    AttributeModifier::new(base, Attribute::AttackDamage, tool.attack_damage()),
                    AttributeModifier::new(base + 1, Attribute::AttackSpeed, tool.attack_speed()),
                ]
            }
            _ => Vec::new(),
        }
    }
}
