//! Attribute system - stat-altering modifiers contributed by equipped items.
//!
//! An actor carries an [`AttributeMap`]; equipping an item applies the item's
//! modifiers, unequipping removes them again by id. The map must return to
//! its pre-equip state after a matching remove (no leakage, no panic when
//! removing modifiers that were never applied).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Attributes that held items can modify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Damage dealt per attack, in half-hearts.
    AttackDamage,
    /// Attacks per second.
    AttackSpeed,
    /// Movement speed in blocks per tick.
    MovementSpeed,
}

/// Stable identifier for a single modifier instance.
///
/// Removal is keyed by this id, so applying and removing the same item's
/// modifiers is always symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModifierId(pub u64);

/// A single additive stat modifier contributed by an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeModifier {
    /// Identity used for apply/remove symmetry.
    pub id: ModifierId,
    /// The attribute being modified.
    pub attribute: Attribute,
    /// Additive amount (may be negative).
    pub amount: f64,
}

impl AttributeModifier {
    /// Create a new additive modifier.
    pub fn new(id: u64, attribute: Attribute, amount: f64) -> Self {
        Self {
            id: ModifierId(id),
            attribute,
            amount,
        }
    }
}

/// Per-actor attribute state: base values plus applied modifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeMap {
    base: HashMap<Attribute, f64>,
    modifiers: HashMap<Attribute, Vec<AttributeModifier>>,
}

impl AttributeMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base value for an attribute.
    pub fn set_base(&mut self, attribute: Attribute, value: f64) {
        self.base.insert(attribute, value);
    }

    /// Effective value: base plus all applied modifier amounts.
    pub fn value(&self, attribute: Attribute) -> f64 {
        let base = self.base.get(&attribute).copied().unwrap_or(0.0);
        let bonus: f64 = self
            .modifiers
            .get(&attribute)
            .map(|mods| mods.iter().map(|m| m.amount).sum())
            .unwrap_or(0.0);
        base + bonus
    }

    /// Apply a set of modifiers. A modifier already present (same id, same
    /// attribute) is not applied twice.
    pub fn apply_modifiers(&mut self, modifiers: &[AttributeModifier]) {
        for modifier in modifiers {
            let slot = self.modifiers.entry(modifier.attribute).or_default();
            if !slot.iter().any(|m| m.id == modifier.id) {
                slot.push(*modifier);
            }
        }
    }

    /// Remove a set of modifiers by id. Ids that are not applied are ignored.
    pub fn remove_modifiers(&mut self, modifiers: &[AttributeModifier]) {
        for modifier in modifiers {
            if let Some(slot) = self.modifiers.get_mut(&modifier.attribute) {
                slot.retain(|m| m.id != modifier.id);
                if slot.is_empty() {
                    self.modifiers.remove(&modifier.attribute);
                }
            }
        }
    }

    /// Total number of applied modifiers across all attributes.
    pub fn modifier_count(&self) -> usize {
        self.modifiers.values().map(Vec::len).sum()
    }
}
