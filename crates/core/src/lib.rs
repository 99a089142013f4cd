#![warn(missing_docs)]
//! Core primitives shared across the workspace.

pub mod attribute;
pub mod direction;
pub mod item;

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use attribute::{Attribute, AttributeMap, AttributeModifier, ModifierId};
pub use direction::Direction;
pub use item::{ItemKind, ItemStack, ToolKind};

/// Fixed tick type (20 TPS => 50 ms per tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimTick(pub u64);

impl SimTick {
    /// First tick in any deterministic timeline.
    pub const ZERO: Self = Self(0);

    /// Advance by `delta` ticks.
    pub fn advance(self, delta: u64) -> Self {
        Self(self.0 + delta)
    }
}

/// Helper to derive a reproducible RNG seeded by world + tick domains.
pub fn scoped_rng(world_seed: u64, domain_hash: u64, tick: SimTick) -> StdRng {
    let seed = world_seed ^ domain_hash ^ tick.0;
    StdRng::seed_from_u64(seed)
}

/// Stable identifier for a world dimension.
///
/// Gameplay rules are dimension-scoped; the fake-player registry keys actors
/// by `(profile, dimension)` so the same profile in two dimensions yields two
/// distinct actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum DimensionId {
    /// The Overworld dimension.
    Overworld = 0,
    /// The Nether dimension.
    Nether = 1,
    /// The End dimension.
    End = 2,
}

impl DimensionId {
    /// Canonical string key used in configs/logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overworld => "overworld",
            Self::Nether => "nether",
            Self::End => "end",
        }
    }
}

impl Default for DimensionId {
    fn default() -> Self {
        Self::Overworld
    }
}

/// Stable identity for a simulated (non-networked) player.
///
/// The numeric id plays the role of a profile UUID; the name only shows up in
/// logs and event payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Stable numeric key, unique per profile.
    pub id: u64,
    /// Display name for logs/events.
    pub name: String,
}

impl PlayerProfile {
    /// Create a profile from a stable id and display name.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
