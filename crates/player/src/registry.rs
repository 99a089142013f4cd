//! Registry owning all fake-player actors, keyed by (profile, dimension).

use crate::actor::Actor;
use clickcraft_core::{DimensionId, PlayerProfile};
use clickcraft_world::World;
use std::collections::HashMap;
use tracing::debug;

/// Owns every live [`Actor`], one per (profile, dimension) pair.
///
/// Callers must look actors up through the registry every tick instead of
/// retaining references, so that [`on_world_unload`](Self::on_world_unload)
/// can reclaim them without pinning an unloaded world. All mutation must
/// happen on the world's single logical update thread.
#[derive(Debug, Default)]
pub struct FakePlayerRegistry {
    actors: HashMap<(PlayerProfile, DimensionId), Actor>,
}

impl FakePlayerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the actor for `profile` in `world`, creating it on first use.
    ///
    /// The fresh actor's position is arbitrary; it is repositioned by
    /// `prepare_for_use` before every interaction.
    pub fn get_or_create(&mut self, world: &World, profile: &PlayerProfile) -> &mut Actor {
        let key = (profile.clone(), world.dimension());
        self.actors.entry(key).or_insert_with(|| {
            debug!(
                player = %profile.name,
                dimension = world.dimension().as_str(),
                "creating fake player"
            );
            Actor::new(profile.clone(), world.dimension())
        })
    }

    /// Drop every actor belonging to the unloaded dimension.
    ///
    /// Must be wired to the engine's world-unload notification; interactions
    /// are synchronous, so nothing can still reference a removed actor.
    pub fn on_world_unload(&mut self, dimension: DimensionId) {
        let before = self.actors.len();
        self.actors.retain(|(_, dim), _| *dim != dimension);
        let removed = before - self.actors.len();
        if removed > 0 {
            debug!(
                dimension = dimension.as_str(),
                removed, "unloaded fake players with world"
            );
        }
    }

    /// Number of live actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the registry holds no actors.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}
