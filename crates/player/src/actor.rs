//! The simulated actor: a player-shaped interaction source with no network
//! connection and no render context.

use clickcraft_core::{Attribute, AttributeMap, DimensionId, ItemStack, PlayerProfile};
use clickcraft_physics::Aabb;
use clickcraft_world::EntityId;
use glam::DVec3;
use tracing::debug;

/// Base attack damage of an empty hand, in half-hearts.
const BASE_ATTACK_DAMAGE: f64 = 1.0;

/// Base attack speed in attacks per second.
const BASE_ATTACK_SPEED: f64 = 4.0;

/// Fixed behavioral overrides that distinguish a fake actor from a normal
/// player entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorConfig {
    /// Eye height above the feet position. Zero for fake actors so the
    /// position is the exact ray origin.
    pub eye_height: f64,
    /// Whether container contents are mirrored to a client after use.
    /// Disabled for fake actors; there is no client to crash.
    pub sync_container_contents: bool,
    /// Attack strength multiplier. A normal player recharges this over
    /// ticks; fake actors never tick, so it is pinned at full strength.
    pub attack_strength_scale: f64,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            eye_height: 0.0,
            sync_container_contents: false,
            attack_strength_scale: 1.0,
        }
    }
}

/// A simulated, non-networked player-like entity used to perform
/// interactions on behalf of a block.
///
/// Actors are owned exclusively by the [`crate::FakePlayerRegistry`]; callers
/// look one up per tick and must not retain references across ticks.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Stable identity of this actor.
    pub profile: PlayerProfile,
    dimension: DimensionId,
    /// Feet position (equals the eye/ray origin under the default config).
    pub pos: DVec3,
    /// Yaw in degrees; 0 faces south (+Z).
    pub yaw: f32,
    /// Pitch in degrees; positive looks down.
    pub pitch: f32,
    held: Option<ItemStack>,
    /// Attribute state; must always mirror the currently held item.
    pub attributes: AttributeMap,
    overflow: Vec<ItemStack>,
    /// Vehicle chain entry, if the actor is riding an entity.
    pub riding: Option<EntityId>,
    config: ActorConfig,
}

impl Actor {
    /// Player bounding-box half width.
    pub const HALF_WIDTH: f64 = 0.3;
    /// Player bounding-box height.
    pub const HEIGHT: f64 = 1.8;

    /// Create an actor with the fake-player behavioral overrides.
    pub fn new(profile: PlayerProfile, dimension: DimensionId) -> Self {
        Self::with_config(profile, dimension, ActorConfig::default())
    }

    /// Create an actor with explicit overrides.
    pub fn with_config(profile: PlayerProfile, dimension: DimensionId, config: ActorConfig) -> Self {
        let mut attributes = AttributeMap::new();
        attributes.set_base(Attribute::AttackDamage, BASE_ATTACK_DAMAGE);
        attributes.set_base(Attribute::AttackSpeed, BASE_ATTACK_SPEED);
        Self {
            profile,
            dimension,
            pos: DVec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            held: None,
            attributes,
            overflow: Vec::new(),
            riding: None,
            config,
        }
    }

    /// Dimension of the world this actor belongs to.
    pub fn dimension(&self) -> DimensionId {
        self.dimension
    }

    /// The behavioral overrides this actor was built with.
    pub fn config(&self) -> ActorConfig {
        self.config
    }

    /// Move the actor and set its orientation in one step.
    pub fn set_pos_and_angles(&mut self, pos: DVec3, yaw: f32, pitch: f32) {
        self.pos = pos;
        self.yaw = yaw;
        self.pitch = pitch;
    }

    /// Eye position: the ray origin for all interaction raycasts.
    pub fn eye_pos(&self) -> DVec3 {
        self.pos + DVec3::new(0.0, self.config.eye_height, 0.0)
    }

    /// Unit look vector derived from yaw/pitch.
    pub fn look_vec(&self) -> DVec3 {
        let yaw = (self.yaw as f64).to_radians();
        let pitch = (self.pitch as f64).to_radians();
        DVec3::new(
            -yaw.sin() * pitch.cos(),
            -pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
    }

    /// Bounding box at the current position.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(
            self.pos - DVec3::new(Self::HALF_WIDTH, 0.0, Self::HALF_WIDTH),
            self.pos + DVec3::new(Self::HALF_WIDTH, Self::HEIGHT, Self::HALF_WIDTH),
        )
    }

    /// The held item, if any.
    pub fn held(&self) -> Option<&ItemStack> {
        self.held.as_ref()
    }

    /// Mutable access to the held slot for dispatch primitives.
    pub fn held_slot_mut(&mut self) -> &mut Option<ItemStack> {
        &mut self.held
    }

    /// Replace the held slot contents.
    pub fn set_held(&mut self, stack: Option<ItemStack>) {
        self.held = stack;
    }

    /// Effective attack damage under the fixed attack-strength override.
    pub fn attack_damage(&self) -> f64 {
        self.attributes.value(Attribute::AttackDamage) * self.config.attack_strength_scale
    }

    /// Squared distance from the actor's feet to a point.
    pub fn distance_sq(&self, point: DVec3) -> f64 {
        self.pos.distance_squared(point)
    }

    /// Stash an item acquired mid-interaction (pickup, container residue).
    pub fn push_overflow(&mut self, stack: ItemStack) {
        self.overflow.push(stack);
    }

    /// Take everything the actor accumulated beyond its held slot.
    pub fn drain_overflow(&mut self) -> Vec<ItemStack> {
        std::mem::take(&mut self.overflow)
    }

    /// Mirror open-container contents to the owning client.
    ///
    /// Networked players do this after every interaction; fake actors have
    /// no client, so the default config turns it into a no-op.
    pub fn sync_containers(&self) {
        if self.config.sync_container_contents {
            debug!(player = %self.profile.name, "syncing container contents");
        }
    }
}
