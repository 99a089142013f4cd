//! Entity model: mobs, dropped items, and the handful of non-combat kinds
//! the interaction simulator must recognize.

use clickcraft_core::ItemStack;
use clickcraft_physics::Aabb;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Unique identifier for an entity within a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Types of mobs that can spawn in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MobKind {
    /// Passive farm animal.
    Pig,
    /// Passive farm animal.
    Cow,
    /// Passive farm animal.
    Sheep,
    /// Passive farm animal.
    Chicken,
    /// NPC; consumes right-click interactions (trading).
    Villager,
    /// Hostile mob.
    Zombie,
}

impl MobKind {
    /// Canonical lowercase string key for configs/logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            MobKind::Pig => "pig",
            MobKind::Cow => "cow",
            MobKind::Sheep => "sheep",
            MobKind::Chicken => "chicken",
            MobKind::Villager => "villager",
            MobKind::Zombie => "zombie",
        }
    }

    /// Maximum health in half-hearts.
    pub const fn max_health(self) -> f64 {
        match self {
            MobKind::Pig | MobKind::Chicken => 10.0,
            MobKind::Cow | MobKind::Sheep => 10.0,
            MobKind::Villager => 20.0,
            MobKind::Zombie => 20.0,
        }
    }
}

/// What an entity is, which determines its size, combat eligibility, and how
/// it responds to interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// A living mob.
    Mob(MobKind),
    /// Pose-able stand; consumes precise-point interactions.
    ArmorStand,
    /// A dropped item floating in the world.
    DroppedItem(ItemStack),
    /// An experience orb worth the contained amount.
    ExperienceOrb(u32),
    /// An arrow in flight or stuck in the ground.
    Arrow,
}

impl EntityKind {
    /// Whether an attack action may target this entity.
    ///
    /// Dropped items, experience orbs, and projectiles are never valid
    /// attack targets.
    pub fn attackable(&self) -> bool {
        !matches!(
            self,
            EntityKind::DroppedItem(_) | EntityKind::ExperienceOrb(_) | EntityKind::Arrow
        )
    }

    /// Whether rays collide with this entity's bounding box at all.
    pub fn collidable(&self) -> bool {
        matches!(self, EntityKind::Mob(_) | EntityKind::ArmorStand)
    }

    /// Half width of the entity's bounding box.
    pub fn half_width(&self) -> f64 {
        match self {
            EntityKind::Mob(MobKind::Pig) => 0.45,
            EntityKind::Mob(MobKind::Chicken) => 0.2,
            EntityKind::Mob(_) => 0.3,
            EntityKind::ArmorStand => 0.25,
            EntityKind::DroppedItem(_) => 0.125,
            EntityKind::ExperienceOrb(_) => 0.25,
            EntityKind::Arrow => 0.25,
        }
    }

    /// Height of the entity's bounding box.
    pub fn height(&self) -> f64 {
        match self {
            EntityKind::Mob(MobKind::Pig) => 0.9,
            EntityKind::Mob(MobKind::Chicken) => 0.7,
            EntityKind::Mob(MobKind::Cow | MobKind::Sheep) => 1.3,
            EntityKind::Mob(_) => 1.95,
            EntityKind::ArmorStand => 1.975,
            EntityKind::DroppedItem(_) => 0.25,
            EntityKind::ExperienceOrb(_) => 0.5,
            EntityKind::Arrow => 0.5,
        }
    }
}

/// An entity instance stored by the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique id within the owning world.
    pub id: EntityId,
    /// What the entity is.
    pub kind: EntityKind,
    /// Feet position (box bottom center).
    pub pos: [f64; 3],
    /// Remaining health (meaningful for mobs only).
    pub health: f64,
    /// Spectator-like entities are invisible to interaction raycasts.
    pub spectator: bool,
    /// Entity this one is riding, if any.
    pub riding: Option<EntityId>,
    /// Whether a rider of the same vehicle chain may interact with this
    /// entity (boats: no, larger vehicles: yes).
    pub rider_interactable: bool,
    /// Extra margin added to the bounding box during picking.
    pub collision_border: f64,
}

impl Entity {
    /// Create a new entity with kind defaults.
    pub fn new(id: EntityId, kind: EntityKind, pos: DVec3) -> Self {
        let health = match &kind {
            EntityKind::Mob(mob) => mob.max_health(),
            _ => 1.0,
        };
        Self {
            id,
            kind,
            pos: pos.to_array(),
            health,
            spectator: false,
            riding: None,
            rider_interactable: false,
            collision_border: 0.0,
        }
    }

    /// Feet position as a vector.
    pub fn position(&self) -> DVec3 {
        DVec3::from_array(self.pos)
    }

    /// Center of the bounding box.
    pub fn center(&self) -> DVec3 {
        self.position() + DVec3::new(0.0, self.kind.height() * 0.5, 0.0)
    }

    /// Bounding box at the current position.
    pub fn aabb(&self) -> Aabb {
        let pos = self.position();
        let hw = self.kind.half_width();
        let h = self.kind.height();
        Aabb::new(
            DVec3::new(pos.x - hw, pos.y, pos.z - hw),
            DVec3::new(pos.x + hw, pos.y + h, pos.z + hw),
        )
    }

    /// Bounding box inflated by the picking margin.
    pub fn pick_aabb(&self) -> Aabb {
        self.aabb().inflate(self.collision_border)
    }

    /// Apply damage; returns true when the entity dies.
    pub fn hurt(&mut self, amount: f64) -> bool {
        self.health -= amount;
        self.health <= 0.0
    }
}
