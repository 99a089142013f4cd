//! The world: block storage, entity store, event log, and the interaction
//! dispatch primitives the fake-player simulator drives.
//!
//! All methods assume single-threaded access from the world's logical update
//! thread; nothing here locks.

use crate::block::{self, blocks, BlockId};
use crate::entity::{Entity, EntityId, EntityKind};
use crate::event::WorldEvent;
use crate::raycast;
use clickcraft_core::{Direction, DimensionId, ItemKind, ItemStack, PlayerProfile};
use clickcraft_physics::Aabb;
use glam::{DVec3, IVec3};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Outcome of dispatching an interaction to a block, entity, or item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// The action was consumed; stop further processing.
    Success,
    /// The target ignored the action; later handlers may still run.
    Pass,
    /// The action was explicitly rejected.
    Fail,
}

impl ActionResult {
    /// Whether the action was consumed.
    pub fn consumed(self) -> bool {
        matches!(self, ActionResult::Success)
    }
}

/// A solid-block raycast hit.
#[derive(Debug, Clone, Copy)]
pub struct BlockRayHit {
    /// Hit block position.
    pub pos: IVec3,
    /// Face the ray entered through.
    pub face: Direction,
    /// Exact hit point in world space.
    pub point: DVec3,
    /// Distance from the ray origin to the hit point.
    pub distance: f64,
}

/// A single world (one dimension's block and entity state).
#[derive(Debug)]
pub struct World {
    dimension: DimensionId,
    voxels: HashMap<IVec3, BlockId>,
    entities: BTreeMap<EntityId, Entity>,
    next_entity_id: u64,
    events: Vec<WorldEvent>,
}

impl World {
    /// Create an empty world for the given dimension.
    pub fn new(dimension: DimensionId) -> Self {
        Self {
            dimension,
            voxels: HashMap::new(),
            entities: BTreeMap::new(),
            next_entity_id: 1,
            events: Vec::new(),
        }
    }

    /// Dimension this world belongs to.
    pub fn dimension(&self) -> DimensionId {
        self.dimension
    }

    /// Block at `pos` (unset positions are air).
    pub fn block(&self, pos: IVec3) -> BlockId {
        self.voxels.get(&pos).copied().unwrap_or(blocks::AIR)
    }

    /// Set the block at `pos`. Setting air clears the slot.
    pub fn set_block(&mut self, pos: IVec3, id: BlockId) {
        if block::is_air(id) {
            self.voxels.remove(&pos);
        } else {
            self.voxels.insert(pos, id);
        }
    }

    /// Fill the inclusive box `[min, max]` with a block id.
    pub fn fill(&mut self, min: IVec3, max: IVec3, id: BlockId) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set_block(IVec3::new(x, y, z), id);
                }
            }
        }
    }

    /// Ray-vs-solid-geometry test: cast from `origin` along `direction` for
    /// up to `max_distance`, stopping on solid blocks and passing through
    /// liquids.
    pub fn raycast_blocks(
        &self,
        origin: DVec3,
        direction: DVec3,
        max_distance: f64,
    ) -> Option<BlockRayHit> {
        let hit = raycast::raycast(origin, direction, max_distance, |pos| {
            block::is_solid(self.block(pos))
        })?;
        let face = Direction::from_normal(hit.face_normal.to_array())
            // A solid origin voxel has no entry face; report the face looking
            // back along the ray's dominant axis.
            .unwrap_or_else(|| dominant_direction(-direction));
        Some(BlockRayHit {
            pos: hit.block_pos,
            face,
            point: hit.hit_pos,
            distance: hit.distance,
        })
    }

    /// Whether an unobstructed line exists between two points.
    pub fn line_of_sight(&self, from: DVec3, to: DVec3) -> bool {
        let delta = to - from;
        let distance = delta.length();
        if distance < 1e-9 {
            return true;
        }
        self.raycast_blocks(from, delta / distance, distance)
            .is_none()
    }

    /// Spawn a new entity and return its id.
    pub fn spawn(&mut self, kind: EntityKind, pos: DVec3) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(id, Entity::new(id, kind, pos));
        id
    }

    /// Look up an entity.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Look up an entity mutably.
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Remove an entity, returning it if present.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Ids of entities whose pick box intersects `aabb` and which satisfy
    /// `filter`. Iteration order is stable (id order) for determinism.
    pub fn entities_in_aabb(
        &self,
        aabb: &Aabb,
        mut filter: impl FnMut(&Entity) -> bool,
    ) -> Vec<EntityId> {
        self.entities
            .values()
            .filter(|e| e.pick_aabb().intersects(aabb) && filter(e))
            .map(|e| e.id)
            .collect()
    }

    /// Root of an entity's riding chain (the entity itself when not riding).
    pub fn riding_root(&self, id: EntityId) -> EntityId {
        let mut current = id;
        while let Some(parent) = self.entities.get(&current).and_then(|e| e.riding) {
            if parent == current {
                break;
            }
            current = parent;
        }
        current
    }

    /// Right-click a block with the held item.
    ///
    /// Interactive blocks consume the click themselves; otherwise a held
    /// block item is placed against the clicked face. `hit` is the click
    /// point expressed relative to the caller's anchor position.
    pub fn use_item_on_block(
        &mut self,
        pos: IVec3,
        face: Direction,
        hit: DVec3,
        held: &mut Option<ItemStack>,
    ) -> ActionResult {
        let id = self.block(pos);
        if block::properties(id).interactive {
            debug!(?pos, block = id, "block consumed use");
            self.events.push(WorldEvent::BlockUsed {
                pos: pos.to_array(),
                hit: hit.to_array(),
            });
            return ActionResult::Success;
        }

        if let Some(stack) = held.take() {
            if let ItemKind::Block(to_place) = stack.kind {
                let target = pos + IVec3::from_array(face.unit());
                if block::is_air(self.block(target)) {
                    self.set_block(target, to_place);
                    self.events.push(WorldEvent::BlockPlaced {
                        pos: target.to_array(),
                        block: to_place,
                    });
                    *held = stack.shrink(1);
                    return ActionResult::Success;
                }
            }
            *held = Some(stack);
        }
        ActionResult::Pass
    }

    /// Generic right-click with the held item (not aimed at anything).
    pub fn use_item(&mut self, held: &mut Option<ItemStack>) -> ActionResult {
        if let Some(stack) = held.take() {
            if matches!(stack.kind, ItemKind::Food { .. }) {
                self.events.push(WorldEvent::ItemConsumed);
                *held = stack.shrink(1);
                return ActionResult::Success;
            }
            *held = Some(stack);
        }
        ActionResult::Pass
    }

    /// Precise-point interaction with an entity ("interact-at").
    pub fn interact_entity_at(&mut self, id: EntityId, _point: DVec3) -> ActionResult {
        match self.entities.get(&id).map(|e| &e.kind) {
            Some(EntityKind::ArmorStand) => {
                self.events.push(WorldEvent::EntityUsed { id });
                ActionResult::Success
            }
            Some(_) => ActionResult::Pass,
            None => ActionResult::Fail,
        }
    }

    /// Generic interaction with an entity.
    pub fn interact_entity(&mut self, id: EntityId) -> ActionResult {
        match self.entities.get(&id).map(|e| &e.kind) {
            Some(EntityKind::Mob(crate::entity::MobKind::Villager)) => {
                self.events.push(WorldEvent::EntityUsed { id });
                ActionResult::Success
            }
            Some(_) => ActionResult::Pass,
            None => ActionResult::Fail,
        }
    }

    /// Deal attack damage to an entity, removing it when it dies.
    pub fn attack_entity(&mut self, id: EntityId, damage: f64) {
        let died = match self.entities.get_mut(&id) {
            Some(entity) => entity.hurt(damage),
            None => return,
        };
        self.events.push(WorldEvent::EntityAttacked { id, damage });
        if died {
            debug!(?id, "entity died from attack");
            self.entities.remove(&id);
        }
    }

    /// Begin breaking a block (the break itself is progressive and owned by
    /// the mining system; this only records the start).
    pub fn start_block_break(&mut self, pos: IVec3, face: Direction) {
        self.events.push(WorldEvent::BlockBreakStarted {
            pos: pos.to_array(),
            face,
        });
    }

    /// Drop an item stack into the world as a dropped-item entity.
    pub fn drop_item(&mut self, pos: DVec3, stack: ItemStack) -> EntityId {
        let id = self.spawn(EntityKind::DroppedItem(stack), pos);
        self.events.push(WorldEvent::ItemDropped { id });
        id
    }

    /// Signal a right-click that hit nothing with an empty hand.
    pub fn signal_empty_right_click(&mut self, profile: &PlayerProfile) {
        self.events.push(WorldEvent::EmptyRightClick {
            player: profile.name.clone(),
        });
    }

    /// Signal a left-click that hit nothing with an empty hand.
    pub fn signal_empty_left_click(&mut self, profile: &PlayerProfile) {
        self.events.push(WorldEvent::EmptyLeftClick {
            player: profile.name.clone(),
        });
    }

    /// Drain all events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded since the last drain.
    pub fn events(&self) -> &[WorldEvent] {
        &self.events
    }
}

/// The axis direction a vector mostly points along.
fn dominant_direction(v: DVec3) -> Direction {
    let ax = v.x.abs();
    let ay = v.y.abs();
    let az = v.z.abs();
    if ax >= ay && ax >= az {
        if v.x >= 0.0 {
            Direction::East
        } else {
            Direction::West
        }
    } else if ay >= az {
        if v.y >= 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    } else if v.z >= 0.0 {
        Direction::South
    } else {
        Direction::North
    }
}
