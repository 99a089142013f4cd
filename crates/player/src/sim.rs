//! The interaction simulator: position an actor against a block face, trace
//! its look ray against blocks and entities, and dispatch the click.
//!
//! The trace is split into two pure halves — the solid-block ray and the
//! entity bounding-box scan — composed by [`pick_target`], which owns the
//! tie-break: with both hits at exactly equal distance the block branch wins
//! (the entity is only taken when it is strictly closer to the eye point).

use crate::actor::Actor;
use clickcraft_core::{Direction, ItemStack};
use clickcraft_world::{block, BlockRayHit, EntityId, World};
use glam::{DVec3, IVec3};

/// Maximum block-ray length in blocks.
pub const REACH: f64 = 5.0;

/// Maximum distance from the eye at which a pointed entity is accepted.
///
/// Deliberately shorter than [`REACH`]; the mismatch is inherited behavior
/// and entity picks between 3 and 5 blocks degrade to a miss.
pub const MAX_ENTITY_PICK: f64 = 3.0;

/// Squared interaction range when the target is visible.
pub const VISIBLE_RANGE_SQ: f64 = 36.0;

/// Squared interaction range when line of sight is blocked.
pub const OBSCURED_RANGE_SQ: f64 = 9.0;

/// How far outside the anchor block face the actor is placed.
const FACE_OFFSET: f64 = 1.0 / 1.9;

/// Result of tracing the actor's look ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trace {
    /// Nothing usable was hit; `point` is where the trace ended.
    Miss {
        /// End point of the trace.
        point: DVec3,
    },
    /// A solid block was hit.
    Block {
        /// Hit block position.
        pos: IVec3,
        /// Face the ray entered through.
        face: Direction,
        /// Exact hit point.
        point: DVec3,
    },
    /// An entity was hit.
    Entity {
        /// Hit entity.
        id: EntityId,
        /// Exact hit point on its bounding box.
        point: DVec3,
    },
}

impl Trace {
    /// The point this trace resolved to.
    pub fn point(&self) -> DVec3 {
        match self {
            Trace::Miss { point } | Trace::Block { point, .. } | Trace::Entity { point, .. } => {
                *point
            }
        }
    }
}

/// The three categories of entity-targeted actions, ordered by specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseAction {
    /// Precise-point interaction.
    InteractAt,
    /// Generic interaction.
    Interact,
    /// Hostile action.
    Attack,
}

/// Set up a fake actor to click things. The actor is placed at the center of
/// the `direction` face of the block at `anchor`, slightly outside it, facing
/// straight into `direction`, with `to_hold` installed (and its attribute
/// modifiers applied).
pub fn prepare_for_use(
    actor: &mut Actor,
    anchor: IVec3,
    direction: Direction,
    to_hold: Option<ItemStack>,
) {
    let unit = direction.unit();
    let pos = anchor.as_dvec3()
        + DVec3::new(
            0.5 + unit[0] as f64 * FACE_OFFSET,
            0.5 + unit[1] as f64 * FACE_OFFSET,
            0.5 + unit[2] as f64 * FACE_OFFSET,
        );
    actor.set_pos_and_angles(pos, direction.yaw(), direction.pitch());
    if let Some(stack) = &to_hold {
        actor.attributes.apply_modifiers(&stack.mainhand_modifiers());
    }
    actor.set_held(to_hold);
}

/// Clean up a fake actor after use: remove the modifiers `old_stack`
/// contributed, clear the held slot, hand `result_stack` to `on_result` for
/// persistence, and drop anything the actor accumulated into the world so it
/// holds nothing between interactions.
pub fn cleanup_after_use(
    actor: &mut Actor,
    world: &mut World,
    result_stack: Option<ItemStack>,
    old_stack: Option<ItemStack>,
    on_result: impl FnOnce(Option<ItemStack>),
) {
    if let Some(old) = &old_stack {
        actor
            .attributes
            .remove_modifiers(&old.mainhand_modifiers());
    }
    actor.set_held(None);
    on_result(result_stack);
    actor.sync_containers();
    for stack in actor.drain_overflow() {
        world.drop_item(actor.pos, stack);
    }
}

/// Select the nearest of a block hit and an entity hit, measured from `eye`.
///
/// Pure; the entity trace is only preferred when strictly closer, so an
/// exact distance tie resolves to the block.
pub fn pick_target(eye: DVec3, block: Option<Trace>, entity: Option<Trace>) -> Option<Trace> {
    match (block, entity) {
        (Some(b), Some(e)) => {
            let d_block = eye.distance(b.point());
            let d_entity = eye.distance(e.point());
            if d_block > d_entity {
                Some(e)
            } else {
                Some(b)
            }
        }
        (Some(b), None) => Some(b),
        (None, entity) => entity,
    }
}

/// Scan entities along the actor's look ray.
///
/// `block_distance` is the distance to the solid-block hit, if any; entities
/// beyond it are not pointed at. A pointed entity farther than
/// [`MAX_ENTITY_PICK`] from the eye degrades to a [`Trace::Miss`] carrying
/// the computed point. Returns `None` when nothing is pointed at.
pub fn trace_entities(actor: &Actor, world: &World, block_distance: Option<f64>) -> Option<Trace> {
    let eye = actor.eye_pos();
    let look = actor.look_vec();
    let reach_vec = look * REACH;
    let search = actor.aabb().extend(reach_vec).inflate(1.0);

    let actor_root = actor.riding.map(|r| world.riding_root(r));
    let candidates = world.entities_in_aabb(&search, |e| !e.spectator && e.kind.collidable());

    let mut best = block_distance.unwrap_or(REACH);
    let mut pointed: Option<(EntityId, DVec3)> = None;

    for id in candidates {
        let Some(entity) = world.entity(id) else {
            continue;
        };
        let aabb = entity.pick_aabb();
        let intercept = aabb.clip_segment(eye, eye + reach_vec);

        if aabb.contains(eye) {
            // Ray origin inside the candidate box: immediate pick.
            if best >= 0.0 {
                pointed = Some((id, intercept.unwrap_or(eye)));
                best = 0.0;
            }
        } else if let Some(point) = intercept {
            let dist = eye.distance(point);
            if dist < best || best == 0.0 {
                let same_root =
                    actor_root.is_some_and(|root| world.riding_root(id) == root);
                if same_root && !entity.rider_interactable {
                    if best == 0.0 {
                        pointed = Some((id, point));
                    }
                } else {
                    pointed = Some((id, point));
                    best = dist;
                }
            }
        }
    }

    let (id, point) = pointed?;
    if eye.distance(point) > MAX_ENTITY_PICK {
        return Some(Trace::Miss { point });
    }
    let accepted = match block_distance {
        Some(d) => best < d,
        None => true,
    };
    accepted.then_some(Trace::Entity { id, point })
}

/// Dispatch an entity-targeted action, gated on interaction range: squared
/// distance must be under 36 when the target is visible, 9 when occluded.
pub fn process_use_entity(
    actor: &Actor,
    world: &mut World,
    id: EntityId,
    point: Option<DVec3>,
    action: UseAction,
) -> bool {
    let Some(entity) = world.entity(id) else {
        return false;
    };
    let target_pos = entity.position();
    let target_center = entity.center();
    let attackable = entity.kind.attackable();

    let visible = world.line_of_sight(actor.eye_pos(), target_center);
    let range_sq = if visible {
        VISIBLE_RANGE_SQ
    } else {
        OBSCURED_RANGE_SQ
    };
    if actor.distance_sq(target_pos) >= range_sq {
        return false;
    }

    match action {
        UseAction::Interact => world.interact_entity(id).consumed(),
        UseAction::InteractAt => match point {
            Some(point) => world.interact_entity_at(id, point).consumed(),
            None => false,
        },
        UseAction::Attack => {
            if !attackable {
                return false;
            }
            // Never attack along the actor's own riding chain.
            if let Some(riding) = actor.riding {
                if world.riding_root(riding) == world.riding_root(id) {
                    return false;
                }
            }
            world.attack_entity(id, actor.attack_damage());
            true
        }
    }
}

/// Use whatever the actor is holding in its facing direction. Returns the
/// remainder of the held item, which the caller must persist back into its
/// own storage.
pub fn right_click(actor: &mut Actor, world: &mut World, anchor: IVec3) -> Option<ItemStack> {
    let eye = actor.eye_pos();
    let block_hit = world.raycast_blocks(eye, actor.look_vec(), REACH);
    let target = pick_target(
        eye,
        block_hit.map(block_hit_trace),
        trace_entities(actor, world, block_hit.map(|h| h.distance)),
    );

    match target {
        Some(Trace::Entity { id, point }) => {
            if process_use_entity(actor, world, id, Some(point), UseAction::InteractAt)
                || process_use_entity(actor, world, id, None, UseAction::Interact)
            {
                return actor.held().cloned();
            }
        }
        Some(Trace::Block { pos, face, point }) => {
            if !block::is_air(world.block(pos)) {
                // Hit offset is anchor-relative, not block-relative.
                let local = point - anchor.as_dvec3();
                if world
                    .use_item_on_block(pos, face, local, actor.held_slot_mut())
                    .consumed()
                {
                    return actor.held().cloned();
                }
            }
        }
        _ => {}
    }

    if actor.held().is_none() && matches!(target, None | Some(Trace::Miss { .. })) {
        world.signal_empty_right_click(&actor.profile);
    }
    if actor.held().is_some() {
        world.use_item(actor.held_slot_mut());
    }
    actor.held().cloned()
}

/// Attack with whatever the actor is holding in its facing direction.
/// Returns the remainder of the held item.
pub fn left_click(actor: &mut Actor, world: &mut World, _anchor: IVec3) -> Option<ItemStack> {
    let eye = actor.eye_pos();
    let block_hit = world.raycast_blocks(eye, actor.look_vec(), REACH);
    let target = pick_target(
        eye,
        block_hit.map(block_hit_trace),
        trace_entities(actor, world, block_hit.map(|h| h.distance)),
    );

    match target {
        Some(Trace::Entity { id, .. }) => {
            if process_use_entity(actor, world, id, None, UseAction::Attack) {
                return actor.held().cloned();
            }
        }
        Some(Trace::Block { pos, face, .. }) => {
            if !block::is_air(world.block(pos)) {
                world.start_block_break(pos, face);
                return actor.held().cloned();
            }
        }
        _ => {}
    }

    if actor.held().is_none() && matches!(target, None | Some(Trace::Miss { .. })) {
        world.signal_empty_left_click(&actor.profile);
    }
    actor.held().cloned()
}

fn block_hit_trace(hit: BlockRayHit) -> Trace {
    Trace::Block {
        pos: hit.pos,
        face: hit.face,
        point: hit.point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clickcraft_core::{
        DimensionId, ItemKind, ItemStack, PlayerProfile, ToolKind,
    };
    use clickcraft_world::{blocks, EntityKind, MobKind, WorldEvent};
    use proptest::prelude::*;

    const ANCHOR: IVec3 = IVec3::new(0, 10, 0);

    fn world() -> World {
        World::new(DimensionId::Overworld)
    }

    fn actor() -> Actor {
        Actor::new(PlayerProfile::new(1, "clicker"), DimensionId::Overworld)
    }

    fn prepared(direction: Direction, held: Option<ItemStack>) -> Actor {
        let mut actor = actor();
        prepare_for_use(&mut actor, ANCHOR, direction, held);
        actor
    }

    fn count_kind(events: &[WorldEvent], kind: &str) -> usize {
        events.iter().filter(|e| e.kind() == kind).count()
    }

    // --- prepare / cleanup ---------------------------------------------

    #[test]
    fn prepare_points_the_ray_away_from_the_anchor() {
        for direction in Direction::ALL {
            let actor = prepared(direction, None);
            let unit = direction.unit();
            let expected = DVec3::new(unit[0] as f64, unit[1] as f64, unit[2] as f64);

            assert!(
                (actor.look_vec() - expected).length() < 1e-6,
                "look vector for {direction} should be {expected:?}"
            );
            let offset = actor.pos - (ANCHOR.as_dvec3() + DVec3::splat(0.5));
            assert!(
                (offset - expected / 1.9).length() < 1e-9,
                "actor for {direction} sits just outside the face"
            );
        }
    }

    #[test]
    fn modifiers_are_fully_removed_by_cleanup() {
        let mut w = world();
        let mut actor = actor();
        let sword = ItemStack::tool(ToolKind::Sword);
        let before = actor.attributes.modifier_count();

        prepare_for_use(&mut actor, ANCHOR, Direction::Up, Some(sword.clone()));
        assert_eq!(actor.attributes.modifier_count(), before + 2);
        assert!(actor.attack_damage() > 1.0);

        let mut persisted = None;
        cleanup_after_use(&mut actor, &mut w, Some(sword.clone()), Some(sword), |s| {
            persisted = s
        });
        assert_eq!(actor.attributes.modifier_count(), before);
        assert!(actor.held().is_none());
        assert!(persisted.is_some());
    }

    #[test]
    fn cleanup_of_empty_stack_is_harmless() {
        let mut w = world();
        let mut actor = actor();
        prepare_for_use(&mut actor, ANCHOR, Direction::Up, None);
        cleanup_after_use(&mut actor, &mut w, None, None, |s| assert!(s.is_none()));
        assert_eq!(actor.attributes.modifier_count(), 0);
    }

    #[test]
    fn cleanup_drops_overflow_into_the_world() {
        let mut w = world();
        let mut actor = actor();
        actor.push_overflow(ItemStack::new(ItemKind::Simple(9), 5));
        cleanup_after_use(&mut actor, &mut w, None, None, |_| {});
        let events = w.drain_events();
        assert_eq!(count_kind(&events, "item_dropped"), 1);
        assert_eq!(w.entity_count(), 1);
    }

    // --- selection ------------------------------------------------------

    #[test]
    fn entity_in_front_of_block_is_attacked() {
        let mut w = world();
        w.set_block(IVec3::new(5, 10, 0), blocks::STONE);
        let pig = w.spawn(EntityKind::Mob(MobKind::Pig), DVec3::new(3.5, 10.0, 0.5));
        let mut actor = prepared(Direction::East, None);

        left_click(&mut actor, &mut w, ANCHOR);

        let events = w.drain_events();
        assert_eq!(count_kind(&events, "entity_attacked"), 1);
        assert_eq!(count_kind(&events, "block_break_started"), 0);
        assert!(w.entity(pig).is_some());
    }

    #[test]
    fn block_in_front_of_entity_is_broken() {
        let mut w = world();
        w.set_block(IVec3::new(3, 10, 0), blocks::STONE);
        w.spawn(EntityKind::Mob(MobKind::Pig), DVec3::new(4.5, 10.0, 0.5));
        let mut actor = prepared(Direction::East, None);

        left_click(&mut actor, &mut w, ANCHOR);

        let events = w.drain_events();
        assert_eq!(count_kind(&events, "block_break_started"), 1);
        assert_eq!(count_kind(&events, "entity_attacked"), 0);
    }

    #[test]
    fn pick_target_prefers_block_on_exact_tie() {
        let eye = DVec3::ZERO;
        let point = DVec3::new(2.0, 0.0, 0.0);
        let block = Trace::Block {
            pos: IVec3::new(2, 0, 0),
            face: Direction::West,
            point,
        };
        let entity = Trace::Entity {
            id: EntityId(1),
            point,
        };
        assert_eq!(pick_target(eye, Some(block), Some(entity)), Some(block));
    }

    #[test]
    fn entity_pick_beyond_three_blocks_degrades_to_miss() {
        let w = {
            let mut w = world();
            // Box spans x 4.35..5.25; intercept at 4.35 is ~3.3 from the eye.
            w.spawn(EntityKind::Mob(MobKind::Pig), DVec3::new(4.8, 10.0, 0.5));
            w
        };
        let actor = prepared(Direction::East, None);

        match trace_entities(&actor, &w, None) {
            Some(Trace::Miss { point }) => {
                assert!(actor.eye_pos().distance(point) > MAX_ENTITY_PICK)
            }
            other => panic!("expected miss, got {other:?}"),
        }
    }

    #[test]
    fn miss_from_far_entity_still_counts_as_empty_left_click() {
        let mut w = world();
        w.spawn(EntityKind::Mob(MobKind::Pig), DVec3::new(4.8, 10.0, 0.5));
        let mut actor = prepared(Direction::East, None);

        left_click(&mut actor, &mut w, ANCHOR);

        let events = w.drain_events();
        assert_eq!(count_kind(&events, "entity_attacked"), 0);
        assert_eq!(count_kind(&events, "empty_left_click"), 1);
    }

    // --- attack rejections ---------------------------------------------

    #[test]
    fn own_riding_root_is_never_attacked() {
        let mut w = world();
        let mount = w.spawn(EntityKind::Mob(MobKind::Pig), DVec3::new(2.0, 10.0, 0.5));
        let mut actor = prepared(Direction::East, None);
        actor.riding = Some(mount);

        assert!(!process_use_entity(
            &actor,
            &mut w,
            mount,
            None,
            UseAction::Attack
        ));
        assert_eq!(w.drain_events().len(), 0);
    }

    #[test]
    fn non_combat_entities_reject_attacks() {
        let mut w = world();
        let targets = [
            w.spawn(
                EntityKind::DroppedItem(ItemStack::new(ItemKind::Simple(1), 1)),
                DVec3::new(2.0, 10.0, 0.5),
            ),
            w.spawn(EntityKind::ExperienceOrb(5), DVec3::new(2.0, 10.0, 0.5)),
            w.spawn(EntityKind::Arrow, DVec3::new(2.0, 10.0, 0.5)),
        ];
        let actor = prepared(Direction::East, None);

        for id in targets {
            assert!(!process_use_entity(&actor, &mut w, id, None, UseAction::Attack));
        }
        assert_eq!(w.drain_events().len(), 0);
    }

    // --- empty-click signals -------------------------------------------

    #[test]
    fn pure_miss_with_empty_hand_signals_once() {
        let mut w = world();
        let mut actor = prepared(Direction::Up, None);

        right_click(&mut actor, &mut w, ANCHOR);
        let events = w.drain_events();
        assert_eq!(count_kind(&events, "empty_right_click"), 1);

        left_click(&mut actor, &mut w, ANCHOR);
        let events = w.drain_events();
        assert_eq!(count_kind(&events, "empty_left_click"), 1);
    }

    #[test]
    fn any_hit_suppresses_the_empty_click_signal() {
        let mut w = world();
        w.set_block(IVec3::new(2, 10, 0), blocks::STONE);
        let mut actor = prepared(Direction::East, None);

        right_click(&mut actor, &mut w, ANCHOR);
        left_click(&mut actor, &mut w, ANCHOR);

        let events = w.drain_events();
        assert_eq!(count_kind(&events, "empty_right_click"), 0);
        assert_eq!(count_kind(&events, "empty_left_click"), 0);
    }

    // --- distance gating ------------------------------------------------

    #[test]
    fn visibility_flips_the_outcome_at_squared_distance_16() {
        let mut w = world();
        let villager = w.spawn(
            EntityKind::Mob(MobKind::Villager),
            DVec3::new(1.026, 10.5, 4.5),
        );
        let mut actor = actor();
        actor.set_pos_and_angles(DVec3::new(1.026, 10.5, 0.5), 0.0, 0.0);
        assert_eq!(actor.distance_sq(w.entity(villager).unwrap().position()), 16.0);

        assert!(process_use_entity(
            &actor,
            &mut w,
            villager,
            None,
            UseAction::Interact
        ));

        // Wall between actor and villager: occluded threshold (9) applies.
        w.fill(IVec3::new(0, 9, 2), IVec3::new(2, 13, 2), blocks::STONE);
        assert!(!process_use_entity(
            &actor,
            &mut w,
            villager,
            None,
            UseAction::Interact
        ));
    }

    // --- right-click dispatch ------------------------------------------

    #[test]
    fn right_click_places_a_held_block_item() {
        let mut w = world();
        w.set_block(IVec3::new(3, 10, 0), blocks::STONE);
        let mut actor = prepared(
            Direction::East,
            Some(ItemStack::new(ItemKind::Block(blocks::OAK_PLANKS), 2)),
        );

        let remainder = right_click(&mut actor, &mut w, ANCHOR);

        assert_eq!(w.block(IVec3::new(2, 10, 0)), blocks::OAK_PLANKS);
        assert_eq!(remainder.map(|s| s.count), Some(1));
    }

    #[test]
    fn right_click_block_use_reports_anchor_relative_offset() {
        let mut w = world();
        w.set_block(IVec3::new(3, 10, 0), blocks::LEVER);
        let mut actor = prepared(Direction::East, None);

        right_click(&mut actor, &mut w, ANCHOR);

        let events = w.drain_events();
        match &events[0] {
            WorldEvent::BlockUsed { pos, hit } => {
                assert_eq!(*pos, [3, 10, 0]);
                // x offset measured from the anchor, not the hit block.
                assert!((hit[0] - 3.0).abs() < 1e-9);
                assert!((hit[1] - 0.5).abs() < 1e-9);
            }
            other => panic!("expected block use, got {other:?}"),
        }
    }

    #[test]
    fn right_click_interacts_with_a_villager() {
        let mut w = world();
        let villager = w.spawn(
            EntityKind::Mob(MobKind::Villager),
            DVec3::new(3.0, 10.0, 0.5),
        );
        let mut actor = prepared(Direction::East, None);

        right_click(&mut actor, &mut w, ANCHOR);

        let events = w.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, WorldEvent::EntityUsed { id } if *id == villager)));
    }

    #[test]
    fn right_click_miss_with_food_eats_it() {
        let mut w = world();
        let mut actor = prepared(
            Direction::Up,
            Some(ItemStack::new(ItemKind::Food { nutrition: 4 }, 2)),
        );

        let remainder = right_click(&mut actor, &mut w, ANCHOR);

        let events = w.drain_events();
        assert_eq!(count_kind(&events, "item_consumed"), 1);
        assert_eq!(count_kind(&events, "empty_right_click"), 0);
        assert_eq!(remainder.map(|s| s.count), Some(1));
    }

    #[test]
    fn left_click_with_sword_uses_modified_damage() {
        let mut w = world();
        let pig = w.spawn(EntityKind::Mob(MobKind::Pig), DVec3::new(2.0, 10.0, 0.5));
        let mut actor = prepared(Direction::East, Some(ItemStack::tool(ToolKind::Sword)));

        left_click(&mut actor, &mut w, ANCHOR);

        let events = w.drain_events();
        match events
            .iter()
            .find(|e| e.kind() == "entity_attacked")
            .expect("pig was attacked")
        {
            WorldEvent::EntityAttacked { id, damage } => {
                assert_eq!(*id, pig);
                assert_eq!(*damage, 8.0); // 1 base + 7 sword
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn spectators_are_invisible_to_the_trace() {
        let mut w = world();
        let ghost = w.spawn(EntityKind::Mob(MobKind::Zombie), DVec3::new(2.0, 10.0, 0.5));
        w.entity_mut(ghost).unwrap().spectator = true;
        let actor = prepared(Direction::East, None);

        assert_eq!(trace_entities(&actor, &w, None), None);
    }

    proptest! {
        #[test]
        fn selector_always_returns_the_nearest_candidate(
            d_block in 0.1_f64..5.0,
            d_entity in 0.1_f64..5.0,
        ) {
            let eye = DVec3::ZERO;
            let block = Trace::Block {
                pos: IVec3::ZERO,
                face: Direction::West,
                point: DVec3::new(d_block, 0.0, 0.0),
            };
            let entity = Trace::Entity {
                id: EntityId(1),
                point: DVec3::new(d_entity, 0.0, 0.0),
            };

            let picked = pick_target(eye, Some(block), Some(entity)).unwrap();
            if d_block > d_entity {
                prop_assert_eq!(picked, entity);
            } else {
                prop_assert_eq!(picked, block);
            }
        }
    }
}
