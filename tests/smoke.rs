use clickcraft_autoclicker::AutoClickerState;
use clickcraft_core::{DimensionId, Direction, ItemKind, ItemStack, SimTick, ToolKind};
use clickcraft_player::FakePlayerRegistry;
use clickcraft_testkit::{JsonlSink, Scene};
use clickcraft_world::{blocks, MobKind, WorldEvent};
use glam::IVec3;

/// A machine on a flat floor, swinging a sword at a pig in front of it, must
/// kill the pig and log every swing.
#[test]
fn attack_machine_clears_a_pig_and_logs_events() {
    let mut scene = Scene::flat(DimensionId::Overworld);
    let pig = scene.mob(MobKind::Pig, 2.0, 0.0);
    let mut registry = FakePlayerRegistry::new();

    let mut machine = AutoClickerState::new(Direction::East);
    machine.set_speed_index(8);
    machine.right_clicking = false;
    machine.slot = Some(ItemStack::tool(ToolKind::Sword));

    let mut sink = JsonlSink::create(std::env::temp_dir().join("clickcraft_smoke.jsonl"))
        .expect("can create temp log");
    let mut attacks = 0;
    for i in 0..20 {
        let tick = SimTick(i);
        machine.tick(&mut scene.world, &mut registry, scene.anchor, false, tick);
        let events = scene.world.drain_events();
        attacks += events
            .iter()
            .filter(|e| matches!(e, WorldEvent::EntityAttacked { .. }))
            .count();
        sink.write_batch(tick, &events).expect("can write events");
    }

    // Pig: 10 health, sword: 8 damage, so two hits.
    assert_eq!(attacks, 2);
    assert!(scene.world.entity(pig).is_none());
    // The sword survives combat.
    assert!(machine.slot.is_some());
}

/// A placing machine walks a row of planks toward the far wall, one block per
/// click, then stalls once the column in front of it is filled.
#[test]
fn placer_machine_builds_a_row_of_planks() {
    let mut scene = Scene::flat(DimensionId::Overworld);
    let y = scene.anchor.y;
    scene.wall(IVec3::new(4, y, -1), IVec3::new(4, y + 1, 1));
    let mut registry = FakePlayerRegistry::new();

    let mut machine = AutoClickerState::new(Direction::East);
    machine.set_speed_index(8);
    machine.slot = Some(ItemStack::new(ItemKind::Block(blocks::OAK_PLANKS), 16));

    for i in 0..3 {
        machine.tick(&mut scene.world, &mut registry, scene.anchor, false, SimTick(i));
    }

    // Placements grow back toward the machine: against the wall first.
    for x in 1..4 {
        assert_eq!(scene.world.block(IVec3::new(x, y, 0)), blocks::OAK_PLANKS);
    }
    assert_eq!(machine.slot.as_ref().map(|s| s.count), Some(13));

    // Machine block position itself stays clear.
    assert_eq!(scene.world.block(scene.anchor), blocks::AIR);
}

/// With nothing in range and nothing held, every click resolves to the
/// empty-click signal and the world is left untouched.
#[test]
fn empty_machine_only_signals() {
    let mut scene = Scene::flat(DimensionId::Overworld);
    let mut registry = FakePlayerRegistry::new();

    let mut machine = AutoClickerState::new(Direction::Up);
    machine.set_speed_index(8);

    for i in 0..3 {
        machine.tick(&mut scene.world, &mut registry, scene.anchor, false, SimTick(i));
    }

    let events = scene.world.drain_events();
    assert_eq!(events.len(), 3);
    assert!(events
        .iter()
        .all(|e| matches!(e, WorldEvent::EmptyRightClick { .. })));
    assert_eq!(scene.world.entity_count(), 0);
    assert_eq!(registry.len(), 1);
}
