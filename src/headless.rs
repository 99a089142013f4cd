use crate::config::MachineConfig;
use anyhow::{bail, Context, Result};
use clickcraft_autoclicker::AutoClickerState;
use clickcraft_core::{scoped_rng, DimensionId, ItemKind, ItemStack, SimTick, ToolKind};
use clickcraft_player::FakePlayerRegistry;
use clickcraft_world::{blocks, EntityKind, MobKind, World};
use glam::{DVec3, IVec3};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

/// RNG domain for scene population.
const SCATTER_DOMAIN: u64 = 0x5CA7;

/// Where the machine sits in the demo scene.
const ANCHOR: IVec3 = IVec3::new(0, 10, 0);

/// Result summary of a headless run.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub ticks: u64,
    pub clicks: u64,
    pub remaining_entities: usize,
    pub events: BTreeMap<String, u64>,
}

/// Run the demo machine for the configured number of ticks and summarize
/// what happened.
pub fn run(cfg: &MachineConfig, events_path: Option<PathBuf>) -> Result<Summary> {
    let mut world = build_scene(cfg);
    let mut registry = FakePlayerRegistry::new();

    let mut machine = AutoClickerState::new(
        cfg.direction
            .parse()
            .with_context(|| format!("invalid direction `{}`", cfg.direction))?,
    );
    machine.set_speed_index(cfg.speed_index);
    machine.right_clicking = cfg.right_clicking;
    machine.slot = held_item(&cfg.held)?;

    let mut clicks = 0u64;
    let mut event_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut event_log: Vec<(u64, clickcraft_world::WorldEvent)> = Vec::new();

    for i in 0..cfg.ticks {
        let tick = SimTick(i);
        if machine.tick(&mut world, &mut registry, ANCHOR, false, tick) {
            clicks += 1;
        }
        for event in world.drain_events() {
            *event_counts.entry(event.kind().to_string()).or_default() += 1;
            if events_path.is_some() {
                event_log.push((i, event));
            }
        }
    }

    if let Some(path) = events_path {
        let json = serde_json::to_string_pretty(&event_log)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write event log {}", path.display()))?;
        info!(path = %path.display(), "wrote event log");
    }

    // The registry must shed the world's actors when it unloads.
    registry.on_world_unload(world.dimension());
    debug_assert!(registry.is_empty());

    Ok(Summary {
        ticks: cfg.ticks,
        clicks,
        remaining_entities: world.entity_count(),
        events: event_counts,
    })
}

fn build_scene(cfg: &MachineConfig) -> World {
    let mut world = World::new(DimensionId::Overworld);
    world.fill(
        IVec3::new(-16, 9, -16),
        IVec3::new(16, 9, 16),
        blocks::STONE,
    );

    let mut rng = scoped_rng(cfg.world_seed, SCATTER_DOMAIN, SimTick::ZERO);
    for _ in 0..cfg.mob_count {
        let kind = if rng.gen_bool(0.5) {
            MobKind::Pig
        } else {
            MobKind::Zombie
        };
        let dx = rng.gen_range(1.5..6.0);
        let dz = rng.gen_range(-1.0..1.0);
        world.spawn(
            EntityKind::Mob(kind),
            DVec3::new(0.5 + dx, 10.0, 0.5 + dz),
        );
    }
    world
}

fn held_item(name: &str) -> Result<Option<ItemStack>> {
    Ok(match name {
        "none" | "" => None,
        "sword" => Some(ItemStack::tool(ToolKind::Sword)),
        "planks" => Some(ItemStack::new(ItemKind::Block(blocks::OAK_PLANKS), 64)),
        "food" => Some(ItemStack::new(ItemKind::Food { nutrition: 4 }, 16)),
        other => bail!("unknown held item `{other}` (expected none/sword/planks/food)"),
    })
}
