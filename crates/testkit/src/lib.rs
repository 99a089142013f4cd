#![warn(missing_docs)]
//! Deterministic testing surfaces: scene fixtures and event-stream capture.

use anyhow::Result;
use clickcraft_core::{DimensionId, SimTick};
use clickcraft_world::{blocks, EntityKind, MobKind, World, WorldEvent};
use glam::{DVec3, IVec3};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Primary event record captured by headless tests.
#[derive(Debug, Serialize)]
pub struct EventRecord<'a> {
    /// Simulation tick when the event occurred.
    pub tick: SimTick,
    /// Short kind label.
    pub kind: &'a str,
    /// The full event payload.
    pub event: &'a WorldEvent,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append an event to the log.
    pub fn write(&mut self, record: &EventRecord<'_>) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }

    /// Append every event of a drained batch at the given tick.
    pub fn write_batch(&mut self, tick: SimTick, events: &[WorldEvent]) -> Result<()> {
        for event in events {
            self.write(&EventRecord {
                tick,
                kind: event.kind(),
                event,
            })?;
        }
        Ok(())
    }
}

/// A small standard scene: a flat stone floor with optional targets, used by
/// integration tests and the headless demo.
pub struct Scene {
    /// The scene's world.
    pub world: World,
    /// Block position intended for the clicking machine.
    pub anchor: IVec3,
}

impl Scene {
    /// Floor level of the standard scene.
    pub const FLOOR_Y: i32 = 9;

    /// Build a flat 33x33 stone floor centered on the origin, with the
    /// machine anchor sitting on top at (0, 10, 0).
    pub fn flat(dimension: DimensionId) -> Self {
        let mut world = World::new(dimension);
        world.fill(
            IVec3::new(-16, Self::FLOOR_Y, -16),
            IVec3::new(16, Self::FLOOR_Y, 16),
            blocks::STONE,
        );
        Self {
            world,
            anchor: IVec3::new(0, Self::FLOOR_Y + 1, 0),
        }
    }

    /// Place a wall segment of stone.
    pub fn wall(&mut self, min: IVec3, max: IVec3) -> &mut Self {
        self.world.fill(min, max, blocks::STONE);
        self
    }

    /// Spawn a mob standing on the floor at the given x/z offset from the
    /// anchor, returning its id.
    pub fn mob(&mut self, kind: MobKind, dx: f64, dz: f64) -> clickcraft_world::EntityId {
        let anchor = self.anchor.as_dvec3();
        self.world.spawn(
            EntityKind::Mob(kind),
            DVec3::new(anchor.x + 0.5 + dx, anchor.y, anchor.z + 0.5 + dz),
        )
    }
}
