//! The auto-clicker block: a machine that repeatedly right- or left-clicks
//! the world in front of it using a fake player actor.
//!
//! The block owns a single item slot and a click timer. Every time the timer
//! elapses it borrows its actor from the registry, stages the held item,
//! performs one click, and writes the remainder back into the slot.

use clickcraft_core::{Direction, ItemStack, PlayerProfile, SimTick};
use clickcraft_player::{cleanup_after_use, left_click, prepare_for_use, right_click};
use clickcraft_player::FakePlayerRegistry;
use clickcraft_world::World;
use glam::IVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tick intervals between clicks, indexed by speed setting (0 = slowest).
pub const SPEEDS: [u32; 9] = [40, 30, 20, 15, 10, 8, 5, 2, 1];

/// Profile id shared by all auto-clicker actors in a world.
const CLICKER_PROFILE_ID: u64 = 0xC11C;

/// Persisted state for an auto-clicker block entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoClickerState {
    /// Direction the machine clicks in.
    pub facing: Direction,
    /// The single working item slot.
    pub slot: Option<ItemStack>,
    /// Index into [`SPEEDS`].
    speed_index: usize,
    /// Whether the actor is treated as sneaking. Persisted for the GUI;
    /// fake actors do not crouch, so it has no effect on the simulation.
    pub sneaking: bool,
    /// True for right-click mode, false for left-click (attack) mode.
    pub right_clicking: bool,
    /// Last observed redstone powered state (edge-detection).
    #[serde(default)]
    pub was_powered: bool,
    /// Ticks since the last click.
    timer: u32,
}

impl AutoClickerState {
    /// Create a machine clicking in `facing` with default settings.
    pub fn new(facing: Direction) -> Self {
        Self {
            facing,
            slot: None,
            speed_index: 0,
            sneaking: false,
            right_clicking: true,
            was_powered: false,
            timer: 0,
        }
    }

    /// Profile identifying this machine's fake player.
    pub fn profile(&self) -> PlayerProfile {
        PlayerProfile::new(CLICKER_PROFILE_ID, "[AutoClicker]")
    }

    /// Current speed setting.
    pub fn speed_index(&self) -> usize {
        self.speed_index
    }

    /// Select a speed setting (clamped to the table).
    pub fn set_speed_index(&mut self, index: usize) {
        self.speed_index = index.min(SPEEDS.len() - 1);
    }

    /// Ticks between clicks at the current speed setting.
    pub fn interval(&self) -> u32 {
        SPEEDS[self.speed_index]
    }

    /// Advance the machine by one tick.
    ///
    /// `anchor` is the machine's block position; `powered` is the current
    /// redstone input, which pauses the machine while high. Returns true if
    /// a click was performed this tick.
    pub fn tick(
        &mut self,
        world: &mut World,
        registry: &mut FakePlayerRegistry,
        anchor: IVec3,
        powered: bool,
        tick: SimTick,
    ) -> bool {
        let edge = powered != self.was_powered;
        self.was_powered = powered;
        if powered {
            if edge {
                debug!(?anchor, "auto clicker paused by redstone");
            }
            return false;
        }

        self.timer += 1;
        if self.timer < self.interval() {
            return false;
        }
        self.timer = 0;

        let profile = self.profile();
        let actor = registry.get_or_create(world, &profile);
        let old = self.slot.take();

        prepare_for_use(actor, anchor, self.facing, old.clone());
        let result = if self.right_clicking {
            right_click(actor, world, anchor)
        } else {
            left_click(actor, world, anchor)
        };
        let slot = &mut self.slot;
        cleanup_after_use(actor, world, result, old, |remainder| *slot = remainder);

        debug!(
            ?anchor,
            tick = tick.0,
            right = self.right_clicking,
            "auto clicker fired"
        );
        true
    }
}
