//! Fake-player actors and the interaction simulator.
//!
//! An [`Actor`] is a simulated, non-networked player owned by a
//! [`FakePlayerRegistry`]. The [`sim`] module positions an actor against a
//! block face, raycasts along its look vector, and dispatches the same
//! use/attack actions a real player click would, returning the held item
//! after the attempt.

mod actor;
mod registry;
pub mod sim;

pub use actor::{Actor, ActorConfig};
pub use registry::FakePlayerRegistry;
pub use sim::{
    cleanup_after_use, left_click, prepare_for_use, right_click, Trace, UseAction,
};
