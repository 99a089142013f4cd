//! World model consumed by the interaction simulator: block table, entity
//! store, voxel raycasting, and the block/entity dispatch primitives.

pub mod block;
mod entity;
mod event;
mod raycast;
mod world;

pub use block::*;
pub use entity::*;
pub use event::*;
pub use raycast::*;
pub use world::*;
