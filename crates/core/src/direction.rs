//! Six-way block face directions.
//!
//! Directions follow the usual sandbox convention: north is -Z, south is +Z,
//! east is +X, west is -X. Yaw/pitch are in degrees and match the look-vector
//! convention used by [`crate::attribute`]-carrying actors: yaw 0 faces
//! south, positive pitch looks down.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A block face / axis direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +Y
    Up,
    /// -Y
    Down,
    /// -Z
    North,
    /// +Z
    South,
    /// +X
    East,
    /// -X
    West,
}

impl Direction {
    /// All six directions, in a stable order.
    pub const ALL: [Direction; 6] = [
        Direction::Up,
        Direction::Down,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit offset vector for this direction.
    pub const fn unit(self) -> [i32; 3] {
        match self {
            Direction::Up => [0, 1, 0],
            Direction::Down => [0, -1, 0],
            Direction::North => [0, 0, -1],
            Direction::South => [0, 0, 1],
            Direction::East => [1, 0, 0],
            Direction::West => [-1, 0, 0],
        }
    }

    /// Yaw (degrees) that faces an actor into this direction.
    ///
    /// Vertical directions keep yaw 0; the facing is carried by pitch.
    pub const fn yaw(self) -> f32 {
        match self {
            Direction::South => 0.0,
            Direction::West => 90.0,
            Direction::North => 180.0,
            Direction::East => -90.0,
            Direction::Up | Direction::Down => 0.0,
        }
    }

    /// Pitch (degrees) that faces an actor into this direction.
    pub const fn pitch(self) -> f32 {
        match self {
            Direction::Up => -90.0,
            Direction::Down => 90.0,
            _ => 0.0,
        }
    }

    /// Get the opposite direction.
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Direction matching a unit axis normal, if any.
    pub fn from_normal(normal: [i32; 3]) -> Option<Self> {
        Direction::ALL.into_iter().find(|d| d.unit() == normal)
    }

    /// Canonical lowercase string key for configs/logging.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a direction from a config string fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown direction `{0}` (expected up/down/north/south/east/west)")]
pub struct DirectionParseError(pub String);

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "north" => Ok(Direction::North),
            "south" => Ok(Direction::South),
            "east" => Ok(Direction::East),
            "west" => Ok(Direction::West),
            other => Err(DirectionParseError(other.to_string())),
        }
    }
}
