use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);
    };
}

id_newtype!(RoverId);

/// Compass heading of a rover.
///
/// Variants are declared in clockwise order; the lookup tables below are
/// indexed by that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

const CLOCKWISE: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

const UNIT_VECTORS: [(i64, i64); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

impl Heading {
    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// The heading after a quarter turn to the right.
    pub fn clockwise(self) -> Heading {
        CLOCKWISE[(self.index() + 1) % CLOCKWISE.len()]
    }

    /// The heading after a quarter turn to the left.
    pub fn counter_clockwise(self) -> Heading {
        CLOCKWISE[(self.index() + CLOCKWISE.len() - 1) % CLOCKWISE.len()]
    }

    /// One cell of travel along this heading, as `(dx, dy)`. North is `+y`.
    pub fn unit_vector(self) -> (i64, i64) {
        UNIT_VECTORS[self.index()]
    }

    pub fn as_char(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heading '{0}', expected one of N, E, S, W")]
pub struct UnknownHeading(pub String);

impl FromStr for Heading {
    type Err = UnknownHeading;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Heading::North),
            "E" => Ok(Heading::East),
            "S" => Ok(Heading::South),
            "W" => Ok(Heading::West),
            other => Err(UnknownHeading(other.to_string())),
        }
    }
}

/// Position and heading of a rover as exchanged over the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    pub x: i64,
    pub y: i64,
    pub direction: Heading,
}
