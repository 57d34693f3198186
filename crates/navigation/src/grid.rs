use std::collections::HashSet;

use shared::domain::RoverId;

use crate::{error::NavigationError, rover::Rover};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// A bounded surface whose edges wrap around on both axes.
///
/// Bounds and obstacles are fixed at construction. The only mutable part is
/// the registry of hosted rovers, which has no effect on movement.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i64,
    height: i64,
    obstacles: HashSet<Position>,
    rovers: Vec<RoverId>,
}

impl Grid {
    pub fn new<I, P>(width: i64, height: i64, obstacles: I) -> Result<Self, NavigationError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        if width <= 0 || height <= 0 {
            return Err(NavigationError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            obstacles: obstacles.into_iter().map(Into::into).collect(),
            rovers: Vec::new(),
        })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn obstacles(&self) -> &HashSet<Position> {
        &self.obstacles
    }

    pub fn is_blocked(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    /// Offsets `origin` by `(dx, dy)` and folds the result back into
    /// `[0, width) x [0, height)`.
    ///
    /// The origin is reduced before the offset is added so coordinates near
    /// the integer limits cannot overflow.
    pub fn wrap(&self, origin: Position, dx: i64, dy: i64) -> Position {
        Position {
            x: (origin.x.rem_euclid(self.width) + dx).rem_euclid(self.width),
            y: (origin.y.rem_euclid(self.height) + dy).rem_euclid(self.height),
        }
    }

    pub fn add_rover(&mut self, rover: &Rover) {
        self.rovers.push(rover.id());
    }

    pub fn rovers(&self) -> &[RoverId] {
        &self.rovers
    }

    pub fn hosts(&self, id: RoverId) -> bool {
        self.rovers.contains(&id)
    }
}
