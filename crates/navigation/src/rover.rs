use shared::domain::{Heading, RoverId, RoverState};

use crate::{error::NavigationError, grid::Position};

/// Position and heading of a single rover.
///
/// The rover knows nothing about the grid it drives on; only
/// [`RoverController`](crate::RoverController) changes its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover {
    id: RoverId,
    position: Position,
    direction: Heading,
}

impl Rover {
    pub fn new(id: RoverId, x: i64, y: i64, direction: Heading) -> Self {
        Self {
            id,
            position: Position { x, y },
            direction,
        }
    }

    /// Builds a rover from a single-letter heading such as `"N"`.
    pub fn try_new(id: RoverId, x: i64, y: i64, direction: &str) -> Result<Self, NavigationError> {
        Ok(Self::new(id, x, y, direction.parse()?))
    }

    pub fn from_state(id: RoverId, state: RoverState) -> Self {
        Self::new(id, state.x, state.y, state.direction)
    }

    pub fn id(&self) -> RoverId {
        self.id
    }

    pub fn x(&self) -> i64 {
        self.position.x
    }

    pub fn y(&self) -> i64 {
        self.position.y
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Heading {
        self.direction
    }

    pub fn state(&self) -> RoverState {
        RoverState {
            x: self.position.x,
            y: self.position.y,
            direction: self.direction,
        }
    }

    pub(crate) fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn face(&mut self, direction: Heading) {
        self.direction = direction;
    }
}
