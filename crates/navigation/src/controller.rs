use shared::domain::Heading;
use tracing::debug;

use crate::{
    command::Command,
    error::NavigationError,
    grid::{Grid, Position},
    rover::Rover,
};

/// What a single command did to the rover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Turned(Heading),
    Moved(Position),
    /// The target cell holds an obstacle; the rover did not move.
    Blocked(Position),
}

/// Stateless interpreter that drives one rover across one grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoverController;

impl RoverController {
    pub fn new() -> Self {
        Self
    }

    /// Runs `commands` against `rover` left to right.
    ///
    /// The whole string is parsed before anything moves, so an invalid symbol
    /// leaves the rover untouched. Moves into an obstacle are skipped and the
    /// remaining commands still run.
    pub fn process_commands(
        &self,
        rover: &mut Rover,
        grid: &Grid,
        commands: &str,
    ) -> Result<(), NavigationError> {
        let commands = Command::parse_sequence(commands)?;
        let mut blocked = 0usize;
        for command in &commands {
            if let StepOutcome::Blocked(_) = self.apply(rover, grid, *command) {
                blocked += 1;
            }
        }

        debug!(
            rover_id = rover.id().0,
            executed = commands.len(),
            blocked,
            x = rover.x(),
            y = rover.y(),
            direction = %rover.direction(),
            "command sequence finished"
        );
        Ok(())
    }

    /// Applies one command against the rover's current state.
    pub fn apply(&self, rover: &mut Rover, grid: &Grid, command: Command) -> StepOutcome {
        let heading = rover.direction();
        match command {
            Command::Right => turn(rover, heading.clockwise()),
            Command::Left => turn(rover, heading.counter_clockwise()),
            Command::Forward => drive(rover, grid, 1),
            Command::Backward => drive(rover, grid, -1),
        }
    }
}

fn turn(rover: &mut Rover, direction: Heading) -> StepOutcome {
    rover.face(direction);
    StepOutcome::Turned(direction)
}

fn drive(rover: &mut Rover, grid: &Grid, sign: i64) -> StepOutcome {
    let (dx, dy) = rover.direction().unit_vector();
    let target = grid.wrap(rover.position(), dx * sign, dy * sign);

    if grid.is_blocked(target) {
        debug!(
            rover_id = rover.id().0,
            target_x = target.x,
            target_y = target.y,
            "move blocked by obstacle"
        );
        return StepOutcome::Blocked(target);
    }

    rover.move_to(target);
    StepOutcome::Moved(target)
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
