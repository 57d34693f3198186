//! Rover motion on a wrapping grid.
//!
//! A [`Grid`] holds the surface bounds and its static obstacles, a [`Rover`]
//! holds position and heading, and [`RoverController`] applies `f`/`b`/`l`/`r`
//! command sequences to a rover against a grid.

mod command;
mod controller;
mod error;
mod grid;
mod rover;

pub use command::Command;
pub use controller::{RoverController, StepOutcome};
pub use error::NavigationError;
pub use grid::{Grid, Position};
pub use rover::Rover;
pub use shared::domain::{Heading, RoverId, RoverState};
