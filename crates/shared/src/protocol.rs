use serde::{Deserialize, Serialize};

use crate::domain::RoverState;

pub const DEFAULT_GRID_WIDTH: i64 = 10;
pub const DEFAULT_GRID_HEIGHT: i64 = 10;
pub const SUCCESS_MESSAGE: &str = "Commands executed successfully.";
pub const WELCOME_MESSAGE: &str = "Welcome to the Mars Rover API";

fn default_grid_width() -> i64 {
    DEFAULT_GRID_WIDTH
}

fn default_grid_height() -> i64 {
    DEFAULT_GRID_HEIGHT
}

fn default_success_message() -> String {
    SUCCESS_MESSAGE.to_string()
}

/// Body of `POST /rover/command`.
///
/// Obstacles travel as `[x, y]` pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoverCommandRequest {
    #[serde(default = "default_grid_width")]
    pub grid_width: i64,
    #[serde(default = "default_grid_height")]
    pub grid_height: i64,
    #[serde(default)]
    pub obstacles: Vec<(i64, i64)>,
    pub initial_state: RoverState,
    pub commands: String,
}

impl RoverCommandRequest {
    /// A request on the default 10x10 grid with no obstacles.
    pub fn new(initial_state: RoverState, commands: impl Into<String>) -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            obstacles: Vec::new(),
            initial_state,
            commands: commands.into(),
        }
    }

    /// Number of command symbols, counted in characters rather than bytes.
    pub fn command_count(&self) -> usize {
        self.commands.chars().count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoverCommandResponse {
    pub final_state: RoverState,
    #[serde(default = "default_success_message")]
    pub message: String,
}

impl RoverCommandResponse {
    pub fn success(final_state: RoverState) -> Self {
        Self {
            final_state,
            message: default_success_message(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Heading;

    #[test]
    fn request_fills_grid_defaults() {
        let request: RoverCommandRequest = serde_json::from_value(serde_json::json!({
            "initial_state": { "x": 0, "y": 0, "direction": "N" },
            "commands": "f"
        }))
        .expect("request");

        assert_eq!(request.grid_width, 10);
        assert_eq!(request.grid_height, 10);
        assert!(request.obstacles.is_empty());
        assert_eq!(request.initial_state.direction, Heading::North);
    }

    #[test]
    fn request_reads_obstacles_as_pairs() {
        let request: RoverCommandRequest = serde_json::from_value(serde_json::json!({
            "grid_width": 5,
            "grid_height": 4,
            "obstacles": [[1, 2], [3, 0]],
            "initial_state": { "x": 1, "y": 1, "direction": "E" },
            "commands": "rff"
        }))
        .expect("request");

        assert_eq!(request.obstacles, vec![(1, 2), (3, 0)]);
    }

    #[test]
    fn request_rejects_unknown_direction() {
        let result = serde_json::from_value::<RoverCommandRequest>(serde_json::json!({
            "initial_state": { "x": 0, "y": 0, "direction": "Q" },
            "commands": "f"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn command_count_is_in_characters() {
        let state = RoverState {
            x: 0,
            y: 0,
            direction: Heading::North,
        };
        assert_eq!(RoverCommandRequest::new(state, "ffrb").command_count(), 4);
        assert_eq!(RoverCommandRequest::new(state, "fé").command_count(), 2);
    }

    #[test]
    fn success_response_carries_confirmation_message() {
        let response = RoverCommandResponse::success(RoverState {
            x: 2,
            y: 0,
            direction: Heading::East,
        });
        let json = serde_json::to_value(&response).expect("json");
        assert_eq!(
            json,
            serde_json::json!({
                "final_state": { "x": 2, "y": 0, "direction": "E" },
                "message": "Commands executed successfully."
            })
        );
    }
}
