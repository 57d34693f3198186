use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use navigation::{Command, Grid, NavigationError, Position, Rover, RoverController};
use shared::{
    domain::RoverId,
    error::{ApiError, ErrorCode},
    protocol::{RoverCommandRequest, RoverCommandResponse, WelcomeResponse, WELCOME_MESSAGE},
};
use tracing::info;

pub const DEFAULT_MAX_COMMANDS: usize = 10_000;

#[derive(Clone)]
pub struct ApiContext {
    pub max_commands: usize,
    rover_ids: Arc<AtomicU64>,
}

impl ApiContext {
    pub fn new(max_commands: usize) -> Self {
        Self {
            max_commands,
            rover_ids: Arc::new(AtomicU64::new(1)),
        }
    }

    fn next_rover_id(&self) -> RoverId {
        RoverId(self.rover_ids.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COMMANDS)
    }
}

pub fn welcome() -> WelcomeResponse {
    WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    }
}

/// Builds a fresh grid and rover for the request, runs the commands and
/// reports where the rover ended up.
pub fn command_rover(
    ctx: &ApiContext,
    request: RoverCommandRequest,
) -> Result<RoverCommandResponse, ApiError> {
    ensure_valid_commands(ctx, &request)?;

    let mut grid = Grid::new(
        request.grid_width,
        request.grid_height,
        request.obstacles.iter().copied().map(Position::from),
    )
    .map_err(navigation_error)?;
    let mut rover = Rover::from_state(ctx.next_rover_id(), request.initial_state);
    grid.add_rover(&rover);

    RoverController::new()
        .process_commands(&mut rover, &grid, &request.commands)
        .map_err(navigation_error)?;

    let final_state = rover.state();
    info!(
        rover_id = rover.id().0,
        grid_width = grid.width(),
        grid_height = grid.height(),
        obstacles = grid.obstacles().len(),
        commands = request.command_count(),
        x = final_state.x,
        y = final_state.y,
        direction = %final_state.direction,
        "rover commands executed"
    );
    Ok(RoverCommandResponse::success(final_state))
}

fn ensure_valid_commands(ctx: &ApiContext, request: &RoverCommandRequest) -> Result<(), ApiError> {
    let commands = request.commands.as_str();
    if commands.is_empty() {
        return Err(ApiError::new(
            ErrorCode::Validation,
            "commands must not be empty",
        ));
    }
    let count = request.command_count();
    if count > ctx.max_commands {
        return Err(ApiError::new(
            ErrorCode::Validation,
            format!(
                "too many commands: {count} exceeds the limit of {}",
                ctx.max_commands
            ),
        ));
    }
    Command::parse_sequence(commands).map_err(navigation_error)?;
    Ok(())
}

fn navigation_error(err: NavigationError) -> ApiError {
    let code = match err {
        NavigationError::InvalidDimensions { .. } => ErrorCode::InvalidConfiguration,
        NavigationError::InvalidCommand { .. } | NavigationError::InvalidHeading(_) => {
            ErrorCode::Validation
        }
    };
    ApiError::new(code, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::{Heading, RoverState};

    fn request(commands: &str) -> RoverCommandRequest {
        RoverCommandRequest::new(
            RoverState {
                x: 0,
                y: 0,
                direction: Heading::North,
            },
            commands,
        )
    }

    #[test]
    fn executes_commands_and_reports_final_state() {
        let mut req = request("rff");
        req.obstacles = vec![(1, 2)];

        let response = command_rover(&ApiContext::default(), req).expect("response");

        assert_eq!(
            response.final_state,
            RoverState {
                x: 2,
                y: 0,
                direction: Heading::East
            }
        );
        assert!(response.message.contains("successfully"));
    }

    #[test]
    fn obstacle_blocks_move() {
        let mut req = request("f");
        req.obstacles = vec![(0, 1)];

        let response = command_rover(&ApiContext::default(), req).expect("response");

        assert_eq!((response.final_state.x, response.final_state.y), (0, 0));
    }

    #[test]
    fn rejects_unknown_command_symbol() {
        let err = command_rover(&ApiContext::default(), request("fx")).expect_err("should fail");
        assert_eq!(err.code, ErrorCode::Validation);
        assert!(err.message.contains("'x'"));
    }

    #[test]
    fn rejects_empty_command_string() {
        let err = command_rover(&ApiContext::default(), request("")).expect_err("should fail");
        assert_eq!(err.code, ErrorCode::Validation);
    }

    #[test]
    fn rejects_command_string_over_limit() {
        let err = command_rover(&ApiContext::new(3), request("ffff")).expect_err("should fail");
        assert_eq!(err.code, ErrorCode::Validation);
        assert!(err.message.contains("limit of 3"));
    }

    #[test]
    fn command_limit_counts_characters_not_bytes() {
        let err = command_rover(&ApiContext::new(2), request("fé")).expect_err("should fail");
        assert_eq!(err.code, ErrorCode::Validation);
        assert!(err.message.contains("'é'"), "{}", err.message);
    }

    #[test]
    fn rejects_non_positive_grid() {
        let mut req = request("f");
        req.grid_width = 0;

        let err = command_rover(&ApiContext::default(), req).expect_err("should fail");

        assert_eq!(err.code, ErrorCode::InvalidConfiguration);
    }

    #[test]
    fn each_request_gets_its_own_rover_id() {
        let ctx = ApiContext::default();
        let first = ctx.next_rover_id();
        let second = ctx.clone().next_rover_id();
        assert_ne!(first, second);
    }

    #[test]
    fn welcome_greets_caller() {
        assert_eq!(welcome().message, "Welcome to the Mars Rover API");
    }
}
