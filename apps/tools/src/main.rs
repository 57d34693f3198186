use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use client_core::RoverClient;
use navigation::{Grid, Position, Rover, RoverController};
use shared::{
    domain::{Heading, RoverId, RoverState},
    protocol::{RoverCommandRequest, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH},
};

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the commands locally and print the final state.
    Simulate(Mission),
    /// Post the commands to a running server and print its response.
    Send {
        #[arg(long, default_value = "http://127.0.0.1:8000")]
        server_url: String,
        #[command(flatten)]
        mission: Mission,
    },
}

/// Grid presets scaled to each planet's surface.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
}

impl Planet {
    fn grid_size(self) -> (i64, i64) {
        match self {
            Planet::Mercury => (38, 38),
            Planet::Venus => (95, 95),
            Planet::Earth => (100, 100),
            Planet::Mars => (53, 53),
        }
    }
}

#[derive(Args, Debug)]
struct Mission {
    /// Use a planet's grid size instead of `--width`/`--height`.
    #[arg(long, value_enum, conflicts_with_all = ["width", "height"])]
    planet: Option<Planet>,
    /// Defaults to 10 unless `--planet` is given.
    #[arg(long)]
    width: Option<i64>,
    /// Defaults to 10 unless `--planet` is given.
    #[arg(long)]
    height: Option<i64>,
    /// Blocked cell as `x,y`; repeat for more.
    #[arg(long = "obstacle", value_parser = parse_obstacle)]
    obstacles: Vec<(i64, i64)>,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    x: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    y: i64,
    #[arg(long, default_value = "N")]
    direction: Heading,
    /// Command string over `f`, `b`, `l`, `r`.
    commands: String,
}

impl Mission {
    fn grid_size(&self) -> (i64, i64) {
        match self.planet {
            Some(planet) => planet.grid_size(),
            None => (
                self.width.unwrap_or(DEFAULT_GRID_WIDTH),
                self.height.unwrap_or(DEFAULT_GRID_HEIGHT),
            ),
        }
    }

    fn initial_state(&self) -> RoverState {
        RoverState {
            x: self.x,
            y: self.y,
            direction: self.direction,
        }
    }

    fn into_request(self) -> RoverCommandRequest {
        let (grid_width, grid_height) = self.grid_size();
        RoverCommandRequest {
            grid_width,
            grid_height,
            initial_state: self.initial_state(),
            obstacles: self.obstacles,
            commands: self.commands,
        }
    }
}

fn parse_obstacle(raw: &str) -> Result<(i64, i64), String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{raw}'"))?;
    let x = x
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid x in '{raw}': {e}"))?;
    let y = y
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid y in '{raw}': {e}"))?;
    Ok((x, y))
}

fn simulate(mission: &Mission) -> Result<RoverState> {
    let (width, height) = mission.grid_size();
    let mut grid = Grid::new(
        width,
        height,
        mission.obstacles.iter().copied().map(Position::from),
    )?;
    let mut rover = Rover::from_state(RoverId(1), mission.initial_state());
    grid.add_rover(&rover);

    RoverController::new().process_commands(&mut rover, &grid, &mission.commands)?;
    Ok(rover.state())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(mission) => {
            let final_state = simulate(&mission)?;
            println!("{}", serde_json::to_string(&final_state)?);
        }
        Command::Send {
            server_url,
            mission,
        } => {
            let client = RoverClient::new(server_url);
            let response = client.command(&mission.into_request()).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
