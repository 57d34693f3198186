use std::fmt;

use crate::error::NavigationError;

/// A single rover instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `f`
    Forward,
    /// `b`
    Backward,
    /// `l`, a quarter turn counter-clockwise.
    Left,
    /// `r`, a quarter turn clockwise.
    Right,
}

impl Command {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'f' => Some(Command::Forward),
            'b' => Some(Command::Backward),
            'l' => Some(Command::Left),
            'r' => Some(Command::Right),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Command::Forward => 'f',
            Command::Backward => 'b',
            Command::Left => 'l',
            Command::Right => 'r',
        }
    }

    /// Parses a whole command string, failing on the first symbol outside
    /// `f`, `b`, `l`, `r`. `index` in the error counts characters, not bytes.
    pub fn parse_sequence(commands: &str) -> Result<Vec<Command>, NavigationError> {
        commands
            .chars()
            .enumerate()
            .map(|(index, symbol)| {
                Command::from_symbol(symbol)
                    .ok_or(NavigationError::InvalidCommand { symbol, index })
            })
            .collect()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
