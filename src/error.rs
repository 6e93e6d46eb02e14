use std::error::Error;
use std::fmt;

use crate::economy::Cost;

/// Why a player command was refused. No variant is fatal and a refused
/// command never changes state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InsufficientResources { required: Cost, available: Cost },
    InvalidSelection(String),
    PreconditionUnmet(String),
    ExhaustedDailyActions { used: u32, allowed: u32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InsufficientResources {
                required,
                available,
            } => write!(
                f,
                "Not enough resources! Required: {}. Available: {}.",
                required, available
            ),
            GameError::InvalidSelection(msg) => write!(f, "Invalid selection: {}", msg),
            GameError::PreconditionUnmet(msg) => f.write_str(msg),
            GameError::ExhaustedDailyActions { used, allowed } => write!(
                f,
                "Heroes are tired for today ({}/{} quests). Wait until tomorrow.",
                used, allowed
            ),
        }
    }
}

impl Error for GameError {}

pub type GameResult<T> = Result<T, GameError>;
