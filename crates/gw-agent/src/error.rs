use gw_behavior::BehaviorError;
use gw_core::CellId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// Relocation found nowhere to stand.  The map itself is invalid for
    /// agents; retrying cannot help.
    #[error("map {width}x{height} has no walkable cell to place an agent on")]
    NoWalkableCell { width: u32, height: u32 },

    #[error("cell {0} is not walkable")]
    NotWalkable(CellId),

    #[error("invalid agent configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),
}

pub type AgentResult<T> = Result<T, AgentError>;
