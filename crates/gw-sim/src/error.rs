use gw_agent::AgentError;
use gw_core::GwError;
use gw_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error(transparent)]
    Core(#[from] GwError),
}

pub type SimResult<T> = Result<T, SimError>;
