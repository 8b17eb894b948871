//! State-machine states.

use std::fmt;

/// Where an agent is in its decide / chase / move cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentState {
    /// Choosing the next goal.  Initial state and the state after reset.
    #[default]
    Deciding,
    /// Holding a fresh pursuit route; the next tick pops its first cell.
    Chasing,
    /// Travelling toward the target cell.
    Moving,
}

impl AgentState {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentState::Deciding => "deciding",
            AgentState::Chasing  => "chasing",
            AgentState::Moving   => "moving",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
