//! Plain data row types written by output backends.

use gw_agent::{Agent, AgentState};
use gw_core::Frame;

/// One agent's state at a snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:  u32,
    pub frame:     u64,
    pub state:     AgentState,
    /// Grid coordinate of the last cell fully reached.
    pub cell_x:    i32,
    pub cell_y:    i32,
    pub pos_x:     f32,
    pub pos_y:     f32,
    /// Cells still queued after the current target.
    pub route_len: u32,
}

impl AgentSnapshotRow {
    pub fn from_agent(agent: &Agent, frame: Frame) -> Self {
        let coord = agent.map().coord_of(agent.current_cell());
        let pos = agent.position();
        Self {
            agent_id:  agent.id().0,
            frame:     frame.0,
            state:     agent.state(),
            cell_x:    coord.x,
            cell_y:    coord.y,
            pos_x:     pos.x,
            pos_y:     pos.y,
            route_len: agent.route_len() as u32,
        }
    }
}

/// Summary statistics for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSummaryRow {
    pub frame:         u64,
    /// Simulated seconds at the start of the frame.
    pub elapsed_secs:  f64,
    pub moving_agents: u64,
}
