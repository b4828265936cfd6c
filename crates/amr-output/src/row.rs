//! Plain data row types written by output backends.

use amr_core::{AgentId, Tick};
use amr_engine::{Agent, SimulationState};

/// One agent at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id:   AgentId,
    pub tick:       u64,
    pub x:          f64,
    pub y:          f64,
    pub alive:      bool,
    pub resistance: f64,
    pub age:        u32,
    /// Active mechanisms in acquisition order, `;`-separated.
    pub mechanisms: String,
}

impl AgentSnapshotRow {
    pub fn from_agent(agent_id: AgentId, tick: Tick, agent: &Agent) -> Self {
        Self {
            agent_id,
            tick:       tick.0,
            x:          agent.position.x,
            y:          agent.position.y,
            alive:      agent.alive,
            resistance: agent.resistance,
            age:        agent.age,
            mechanisms: agent.mechanisms.iter().collect::<Vec<_>>().join(";"),
        }
    }
}

/// Colony totals after one completed tick (growth and antibiotics).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:  u64,
    pub alive: u64,
    pub total: u64,
    /// `None` when no agent is alive.
    pub mean_resistance:     Option<f64>,
    pub mechanisms_observed: u64,
}

impl TickSummaryRow {
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            tick:                state.tick.0,
            alive:               state.alive_count() as u64,
            total:               state.population() as u64,
            mean_resistance:     state.mean_resistance(),
            mechanisms_observed: state.observed_mechanisms.len() as u64,
        }
    }
}
