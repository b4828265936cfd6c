//! Engine-owned simulation state and the read-only snapshot handed to
//! renderers.

use amr_core::{AgentId, AmrError, AmrResult, Tick};

use crate::{Agent, EngineParams, MechanismSet, PopulationSample, ResistanceSample, RollingHistory};

// ── SimulationState ───────────────────────────────────────────────────────────

/// Everything that changes during a run.
///
/// Created by [`initialize`][crate::initialize] and advanced only by
/// [`step`][crate::step] and [`apply_antibiotics`][crate::apply_antibiotics].
/// There is exactly one writer; readers take a
/// [`snapshot`][Self::snapshot] after the tick completes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationState {
    /// Every agent ever created.  Only grows; `AgentId(i)` is index `i`.
    pub agents: Vec<Agent>,

    /// Species the colony was seeded with.
    pub species: String,

    pub population_history: RollingHistory<PopulationSample>,

    pub resistance_history: RollingHistory<ResistanceSample>,

    /// Every mechanism any agent has acquired this run, in discovery order.
    pub observed_mechanisms: MechanismSet,

    /// Completed ticks.
    pub tick: Tick,
}

impl SimulationState {
    pub fn new(species: String, agents: Vec<Agent>, history_window: usize) -> Self {
        Self {
            agents,
            species,
            population_history: RollingHistory::new(history_window),
            resistance_history: RollingHistory::new(history_window),
            observed_mechanisms: MechanismSet::new(),
            tick: Tick::ZERO,
        }
    }

    /// Total agents, dead included.
    #[inline]
    pub fn population(&self) -> usize {
        self.agents.len()
    }

    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }

    /// Arithmetic mean resistance over alive agents; `None` if none are alive.
    pub fn mean_resistance(&self) -> Option<f64> {
        let (sum, n) = self
            .agents
            .iter()
            .filter(|a| a.alive)
            .fold((0.0, 0usize), |(sum, n), a| (sum + a.resistance, n + 1));
        (n > 0).then(|| sum / n as f64)
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    /// Append this tick's samples to both histories.
    pub(crate) fn record_history(&mut self) {
        let alive = self.alive_count();
        let mean = self.mean_resistance();
        self.population_history.push(PopulationSample { tick: self.tick, alive });
        self.resistance_history.push(ResistanceSample { tick: self.tick, mean });
    }

    /// Fail if any agent's resistance left `[0, 1]` or the population grew
    /// past the cap.
    pub fn check_invariants(&self, params: &EngineParams) -> AmrResult<()> {
        if self.agents.len() > params.max_population {
            return Err(AmrError::InvariantViolation(format!(
                "population {} exceeds cap {} at {}",
                self.agents.len(),
                params.max_population,
                self.tick
            )));
        }
        if let Some((i, a)) = self
            .agents
            .iter()
            .enumerate()
            .find(|(_, a)| !(0.0..=1.0).contains(&a.resistance))
        {
            return Err(AmrError::InvariantViolation(format!(
                "agent {i} resistance {} outside [0, 1] at {}",
                a.resistance, self.tick
            )));
        }
        Ok(())
    }

    /// Copy out an immutable view for renderers.
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            tick:                self.tick,
            species:             self.species.clone(),
            agents:              self.agents.clone(),
            population_history:  self.population_history.to_vec(),
            resistance_history:  self.resistance_history.to_vec(),
            observed_mechanisms: self.observed_mechanisms.iter().map(str::to_owned).collect(),
        }
    }
}

// ── SimulationSnapshot ────────────────────────────────────────────────────────

/// Detached copy of a [`SimulationState`] taken between ticks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSnapshot {
    pub tick:                Tick,
    pub species:             String,
    pub agents:              Vec<Agent>,
    pub population_history:  Vec<PopulationSample>,
    pub resistance_history:  Vec<ResistanceSample>,
    pub observed_mechanisms: Vec<String>,
}

impl SimulationSnapshot {
    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }
}
