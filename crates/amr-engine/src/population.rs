//! Population initialization and the per-tick update rule.

use amr_catalog::{Catalog, SpeciesProfile};
use amr_core::{AmrResult, RandomSource};
use tracing::{debug, info, trace, warn};

use crate::{Agent, EngineParams, SimulationSettings, SimulationState};

// ── Environment ───────────────────────────────────────────────────────────────

/// How far the plate's temperature and pH are from a species' optimum.
///
/// Each factor is 1 at the optimum and falls linearly, reaching 0 at the
/// tolerance and going negative beyond it.  Factors are not clamped: a
/// negative product just makes `u < rate` unsatisfiable.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentFactors {
    pub temperature: f64,
    pub ph:          f64,
}

impl EnvironmentFactors {
    pub fn new(species: &SpeciesProfile, settings: &SimulationSettings, params: &EngineParams) -> Self {
        Self {
            temperature: 1.0
                - (settings.temperature - species.optimal_temperature).abs() / params.temperature_tolerance,
            ph: 1.0 - (settings.ph - species.optimal_ph).abs() / params.ph_tolerance,
        }
    }
}

/// Reproduction probability of `agent` before the global multiplier.
///
/// `growth_rate × temperature_factor × ph_factor`, evaluated left to right.
#[inline]
pub fn effective_growth_rate(
    agent:    &Agent,
    species:  &SpeciesProfile,
    settings: &SimulationSettings,
    params:   &EngineParams,
) -> f64 {
    let f = EnvironmentFactors::new(species, settings, params);
    agent.growth_rate * f.temperature * f.ph
}

// ── initialize ────────────────────────────────────────────────────────────────

/// Seed a fresh colony.
///
/// Creates `params.initial_population` founders at uniform positions in
/// `params.domain`.  Each founder's resistance is `U(0, mutation_rate)`, so a
/// zero mutation rate yields exactly zero resistance.  Draw order per
/// founder: x, y, resistance.
pub fn initialize<R: RandomSource + ?Sized>(
    catalog:  &Catalog,
    settings: &SimulationSettings,
    params:   &EngineParams,
    rng:      &mut R,
) -> AmrResult<SimulationState> {
    params.validate()?;
    let resolved = settings.resolve(catalog)?;
    let species = resolved.species;

    let agents: Vec<Agent> = (0..params.initial_population)
        .map(|_| {
            let position = params.domain.sample(rng);
            let resistance = rng.uniform(0.0, settings.mutation_rate);
            Agent::founder(position, resistance, species.base_growth_rate)
        })
        .collect();

    info!(
        species = %species.name,
        agents = agents.len(),
        mutation_rate = settings.mutation_rate,
        "initialized colony"
    );
    Ok(SimulationState::new(species.name.clone(), agents, params.history_window))
}

// ── step ──────────────────────────────────────────────────────────────────────

/// Event counts from one [`step`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub births:    usize,
    pub mutations: usize,
    /// Agents that gained a new mechanism (a subset of `mutations`).
    pub acquisitions: usize,
    pub senescent_deaths: usize,
}

/// Advance the colony by one tick.
///
/// Only agents alive at the start of the tick are visited; offspring pushed
/// during the tick are first processed on the next one.  Per visited agent
/// the draws are, in order: reproduction roll, jitter x and y (on birth),
/// mutation roll, mechanism pick (on mutation, if any remain), senescence
/// roll (past `senescence_age`).
///
/// Afterwards the tick counter advances and both histories record the new
/// tick.  Returns [`AmrError::InvariantViolation`][amr_core::AmrError] if
/// the update left the state inconsistent.
pub fn step<R: RandomSource + ?Sized>(
    state:    &mut SimulationState,
    catalog:  &Catalog,
    settings: &SimulationSettings,
    params:   &EngineParams,
    rng:      &mut R,
) -> AmrResult<StepOutcome> {
    let resolved = settings.resolve(catalog)?;
    let species = resolved.species;

    let mut outcome = StepOutcome::default();
    let start_population = state.agents.len();

    for i in 0..start_population {
        if !state.agents[i].alive {
            continue;
        }
        state.agents[i].age += 1;

        // ── Reproduction ──────────────────────────────────────────────────
        let birth_rate =
            effective_growth_rate(&state.agents[i], species, settings, params) * settings.growth_rate_multiplier;
        if rng.next_f64() < birth_rate && state.agents.len() < params.max_population {
            let dx = rng.uniform(-params.birth_jitter, params.birth_jitter);
            let dy = rng.uniform(-params.birth_jitter, params.birth_jitter);
            let child = state.agents[i].offspring(dx, dy);
            trace!(parent = i, child = state.agents.len(), "birth");
            state.agents.push(child);
            outcome.births += 1;
        }

        let SimulationState { agents, observed_mechanisms, .. } = &mut *state;
        let agent = &mut agents[i];

        // ── Mutation ──────────────────────────────────────────────────────
        if rng.next_f64() < settings.mutation_rate {
            agent.resistance = (agent.resistance + params.resistance_step).min(1.0);
            debug_assert!((0.0..=1.0).contains(&agent.resistance));
            outcome.mutations += 1;

            let available: Vec<&str> = species.available_mechanisms(agent.mechanisms.as_slice()).collect();
            if !available.is_empty() {
                let gained = available[rng.index(available.len())];
                agent.mechanisms.insert(gained);
                if observed_mechanisms.insert(gained) {
                    debug!(mechanism = gained, "first observation of mechanism");
                }
                outcome.acquisitions += 1;
            }
        }

        // ── Senescence ────────────────────────────────────────────────────
        if agent.age > params.senescence_age {
            agent.alive = rng.next_f64() > params.senescence_death_chance;
            if !agent.alive {
                outcome.senescent_deaths += 1;
            }
        }
    }

    if start_population < params.max_population && state.agents.len() >= params.max_population {
        warn!(tick = %state.tick.next(), cap = params.max_population, "population cap reached");
    }

    state.tick = state.tick.next();
    state.record_history();
    state.check_invariants(params)?;

    debug!(
        tick = %state.tick,
        alive = state.population_history.latest().map(|s| s.alive),
        total = state.agents.len(),
        births = outcome.births,
        mutations = outcome.mutations,
        deaths = outcome.senescent_deaths,
        "step"
    );
    Ok(outcome)
}
