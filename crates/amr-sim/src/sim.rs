//! The `Sim` struct and its tick loop.

use amr_catalog::Catalog;
use amr_core::{RunConfig, SimRng, Tick};
use amr_engine::{
    apply_antibiotics, initialize, step, AntibioticOutcome, EngineParams, SimulationSettings,
    SimulationSnapshot, SimulationState, StepOutcome,
};
use tracing::{debug, info};

use crate::{SimObserver, SimResult};

/// Event counts from one completed tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The tick counter after the tick.
    pub tick:        Tick,
    pub step:        StepOutcome,
    pub antibiotics: AntibioticOutcome,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation driver.
///
/// Owns the colony, the RNG stream and the settings snapshot, and advances
/// them one tick at a time:
///
/// 1. [`step`] — age, reproduction, mutation, senescence; tick += 1.
/// 2. [`apply_antibiotics`] — primary and secondary kill rolls.
///
/// [`tick`][Self::tick] is gated by a running/paused pair mirroring the
/// start, pause and reset controls; [`run`][Self::run] and
/// [`run_ticks`][Self::run_ticks] ignore the gate for headless use.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    catalog:  Catalog,
    settings: SimulationSettings,
    params:   EngineParams,
    config:   RunConfig,
    state:    SimulationState,
    rng:      SimRng,
    running:  bool,
    paused:   bool,
}

impl Sim {
    pub(crate) fn from_parts(
        catalog:  Catalog,
        settings: SimulationSettings,
        params:   EngineParams,
        config:   RunConfig,
        state:    SimulationState,
        rng:      SimRng,
    ) -> Self {
        Self { catalog, settings, params, config, state, rng, running: false, paused: false }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Detached copy of the colony for renderers.
    pub fn snapshot(&self) -> SimulationSnapshot {
        self.state.snapshot()
    }

    /// Hand the final state to the caller.
    pub fn into_state(self) -> SimulationState {
        self.state
    }

    // ── Run gate ──────────────────────────────────────────────────────────

    /// Start (or resume) ticking.  Clears any pause.
    pub fn start(&mut self) {
        self.running = true;
        self.paused = false;
    }

    /// Flip the pause flag.  Returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// `true` if [`tick`][Self::tick] would advance the colony.
    pub fn is_active(&self) -> bool {
        self.running && !self.paused
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Replace the settings snapshot used from the next tick on.
    ///
    /// The new settings are validated against the catalog first; on error
    /// the current settings stay in place.  The colony is not re-seeded.
    pub fn set_settings(&mut self, settings: SimulationSettings) -> SimResult<()> {
        settings.resolve(&self.catalog)?;
        self.settings = settings;
        Ok(())
    }

    /// Stop, clear the pause flag and re-seed the colony from the current
    /// settings.  The RNG stream continues; it is not re-seeded.
    pub fn reset(&mut self) -> SimResult<()> {
        self.running = false;
        self.paused = false;
        self.state = initialize(&self.catalog, &self.settings, &self.params, &mut self.rng)?;
        info!(species = %self.state.species, "simulation reset");
        Ok(())
    }

    // ── Ticking ───────────────────────────────────────────────────────────

    /// Advance one tick if the sim is running and not paused.
    ///
    /// Returns `None` without touching the colony or the RNG when the gate
    /// is closed.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<TickReport>> {
        if !self.is_active() {
            return Ok(None);
        }
        self.advance(observer).map(Some)
    }

    /// Run exactly `n` ticks from the current position, ignoring the run gate
    /// and `config.end_tick()`.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.advance(observer)?;
        }
        Ok(())
    }

    /// Run from the current tick to `config.end_tick()`, then call
    /// `on_sim_end`.
    ///
    /// A run starting at tick 0 snapshots the freshly seeded colony first.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.state.tick == Tick::ZERO && self.config.snapshot_due(Tick::ZERO) {
            observer.on_snapshot(Tick::ZERO, &self.state);
        }
        while self.state.tick < self.config.end_tick() {
            self.advance(observer)?;
        }
        observer.on_sim_end(self.state.tick);
        Ok(())
    }

    fn advance<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        observer.on_tick_start(self.state.tick);

        let step = step(&mut self.state, &self.catalog, &self.settings, &self.params, &mut self.rng)?;
        let antibiotics = apply_antibiotics(&mut self.state, &self.catalog, &self.settings, &mut self.rng)?;

        let now = self.state.tick;
        observer.on_tick_end(now, &self.state);
        if self.config.snapshot_due(now) {
            debug!(tick = %now, "snapshot");
            observer.on_snapshot(now, &self.state);
        }
        Ok(TickReport { tick: now, step, antibiotics })
    }
}
