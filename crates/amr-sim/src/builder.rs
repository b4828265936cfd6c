//! Fluent builder for constructing a [`Sim`].

use amr_catalog::Catalog;
use amr_core::{RunConfig, SimRng};
use amr_engine::{initialize, EngineParams, SimulationSettings};
use tracing::info;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`Catalog`] — species and antibiotic profiles the settings refer to
/// - [`SimulationSettings`] — the initial settings snapshot
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                   |
/// |-----------------|-------------------------------------------|
/// | `.params(p)`    | `EngineParams::default()`                 |
/// | `.config(c)`    | `RunConfig::default()` (seed 42, 500 ticks) |
/// | `.seed(s)`      | `config.seed`                             |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(Catalog::builtin(), settings)
///     .config(RunConfig { seed: 1, total_ticks: 200, output_interval_ticks: 20 })
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    catalog:  Catalog,
    settings: SimulationSettings,
    params:   EngineParams,
    config:   RunConfig,
    seed:     Option<u64>,
}

impl SimBuilder {
    pub fn new(catalog: Catalog, settings: SimulationSettings) -> Self {
        Self {
            catalog,
            settings,
            params: EngineParams::default(),
            config: RunConfig::default(),
            seed:   None,
        }
    }

    /// Override the model constants (population sizes, tolerances, …).
    pub fn params(mut self, params: EngineParams) -> Self {
        self.params = params;
        self
    }

    /// Run length, seed and snapshot cadence used by [`Sim::run`].
    pub fn config(mut self, config: RunConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the RNG, overriding `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate inputs, seed the colony and return a stopped [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        if self.params.history_window == 0 {
            return Err(SimError::Config("history window must hold at least one sample".into()));
        }

        let mut config = self.config;
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        let mut rng = SimRng::new(config.seed);
        let state = initialize(&self.catalog, &self.settings, &self.params, &mut rng)?;
        info!(seed = config.seed, total_ticks = config.total_ticks, "simulation built");

        Ok(Sim::from_parts(self.catalog, self.settings, self.params, config, state, rng))
    }
}
