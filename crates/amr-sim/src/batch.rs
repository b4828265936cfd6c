//! Independent what-if runs over a list of seeds.

use amr_catalog::Catalog;
use amr_core::RunConfig;
use amr_engine::{EngineParams, SimulationSettings, SimulationState};
use tracing::info;

use crate::{NoopObserver, SimBuilder, SimResult};

/// Final colony of one batch member.
#[derive(Clone, Debug)]
pub struct BatchRun {
    pub seed:  u64,
    pub state: SimulationState,
}

impl BatchRun {
    /// Share of agents still alive, or 0 for an empty colony.
    pub fn survival_fraction(&self) -> f64 {
        match self.state.population() {
            0 => 0.0,
            n => self.state.alive_count() as f64 / n as f64,
        }
    }
}

/// Run `ticks` ticks once per seed, each run owning its own colony and RNG.
///
/// Results come back in `seeds` order.  With the `parallel` feature the runs
/// are spread over Rayon's thread pool; results are identical either way.
/// The first failing run's error is returned.
pub fn run_batch(
    catalog:  &Catalog,
    settings: &SimulationSettings,
    params:   &EngineParams,
    seeds:    &[u64],
    ticks:    u64,
) -> SimResult<Vec<BatchRun>> {
    info!(runs = seeds.len(), ticks, "starting batch");

    let run_one = |seed: u64| -> SimResult<BatchRun> {
        let config = RunConfig { seed, total_ticks: ticks, output_interval_ticks: 0 };
        let mut sim = SimBuilder::new(catalog.clone(), settings.clone())
            .params(params.clone())
            .config(config)
            .build()?;
        sim.run_ticks(ticks, &mut NoopObserver)?;
        Ok(BatchRun { seed, state: sim.into_state() })
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(seed)).collect()
    }
}
