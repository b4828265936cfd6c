//! `amr-engine` — the population update model.
//!
//! # One tick
//!
//! ```text
//! step(state, catalog, settings, params, rng):
//!   for each agent alive at tick start (newborns wait for the next tick):
//!     ① Age        — age += 1
//!     ② Reproduce  — u < effective_growth × multiplier and below cap → push child
//!     ③ Mutate     — u < mutation_rate → resistance += 0.01, maybe gain a mechanism
//!     ④ Senesce    — age > 1000 → 10% death chance, every tick
//!   tick += 1; record (tick, alive) and (tick, mean resistance | no data)
//!
//! apply_antibiotics(state, catalog, settings, rng):
//!   for each alive agent: primary kill roll, then secondary kill roll
//! ```
//!
//! All randomness comes from an injected [`RandomSource`][amr_core::RandomSource];
//! the draw order above is part of the model and fixes reproducibility.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                |
//! |------------------|---------------------------------------------------------|
//! | [`agent`]        | `Agent`, `MechanismSet`                                 |
//! | [`settings`]     | `SimulationSettings`, `ResolvedSettings`                |
//! | [`params`]       | `EngineParams` (model constants with defaults)          |
//! | [`history`]      | `RollingHistory`, population / resistance samples       |
//! | [`state`]        | `SimulationState`, `SimulationSnapshot`                 |
//! | [`population`]   | `initialize`, `step`, `effective_growth_rate`           |
//! | [`antibiotics`]  | `apply_antibiotics`                                     |
//! | [`stats`]        | resistance histogram, density grid                      |

pub mod agent;
pub mod antibiotics;
pub mod history;
pub mod params;
pub mod population;
pub mod settings;
pub mod state;
pub mod stats;


pub use agent::{Agent, MechanismSet};
pub use antibiotics::{apply_antibiotics, AntibioticOutcome};
pub use history::{PopulationSample, ResistanceSample, RollingHistory};
pub use params::EngineParams;
pub use population::{effective_growth_rate, initialize, step, EnvironmentFactors, StepOutcome};
pub use settings::{ResolvedSettings, SimulationSettings, NO_ANTIBIOTIC};
pub use state::{SimulationSnapshot, SimulationState};
pub use stats::{density_grid, resistance_histogram, DensityGrid};
