//! `amr-sim` — run driver for the rust_amr colony simulator.
//!
//! # Tick loop
//!
//! ```text
//! while running and not paused:
//!   ① on_tick_start(tick)
//!   ② step              — age, reproduce, mutate, senesce; tick += 1
//!   ③ apply_antibiotics — primary then secondary kill rolls
//!   ④ on_tick_end(tick, &state)
//!   ⑤ on_snapshot(tick, &state)   every `config.output_interval_ticks`
//! ```
//!
//! The engine owns no clock: the driver holds the [`SimulationState`], the
//! seeded RNG and the current settings snapshot, and threads them through
//! every call.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                               |
//! |------------|------------------------------------------------------|
//! | `parallel` | [`run_batch`] runs one seed per Rayon task.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use amr_catalog::Catalog;
//! use amr_engine::SimulationSettings;
//! use amr_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(Catalog::builtin(), SimulationSettings::default())
//!     .seed(7)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("alive after {}: {}", sim.state().tick, sim.state().alive_count());
//! ```
//!
//! [`SimulationState`]: amr_engine::SimulationState

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use batch::{run_batch, BatchRun};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, TickReport};
