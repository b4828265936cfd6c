//! Simulation observer trait for progress reporting and data collection.

use amr_core::Tick;
use amr_engine::SimulationState;

/// Callbacks invoked by [`Sim`][crate::Sim] at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The state is only ever handed out after a
/// tick has fully completed, so observers see a consistent colony.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, state: &SimulationState) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} alive", state.alive_count());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before `step`, with the tick about to be processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after `step` and `apply_antibiotics`.  `tick` is the new
    /// tick counter, matching the latest history entries.
    fn on_tick_end(&mut self, _tick: Tick, _state: &SimulationState) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks, and once for the initial colony when a run starts at tick 0).
    fn on_snapshot(&mut self, _tick: Tick, _state: &SimulationState) {}

    /// Called once after [`Sim::run`][crate::Sim::run] reaches its end tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
