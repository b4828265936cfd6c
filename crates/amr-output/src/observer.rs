//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use amr_core::{AgentId, Tick};
use amr_engine::SimulationState;
use amr_sim::SimObserver;
use tracing::warn;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one summary row per tick and all agents at
/// snapshot ticks to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Needed after driving the sim with `run_ticks` or
    /// `tick`, which never call `on_sim_end`.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, state: &SimulationState) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from_state(state));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, state: &SimulationState) {
        let rows: OutputResult<Vec<AgentSnapshotRow>> = state
            .agents
            .iter()
            .enumerate()
            .map(|(i, agent)| Ok(AgentSnapshotRow::from_agent(AgentId::try_from(i)?, tick, agent)))
            .collect();

        let result = match rows {
            Ok(rows) if rows.is_empty() => Ok(()),
            Ok(rows) => self.writer.write_snapshots(&rows),
            Err(e) => Err(e),
        };
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
