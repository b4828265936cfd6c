//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `agent_snapshots.csv`
//!
//! A tick with no alive agents leaves `mean_resistance` empty.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{AgentSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

pub const TICK_SUMMARY_HEADER: [&str; 5] = ["tick", "alive", "total", "mean_resistance", "mechanisms_observed"];

pub const AGENT_SNAPSHOT_HEADER: [&str; 8] =
    ["agent_id", "tick", "x", "y", "alive", "resistance", "age", "mechanisms"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(TICK_SUMMARY_HEADER)?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(AGENT_SNAPSHOT_HEADER)?;

        Ok(Self { snapshots, summaries, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.0.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.alive as u8).to_string(),
                row.resistance.to_string(),
                row.age.to_string(),
                row.mechanisms.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.alive.to_string(),
            row.total.to_string(),
            row.mean_resistance.map(|m| m.to_string()).unwrap_or_default(),
            row.mechanisms_observed.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
