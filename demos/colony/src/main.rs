//! colony — headless driver for the rust_amr colony simulator.
//!
//! Seeds a 780 × 380 plate with 500 bacteria, runs it under the selected
//! antibiotics and writes `tick_summaries.csv` / `agent_snapshots.csv` (plus
//! the `settings.json` used) to `--output`.  `--batch N` instead runs N
//! seeds side by side and prints survival per seed; `--matrix` prints the
//! species × antibiotic interaction table.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use amr_catalog::{load_catalog_dir, Catalog};
use amr_core::{RunConfig, Tick};
use amr_engine::{
    density_grid, resistance_histogram, EngineParams, EnvironmentFactors, SimulationSettings,
    SimulationState,
};
use amr_output::{CsvWriter, OutputWriter, SimOutputObserver};
use amr_sim::{run_batch, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const HISTOGRAM_BINS: usize = 20;
const GRID_CELL:      f64   = 80.0; // 10 × 5 cells cover the plate
const GRID_COLS:      usize = 10;
const GRID_ROWS:      usize = 5;
const PROGRESS_EVERY: u64   = 50;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "colony")]
#[command(about = "Simulate a bacterial colony under antibiotic pressure")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to simulate
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// JSON settings file; missing fields take their defaults and the flags
    /// below override it
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long)]
    species: Option<String>,

    #[arg(long)]
    primary: Option<String>,

    /// Secondary antibiotic, or "none"
    #[arg(long)]
    secondary: Option<String>,

    /// Directory with species.csv and antibiotics.csv (and optionally
    /// interactions.csv) replacing the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output directory (created if missing)
    #[arg(long, default_value = "output/colony")]
    output: PathBuf,

    /// Write all agents every N ticks; 0 disables snapshots
    #[arg(long, default_value_t = 50)]
    snapshot_every: u64,

    /// Run N seeds (seed, seed+1, …) and print survival per seed
    #[arg(long)]
    batch: Option<u64>,

    /// Print the interaction matrix and exit
    #[arg(long)]
    matrix: bool,
}

// ── Observer wrapper with progress logging ────────────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    summary_rows:  usize,
    snapshot_rows: usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, summary_rows: 0, snapshot_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, state: &SimulationState) {
        self.summary_rows += 1;
        if tick.0 % PROGRESS_EVERY == 0 {
            info!(
                tick = %tick,
                alive = state.alive_count(),
                total = state.population(),
                mean_resistance = ?state.mean_resistance(),
                "progress"
            );
        }
        self.inner.on_tick_end(tick, state);
    }

    fn on_snapshot(&mut self, tick: Tick, state: &SimulationState) {
        self.snapshot_rows += state.population();
        self.inner.on_snapshot(tick, state);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(dir) => load_catalog_dir(dir)
            .with_context(|| format!("loading catalog from {}", dir.display()))?,
        None => Catalog::builtin(),
    };

    if args.matrix {
        print_matrix(&catalog);
        return Ok(());
    }

    let settings = load_settings(&args)?;
    let params = EngineParams::default();

    if let Some(runs) = args.batch {
        return batch(&args, &catalog, &settings, &params, runs);
    }

    println!("=== colony — rust_amr ===");
    println!(
        "{} vs {}{}  |  {} ticks  |  seed {}",
        settings.species,
        settings.primary_antibiotic,
        settings.secondary().map(|s| format!(" + {s}")).unwrap_or_default(),
        args.ticks,
        args.seed,
    );

    let species = catalog.species(&settings.species)?;
    let factors = EnvironmentFactors::new(species, &settings, &params);
    let severity = catalog.interactions().severity(&settings.species, &settings.primary_antibiotic);
    println!(
        "Temperature factor {:.2}  |  pH factor {:.2}  |  interaction {} ({})",
        factors.temperature,
        factors.ph,
        severity.symbol(),
        severity.level(),
    );
    println!();

    // Output directory + the exact settings used.
    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    fs::write(args.output.join("settings.json"), serde_json::to_string_pretty(&settings)?)?;

    let config = RunConfig {
        seed:                  args.seed,
        total_ticks:           args.ticks,
        output_interval_ticks: args.snapshot_every,
    };
    let mut sim = SimBuilder::new(catalog, settings).params(params).config(config).build()?;

    let writer = CsvWriter::new(&args.output)?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!();

    print_summary(sim.state());
    Ok(())
}

fn load_settings(args: &Args) -> Result<SimulationSettings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimulationSettings::default(),
    };
    if let Some(species) = &args.species {
        settings.species = species.clone();
    }
    if let Some(primary) = &args.primary {
        settings.primary_antibiotic = primary.clone();
    }
    if let Some(secondary) = &args.secondary {
        settings.secondary_antibiotic = SimulationSettings::secondary_selection(secondary);
    }
    Ok(settings)
}

// ── Batch mode ────────────────────────────────────────────────────────────────

fn batch(
    args:     &Args,
    catalog:  &Catalog,
    settings: &SimulationSettings,
    params:   &EngineParams,
    runs:     u64,
) -> Result<()> {
    let seeds: Vec<u64> = (0..runs).map(|i| args.seed.wrapping_add(i)).collect();
    let t0 = Instant::now();
    let results = run_batch(catalog, settings, params, &seeds, args.ticks)?;
    println!("{} runs × {} ticks in {:.3} s", results.len(), args.ticks, t0.elapsed().as_secs_f64());
    println!();

    println!("{:<20} {:>8} {:>8} {:>10} {:>10}", "Seed", "Alive", "Total", "Survival", "Mean res.");
    println!("{}", "-".repeat(60));
    for run in &results {
        println!(
            "{:<20} {:>8} {:>8} {:>9.1}% {:>10}",
            run.seed,
            run.state.alive_count(),
            run.state.population(),
            run.survival_fraction() * 100.0,
            format_mean(run.state.mean_resistance()),
        );
    }
    Ok(())
}

// ── Reports ───────────────────────────────────────────────────────────────────

fn format_mean(mean: Option<f64>) -> String {
    mean.map(|m| format!("{m:.4}")).unwrap_or_else(|| "—".to_owned())
}

fn print_summary(state: &SimulationState) {
    println!(
        "Final {}: {} alive of {}  |  mean resistance {}",
        state.tick,
        state.alive_count(),
        state.population(),
        format_mean(state.mean_resistance()),
    );
    let mechanisms: Vec<&str> = state.observed_mechanisms.iter().collect();
    if mechanisms.is_empty() {
        println!("No resistance mechanisms observed");
    } else {
        println!("Mechanisms observed: {}", mechanisms.join(", "));
    }
    println!();

    println!("Resistance distribution (alive)");
    let histogram = resistance_histogram(&state.agents, HISTOGRAM_BINS);
    let widest = histogram.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in histogram.iter().enumerate() {
        let low = i as f64 / HISTOGRAM_BINS as f64;
        let bar = "#".repeat(count * 40 / widest);
        println!("  {low:.2} {count:>5} {bar}");
    }
    println!();

    println!("Density ({GRID_COLS} × {GRID_ROWS} cells of {GRID_CELL})");
    let grid = density_grid(&state.agents, GRID_CELL, GRID_COLS, GRID_ROWS);
    for row in 0..grid.rows {
        let line: Vec<String> = (0..grid.cols)
            .map(|col| format!("{:>4}", grid.get(col, row).unwrap_or(0)))
            .collect();
        println!("  {}", line.join(""));
    }
}

fn print_matrix(catalog: &Catalog) {
    let table = catalog.interactions();

    print!("{:<28}", "");
    for column in table.columns() {
        print!(" {column:>13}");
    }
    println!();
    for row in table.rows() {
        print!("{row:<28}");
        for column in table.columns() {
            print!(" {:>13}", table.severity(row, column).symbol());
        }
        println!();
    }
    println!();

    for cell in table.cells() {
        let Some(interaction) = cell.interaction else {
            continue;
        };
        println!("{} × {} [{}]", cell.species, cell.antibiotic, cell.level.level());
        println!("  {}", interaction.description);
        println!("  mechanisms: {}", interaction.mechanisms.join(", "));
    }

    if !table.appearances().is_empty() {
        println!();
        for appearance in table.appearances() {
            println!(
                "{:<28} {} / {}  {}",
                appearance.species, appearance.color, appearance.resistant_color, appearance.description
            );
        }
    }
}
