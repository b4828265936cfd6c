//! Integration tests for amr-sim.

use amr_catalog::Catalog;
use amr_core::{AmrError, RunConfig, Tick};
use amr_engine::{EngineParams, SimulationSettings, SimulationState};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64, interval: u64) -> RunConfig {
    RunConfig { seed: 42, total_ticks, output_interval_ticks: interval }
}

fn build(settings: SimulationSettings) -> crate::Sim {
    SimBuilder::new(Catalog::builtin(), settings).config(test_config(10, 5)).build().unwrap()
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    ends:      Vec<(Tick, usize)>,
    snapshots: Vec<Tick>,
    finished:  Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, state: &SimulationState) {
        assert_eq!(state.tick, tick);
        assert_eq!(state.population_history.latest().map(|s| s.tick), Some(tick));
        self.ends.push((tick, state.alive_count()));
    }

    fn on_snapshot(&mut self, tick: Tick, _state: &SimulationState) {
        self.snapshots.push(tick);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.finished = Some(final_tick);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_stopped_with_seeded_colony() {
        let sim = build(SimulationSettings::default());
        assert_eq!(sim.state().agents.len(), 500);
        assert_eq!(sim.state().tick, Tick::ZERO);
        assert!(!sim.is_running());
        assert!(!sim.is_paused());
        assert!(!sim.is_active());
    }

    #[test]
    fn unknown_species_is_invalid_configuration() {
        let settings = SimulationSettings { species: "Vibrio cholerae".into(), ..SimulationSettings::default() };
        let err = SimBuilder::new(Catalog::builtin(), settings).build().err().unwrap();
        assert!(matches!(err, SimError::Model(AmrError::InvalidConfiguration(_))));
    }

    #[test]
    fn zero_history_window_rejected() {
        let params = EngineParams { history_window: 0, ..EngineParams::default() };
        let err = SimBuilder::new(Catalog::builtin(), SimulationSettings::default())
            .params(params)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn seed_overrides_config() {
        let sim = SimBuilder::new(Catalog::builtin(), SimulationSettings::default())
            .config(test_config(10, 0))
            .seed(9)
            .build()
            .unwrap();
        assert_eq!(sim.config().seed, 9);
        assert_eq!(sim.config().total_ticks, 10);
    }

    #[test]
    fn custom_params_used() {
        let params = EngineParams { initial_population: 20, ..EngineParams::default() };
        let sim = SimBuilder::new(Catalog::builtin(), SimulationSettings::default())
            .params(params)
            .build()
            .unwrap();
        assert_eq!(sim.state().agents.len(), 20);
        assert_eq!(sim.params().initial_population, 20);
    }
}

// ── Run gate ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod gate_tests {
    use super::*;

    #[test]
    fn tick_is_noop_until_started() {
        let mut sim = build(SimulationSettings::default());
        let before = sim.snapshot();
        assert_eq!(sim.tick(&mut NoopObserver).unwrap(), None);
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn start_pause_resume_stop() {
        let mut sim = build(SimulationSettings::default());

        sim.start();
        let report = sim.tick(&mut NoopObserver).unwrap().unwrap();
        assert_eq!(report.tick, Tick(1));

        assert!(sim.toggle_pause());
        assert!(!sim.is_active());
        assert_eq!(sim.tick(&mut NoopObserver).unwrap(), None);
        assert_eq!(sim.state().tick, Tick(1));

        assert!(!sim.toggle_pause());
        assert!(sim.tick(&mut NoopObserver).unwrap().is_some());
        assert_eq!(sim.state().tick, Tick(2));

        sim.stop();
        assert_eq!(sim.tick(&mut NoopObserver).unwrap(), None);
        assert_eq!(sim.state().tick, Tick(2));
    }

    #[test]
    fn start_clears_pause() {
        let mut sim = build(SimulationSettings::default());
        sim.toggle_pause();
        sim.start();
        assert!(sim.is_active());
    }

    #[test]
    fn run_ticks_ignores_gate() {
        let mut sim = build(SimulationSettings::default());
        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert_eq!(sim.state().tick, Tick(3));
        assert!(!sim.is_running());
    }
}

// ── Control ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod control_tests {
    use super::*;

    #[test]
    fn reset_reseeds_and_stops() {
        let mut sim = build(SimulationSettings::default());
        sim.start();
        for _ in 0..5 {
            sim.tick(&mut NoopObserver).unwrap();
        }
        sim.toggle_pause();

        sim.reset().unwrap();
        let state = sim.state();
        assert_eq!(state.tick, Tick::ZERO);
        assert_eq!(state.agents.len(), 500);
        assert!(state.population_history.is_empty());
        assert!(state.observed_mechanisms.is_empty());
        assert!(!sim.is_running());
        assert!(!sim.is_paused());
    }

    #[test]
    fn reset_continues_rng_stream() {
        let mut sim = build(SimulationSettings::default());
        let first = sim.snapshot();
        sim.reset().unwrap();
        assert_ne!(sim.snapshot().agents, first.agents);
    }

    #[test]
    fn reset_uses_current_settings() {
        let mut sim = build(SimulationSettings::default());
        let settings = SimulationSettings {
            species: "Mycobacterium tuberculosis".into(),
            primary_antibiotic: "Rifampicin".into(),
            ..SimulationSettings::default()
        };
        sim.set_settings(settings).unwrap();
        assert_eq!(sim.state().species, "Escherichia coli");

        sim.reset().unwrap();
        assert_eq!(sim.state().species, "Mycobacterium tuberculosis");
        assert!(sim.state().agents.iter().all(|a| a.growth_rate == 0.4));
    }

    #[test]
    fn invalid_settings_leave_current_in_place() {
        let mut sim = build(SimulationSettings::default());
        let bad = SimulationSettings { primary_antibiotic: "Aspirin".into(), ..SimulationSettings::default() };
        assert!(matches!(
            sim.set_settings(bad),
            Err(SimError::Model(AmrError::InvalidConfiguration(_)))
        ));
        assert_eq!(sim.settings(), &SimulationSettings::default());
    }

    #[test]
    fn new_settings_apply_from_next_tick() {
        let mut sim = build(SimulationSettings::default());
        sim.run_ticks(2, &mut NoopObserver).unwrap();
        let frozen = SimulationSettings { growth_rate_multiplier: 0.0, ..SimulationSettings::default() };
        sim.set_settings(frozen).unwrap();

        let population = sim.state().agents.len();
        sim.run_ticks(5, &mut NoopObserver).unwrap();
        assert_eq!(sim.state().agents.len(), population);
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn run_calls_hooks_in_order() {
        let mut sim = build(SimulationSettings::default());
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();

        let starts: Vec<u64> = rec.starts.iter().map(|t| t.0).collect();
        let ends: Vec<u64> = rec.ends.iter().map(|(t, _)| t.0).collect();
        assert_eq!(starts, (0..10).collect::<Vec<_>>());
        assert_eq!(ends, (1..=10).collect::<Vec<_>>());
        assert_eq!(rec.snapshots, [Tick(0), Tick(5), Tick(10)]);
        assert_eq!(rec.finished, Some(Tick(10)));
    }

    #[test]
    fn run_stops_at_end_tick_when_resumed() {
        let mut sim = build(SimulationSettings::default());
        sim.run_ticks(4, &mut NoopObserver).unwrap();

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.ends.len(), 6);
        // No initial snapshot once past tick 0.
        assert_eq!(rec.snapshots, [Tick(5), Tick(10)]);
        assert_eq!(sim.state().tick, Tick(10));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let mut sim = SimBuilder::new(Catalog::builtin(), SimulationSettings::default())
            .config(test_config(6, 0))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
        assert_eq!(rec.ends.len(), 6);
    }

    #[test]
    fn gated_tick_reports_to_observer() {
        let mut sim = build(SimulationSettings::default());
        let mut rec = Recorder::default();
        sim.tick(&mut rec).unwrap();
        assert!(rec.ends.is_empty());

        sim.start();
        sim.tick(&mut rec).unwrap();
        assert_eq!(rec.ends.len(), 1);
        assert_eq!(rec.ends[0].1, sim.state().alive_count());
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use amr_core::SimRng;
    use amr_engine::{apply_antibiotics, initialize, step};

    use super::*;

    #[test]
    fn same_seed_same_run() {
        let mut a = build(SimulationSettings::default());
        let mut b = build(SimulationSettings::default());
        a.run(&mut NoopObserver).unwrap();
        b.run(&mut NoopObserver).unwrap();
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn driver_matches_engine_calls() {
        let catalog = Catalog::builtin();
        let settings = SimulationSettings::default();
        let params = EngineParams::default();

        let mut rng = SimRng::new(42);
        let mut state = initialize(&catalog, &settings, &params, &mut rng).unwrap();
        for _ in 0..10 {
            step(&mut state, &catalog, &settings, &params, &mut rng).unwrap();
            apply_antibiotics(&mut state, &catalog, &settings, &mut rng).unwrap();
        }

        let mut sim = build(settings);
        sim.run(&mut NoopObserver).unwrap();
        assert_eq!(sim.state(), &state);
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;
    use crate::run_batch;

    #[test]
    fn one_run_per_seed_in_order() {
        let catalog = Catalog::builtin();
        let runs = run_batch(
            &catalog,
            &SimulationSettings::default(),
            &EngineParams::default(),
            &[3, 1, 2],
            8,
        )
        .unwrap();
        let seeds: Vec<u64> = runs.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, [3, 1, 2]);
        assert!(runs.iter().all(|r| r.state.tick == Tick(8)));
        assert!(runs.iter().all(|r| (0.0..=1.0).contains(&r.survival_fraction())));
    }

    #[test]
    fn batch_matches_single_runs() {
        let catalog = Catalog::builtin();
        let settings = SimulationSettings::default();
        let runs = run_batch(&catalog, &settings, &EngineParams::default(), &[7, 7], 12).unwrap();
        assert_eq!(runs[0].state, runs[1].state);

        let mut sim = SimBuilder::new(catalog, settings).seed(7).build().unwrap();
        sim.run_ticks(12, &mut NoopObserver).unwrap();
        assert_eq!(sim.state(), &runs[0].state);
    }

    #[test]
    fn invalid_settings_fail_the_batch() {
        let settings = SimulationSettings { species: "Nobody".into(), ..SimulationSettings::default() };
        let result = run_batch(&Catalog::builtin(), &settings, &EngineParams::default(), &[1, 2], 5);
        assert!(matches!(result, Err(SimError::Model(AmrError::InvalidConfiguration(_)))));
    }
}
