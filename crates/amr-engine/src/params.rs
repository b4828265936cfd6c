//! Numeric constants of the population model.

use amr_core::{AmrError, AmrResult, Domain};

/// Model constants.
///
/// `Default` reproduces the reference model exactly; other values are for
/// experiments and tests.  These never change during a run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineParams {
    /// Region the initial population is seeded in.
    pub domain: Domain,

    /// Agents created by `initialize`.  Default: 500.
    pub initial_population: usize,

    /// Hard cap on the agent list, dead agents included.  Default: 1000.
    pub max_population: usize,

    /// Entries kept in each rolling history.  Default: 100.
    pub history_window: usize,

    /// Age beyond which an agent may die of old age.  Default: 1000.
    pub senescence_age: u32,

    /// Per-tick death chance past `senescence_age`.  Default: 0.1.
    pub senescence_death_chance: f64,

    /// Resistance gained per mutation, capped at 1.  Default: 0.01.
    pub resistance_step: f64,

    /// Offspring are displaced by U(−jitter, jitter) on each axis.  Default: 10.
    pub birth_jitter: f64,

    /// Degrees from optimum at which the temperature factor reaches 0.
    /// Default: 20.
    pub temperature_tolerance: f64,

    /// pH units from optimum at which the pH factor reaches 0.  Default: 4.
    pub ph_tolerance: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            domain:                  Domain::default(),
            initial_population:      500,
            max_population:          1_000,
            history_window:          100,
            senescence_age:          1_000,
            senescence_death_chance: 0.1,
            resistance_step:         0.01,
            birth_jitter:            10.0,
            temperature_tolerance:   20.0,
            ph_tolerance:            4.0,
        }
    }
}

impl EngineParams {
    pub fn validate(&self) -> AmrResult<()> {
        let invalid = |msg: String| Err(AmrError::InvalidConfiguration(msg));

        if self.initial_population > self.max_population {
            return invalid(format!(
                "initial population {} exceeds cap {}",
                self.initial_population, self.max_population
            ));
        }
        if !(0.0..=1.0).contains(&self.senescence_death_chance) {
            return invalid(format!(
                "senescence death chance {} outside [0, 1]",
                self.senescence_death_chance
            ));
        }
        if !(self.resistance_step.is_finite() && self.resistance_step >= 0.0) {
            return invalid(format!("resistance step {} must be >= 0", self.resistance_step));
        }
        if !(self.birth_jitter.is_finite() && self.birth_jitter >= 0.0) {
            return invalid(format!("birth jitter {} must be >= 0", self.birth_jitter));
        }
        if !(self.temperature_tolerance > 0.0 && self.ph_tolerance > 0.0) {
            return invalid("environmental tolerances must be positive".to_owned());
        }
        let d = &self.domain;
        if !(d.min_x <= d.max_x && d.min_y <= d.max_y) {
            return invalid(format!("empty domain {d:?}"));
        }
        Ok(())
    }
}
