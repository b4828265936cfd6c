//! Per-tick model inputs supplied by the external controls.

use amr_catalog::{AntibioticProfile, Catalog, SpeciesProfile};
use amr_core::{AmrError, AmrResult};

/// Selection value meaning "no secondary antibiotic".
pub const NO_ANTIBIOTIC: &str = "none";

/// Snapshot of the control panel, read once per tick.
///
/// The engine never mutates settings.  Names are resolved against the
/// catalog on every call; an unknown name is
/// [`AmrError::InvalidConfiguration`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationSettings {
    pub species: String,

    pub primary_antibiotic: String,

    /// `None` (or the selection string `"none"`) disables the secondary
    /// antibiotic.
    pub secondary_antibiotic: Option<String>,

    /// °C.
    pub temperature: f64,

    pub ph: f64,

    /// Scales every agent's reproduction probability.  `>= 0`.
    pub growth_rate_multiplier: f64,

    /// Per-tick mutation probability, and the upper bound of initial
    /// resistance.  In `[0, 1]`.
    pub mutation_rate: f64,

    /// Percent, 0–100.
    pub primary_dosage: u8,

    /// Percent, 0–100.
    pub secondary_dosage: u8,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            species:                "Escherichia coli".to_owned(),
            primary_antibiotic:     "Ciprofloxacin".to_owned(),
            secondary_antibiotic:   None,
            temperature:            37.0,
            ph:                     7.0,
            growth_rate_multiplier: 1.0,
            mutation_rate:          0.01,
            primary_dosage:         50,
            secondary_dosage:       50,
        }
    }
}

/// Settings with every name resolved against a [`Catalog`].
#[derive(Clone, Copy, Debug)]
pub struct ResolvedSettings<'c> {
    pub species:   &'c SpeciesProfile,
    pub primary:   &'c AntibioticProfile,
    pub secondary: Option<&'c AntibioticProfile>,
}

impl SimulationSettings {
    /// Map a selection-menu value to the optional secondary antibiotic.
    ///
    /// Only the exact `"none"` sentinel means no antibiotic; anything else is
    /// kept as a name and must resolve against the catalog.
    pub fn secondary_selection(value: &str) -> Option<String> {
        if value == NO_ANTIBIOTIC {
            None
        } else {
            Some(value.to_owned())
        }
    }

    /// The selected secondary antibiotic, treating `"none"` as unselected.
    pub fn secondary(&self) -> Option<&str> {
        self.secondary_antibiotic
            .as_deref()
            .filter(|&s| s != NO_ANTIBIOTIC)
    }

    /// Fraction of hit agents the primary antibiotic kills.
    #[inline]
    pub fn primary_kill_fraction(&self) -> f64 {
        f64::from(self.primary_dosage) / 100.0
    }

    #[inline]
    pub fn secondary_kill_fraction(&self) -> f64 {
        f64::from(self.secondary_dosage) / 100.0
    }

    /// Check numeric ranges and resolve names.
    pub fn resolve<'c>(&self, catalog: &'c Catalog) -> AmrResult<ResolvedSettings<'c>> {
        self.check_ranges()?;
        let species = catalog.species(&self.species)?;
        let primary = catalog.antibiotic(&self.primary_antibiotic)?;
        let secondary = match self.secondary() {
            Some(name) => Some(catalog.antibiotic(name)?),
            None => None,
        };
        Ok(ResolvedSettings { species, primary, secondary })
    }

    fn check_ranges(&self) -> AmrResult<()> {
        let invalid = |msg: String| Err(AmrError::InvalidConfiguration(msg));

        if !self.temperature.is_finite() || !self.ph.is_finite() {
            return invalid(format!(
                "temperature {} and pH {} must be finite",
                self.temperature, self.ph
            ));
        }
        if !(self.growth_rate_multiplier.is_finite() && self.growth_rate_multiplier >= 0.0) {
            return invalid(format!(
                "growth rate multiplier {} must be >= 0",
                self.growth_rate_multiplier
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid(format!("mutation rate {} outside [0, 1]", self.mutation_rate));
        }
        if self.primary_dosage > 100 || self.secondary_dosage > 100 {
            return invalid(format!(
                "dosages {}% / {}% must be within 0–100",
                self.primary_dosage, self.secondary_dosage
            ));
        }
        Ok(())
    }
}
