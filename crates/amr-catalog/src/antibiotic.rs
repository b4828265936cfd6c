//! Per-antibiotic pharmacology.

/// Static description of one antibiotic.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AntibioticProfile {
    pub name: String,

    /// Mechanism-of-action label, e.g. "cell wall synthesis".  Display only.
    pub mechanism: String,

    /// Species names this antibiotic acts on.  An agent of any other species
    /// is never hit by it.
    pub effective_against: Vec<String>,

    /// Antibiotic names that resistance to this one carries over to.
    pub cross_resistance: Vec<String>,
}

impl AntibioticProfile {
    #[inline]
    pub fn is_effective_against(&self, species: &str) -> bool {
        self.effective_against.iter().any(|s| s == species)
    }

    #[inline]
    pub fn cross_resists_with(&self, antibiotic: &str) -> bool {
        self.cross_resistance.iter().any(|a| a == antibiotic)
    }
}
