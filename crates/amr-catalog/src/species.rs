//! Per-species biology.

/// Static description of one bacterial species.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesProfile {
    pub name: String,

    /// Baseline reproduction probability per tick before environmental
    /// scaling.  Always positive.
    pub base_growth_rate: f64,

    /// Mechanisms an agent of this species can acquire by mutation, in
    /// catalog order.
    pub resistance_mechanisms: Vec<String>,

    /// Temperature (°C) at which the temperature factor is 1.
    pub optimal_temperature: f64,

    /// pH at which the pH factor is 1.
    pub optimal_ph: f64,

    /// Display color (CSS hex) used by renderers for live agents.
    pub color: String,
}

impl SpeciesProfile {
    /// Mechanisms from this species' list that `active` does not yet
    /// contain, in catalog order.
    ///
    /// Yielded names borrow from the profile only, so they outlive `active`.
    pub fn available_mechanisms<'s, 'b>(
        &'s self,
        active: &'b [String],
    ) -> impl Iterator<Item = &'s str> {
        self.resistance_mechanisms
            .iter()
            .filter(move |m| !active.contains(m))
            .map(String::as_str)
    }
}
