//! Antibiotic kill pass, run once per tick after [`step`][crate::step].

use amr_catalog::Catalog;
use amr_core::{AmrResult, RandomSource};
use tracing::{debug, trace};

use crate::{SimulationSettings, SimulationState};

/// Kill counts from one [`apply_antibiotics`] pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AntibioticOutcome {
    /// Agents the primary roll was taken for.
    pub primary_hits:    usize,
    pub primary_kills:   usize,
    pub secondary_hits:  usize,
    pub secondary_kills: usize,
}

impl AntibioticOutcome {
    pub fn kills(&self) -> usize {
        self.primary_kills + self.secondary_kills
    }
}

/// Expose every alive agent to the selected antibiotics.
///
/// An antibiotic that is not effective against the selected species never
/// touches the colony, and consumes no draws.  This pass only ever turns
/// `alive` from `true` to `false`; age, mechanisms and resistance are left
/// alone.
pub fn apply_antibiotics<R: RandomSource + ?Sized>(
    state:    &mut SimulationState,
    catalog:  &Catalog,
    settings: &SimulationSettings,
    rng:      &mut R,
) -> AmrResult<AntibioticOutcome> {
    let resolved = settings.resolve(catalog)?;
    let species = resolved.species.name.as_str();

    let primary_effective = resolved.primary.is_effective_against(species);
    let primary_kill = settings.primary_kill_fraction();
    // (effective against the species, cross-resistant with the primary)
    let secondary = resolved.secondary.map(|s| {
        (s.is_effective_against(species), resolved.primary.cross_resists_with(&s.name))
    });
    let secondary_kill = settings.secondary_kill_fraction();

    let mut outcome = AntibioticOutcome::default();

    for (i, agent) in state.agents.iter_mut().enumerate() {
        if !agent.alive {
            continue;
        }
        let survival = agent.resistance;

        // A draw *above* the agent's resistance is a hit, so weakly resistant
        // agents are the ones exposed to the dosage roll.  The hit is not
        // itself lethal: the dosage roll decides.
        if primary_effective && rng.next_f64() > survival {
            outcome.primary_hits += 1;
            agent.alive = rng.next_f64() > primary_kill;
            if !agent.alive {
                outcome.primary_kills += 1;
                trace!(agent = i, "killed by primary antibiotic");
            }
        }

        let Some((secondary_effective, cross_resistant)) = secondary else {
            continue;
        };
        if !agent.alive {
            continue;
        }
        // Cross-resistance carries the full resistance over; otherwise the
        // agent only has half its resistance against the second drug.
        let secondary_resistance = if cross_resistant { survival } else { agent.resistance / 2.0 };
        if secondary_effective && rng.next_f64() > secondary_resistance {
            outcome.secondary_hits += 1;
            agent.alive = rng.next_f64() > secondary_kill;
            if !agent.alive {
                outcome.secondary_kills += 1;
                trace!(agent = i, "killed by secondary antibiotic");
            }
        }
    }

    debug!(
        tick = %state.tick,
        primary_kills = outcome.primary_kills,
        secondary_kills = outcome.secondary_kills,
        "antibiotics applied"
    );
    Ok(outcome)
}
