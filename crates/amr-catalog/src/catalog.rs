//! The combined, validated reference catalog.

use std::collections::HashSet;

use amr_core::{AmrError, AmrResult};

use crate::{AntibioticProfile, CatalogError, CatalogResult, InteractionCatalog, SpeciesProfile};

/// Species and antibiotic tables plus the interaction matrix.
///
/// Construction validates cross-references, so every name an antibiotic
/// mentions is guaranteed to resolve.  Tables keep insertion order, which is
/// the order selection menus present them in.
#[derive(Clone, Debug)]
pub struct Catalog {
    species:      Vec<SpeciesProfile>,
    antibiotics:  Vec<AntibioticProfile>,
    interactions: InteractionCatalog,
}

impl Catalog {
    /// Build and validate a catalog.
    ///
    /// Rejects duplicate names, non-positive or non-finite growth rates, and
    /// antibiotics whose `effective_against` / `cross_resistance` lists name
    /// entries absent from the other tables, and interaction entries keyed by
    /// an unknown species or antibiotic.
    pub fn new(
        species:      Vec<SpeciesProfile>,
        antibiotics:  Vec<AntibioticProfile>,
        interactions: InteractionCatalog,
    ) -> CatalogResult<Self> {
        let mut species_names = HashSet::with_capacity(species.len());
        for s in &species {
            if !species_names.insert(s.name.as_str()) {
                return Err(CatalogError::Duplicate { kind: "species", name: s.name.clone() });
            }
            if !(s.base_growth_rate.is_finite() && s.base_growth_rate > 0.0) {
                return Err(CatalogError::Parse(format!(
                    "species {:?} has non-positive base growth rate {}",
                    s.name, s.base_growth_rate
                )));
            }
        }

        let mut antibiotic_names = HashSet::with_capacity(antibiotics.len());
        for a in &antibiotics {
            if !antibiotic_names.insert(a.name.as_str()) {
                return Err(CatalogError::Duplicate { kind: "antibiotic", name: a.name.clone() });
            }
        }

        for a in &antibiotics {
            if let Some(target) = a.effective_against.iter().find(|s| !species_names.contains(s.as_str())) {
                return Err(CatalogError::DanglingReference {
                    from:   "antibiotic",
                    name:   a.name.clone(),
                    kind:   "species",
                    target: target.clone(),
                });
            }
            if let Some(target) = a.cross_resistance.iter().find(|b| !antibiotic_names.contains(b.as_str())) {
                return Err(CatalogError::DanglingReference {
                    from:   "antibiotic",
                    name:   a.name.clone(),
                    kind:   "antibiotic",
                    target: target.clone(),
                });
            }
        }

        for (species_name, antibiotic_name, _) in interactions.entries() {
            if !species_names.contains(species_name) {
                return Err(CatalogError::DanglingReference {
                    from:   "interaction",
                    name:   format!("{species_name} / {antibiotic_name}"),
                    kind:   "species",
                    target: species_name.to_owned(),
                });
            }
            if !antibiotic_names.contains(antibiotic_name) {
                return Err(CatalogError::DanglingReference {
                    from:   "interaction",
                    name:   format!("{species_name} / {antibiotic_name}"),
                    kind:   "antibiotic",
                    target: antibiotic_name.to_owned(),
                });
            }
        }

        Ok(Self { species, antibiotics, interactions })
    }

    /// Look up a species by name.
    pub fn species(&self, name: &str) -> AmrResult<&SpeciesProfile> {
        self.species
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| AmrError::unknown("species", name))
    }

    /// Look up an antibiotic by name.
    pub fn antibiotic(&self, name: &str) -> AmrResult<&AntibioticProfile> {
        self.antibiotics
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| AmrError::unknown("antibiotic", name))
    }

    pub fn all_species(&self) -> &[SpeciesProfile] {
        &self.species
    }

    pub fn all_antibiotics(&self) -> &[AntibioticProfile] {
        &self.antibiotics
    }

    pub fn species_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.species.iter().map(|s| s.name.as_str())
    }

    pub fn antibiotic_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.antibiotics.iter().map(|a| a.name.as_str())
    }

    pub fn interactions(&self) -> &InteractionCatalog {
        &self.interactions
    }
}

impl Catalog {
    /// The built-in six-species, six-antibiotic catalog.
    ///
    /// The built-in tables are checked by the same validation as
    /// [`Catalog::new`] in this crate's tests.
    pub fn builtin() -> Self {
        Self {
            species:      crate::builtin::species(),
            antibiotics:  crate::builtin::antibiotics(),
            interactions: crate::builtin::interactions(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
