//! CSV catalog loaders.
//!
//! # CSV formats
//!
//! List-valued fields are `;`-separated; an empty field is an empty list.
//!
//! ```csv
//! name,base_growth_rate,resistance_mechanisms,optimal_temperature,optimal_ph,color
//! Escherichia coli,1.2,efflux pumps;enzyme production,37,7.0,#2ECC71
//! ```
//!
//! ```csv
//! name,mechanism,effective_against,cross_resistance
//! Vancomycin,cell wall synthesis,Staphylococcus aureus;Clostridium difficile,Daptomycin
//! ```
//!
//! ```csv
//! species,antibiotic,level,mechanisms,description
//! Staphylococcus aureus,Vancomycin,3,Cell wall thickening;Peptidoglycan modification,Strong interaction
//! ```
//!
//! Interaction rows and columns are taken from the species and antibiotic
//! tables in file order when loading a whole directory.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::{
    AntibioticProfile, Catalog, CatalogError, CatalogResult, Interaction, InteractionCatalog,
    InteractionLevel, SpeciesProfile,
};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SpeciesRecord {
    name:                  String,
    base_growth_rate:      f64,
    resistance_mechanisms: String,
    optimal_temperature:   f64,
    optimal_ph:            f64,
    color:                 String,
}

#[derive(Deserialize)]
struct AntibioticRecord {
    name:              String,
    mechanism:         String,
    effective_against: String,
    cross_resistance:  String,
}

#[derive(Deserialize)]
struct InteractionRecord {
    species:     String,
    antibiotic:  String,
    level:       u8,
    mechanisms:  String,
    description: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse a species table from any `Read` source.
pub fn load_species_reader<R: Read>(reader: R) -> CatalogResult<Vec<SpeciesProfile>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<SpeciesRecord>()
        .map(|result| {
            let r = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
            Ok(SpeciesProfile {
                name:                  r.name.trim().to_owned(),
                base_growth_rate:      r.base_growth_rate,
                resistance_mechanisms: split_list(&r.resistance_mechanisms),
                optimal_temperature:   r.optimal_temperature,
                optimal_ph:            r.optimal_ph,
                color:                 r.color.trim().to_owned(),
            })
        })
        .collect()
}

/// Parse an antibiotic table from any `Read` source.
pub fn load_antibiotics_reader<R: Read>(reader: R) -> CatalogResult<Vec<AntibioticProfile>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<AntibioticRecord>()
        .map(|result| {
            let r = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
            Ok(AntibioticProfile {
                name:              r.name.trim().to_owned(),
                mechanism:         r.mechanism.trim().to_owned(),
                effective_against: split_list(&r.effective_against),
                cross_resistance:  split_list(&r.cross_resistance),
            })
        })
        .collect()
}

/// Parse interaction rows into `table`, which supplies row/column order.
pub fn load_interactions_reader<R: Read>(
    reader: R,
    table:  &mut InteractionCatalog,
) -> CatalogResult<()> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    for result in csv_reader.deserialize::<InteractionRecord>() {
        let r = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        let level = InteractionLevel::from_level(r.level).ok_or_else(|| {
            CatalogError::Parse(format!(
                "invalid interaction level {} for {} / {}: expected 1, 2, or 3",
                r.level, r.species, r.antibiotic
            ))
        })?;
        table.insert(r.species.trim(), r.antibiotic.trim(), Interaction {
            level,
            mechanisms:  split_list(&r.mechanisms),
            description: r.description.trim().to_owned(),
        });
    }
    Ok(())
}

/// Load `species.csv`, `antibiotics.csv` and (if present) `interactions.csv`
/// from `dir` and validate the result.
pub fn load_catalog_dir(dir: &Path) -> CatalogResult<Catalog> {
    let species = load_species_reader(std::fs::File::open(dir.join("species.csv"))?)?;
    let antibiotics = load_antibiotics_reader(std::fs::File::open(dir.join("antibiotics.csv"))?)?;

    let mut interactions = InteractionCatalog::new(
        species.iter().map(|s| s.name.clone()).collect(),
        antibiotics.iter().map(|a| a.name.clone()).collect(),
    );
    let interactions_path = dir.join("interactions.csv");
    if interactions_path.exists() {
        load_interactions_reader(std::fs::File::open(interactions_path)?, &mut interactions)?;
    }

    info!(
        dir = %dir.display(),
        species = species.len(),
        antibiotics = antibiotics.len(),
        interactions = interactions.len(),
        "loaded catalog"
    );
    Catalog::new(species, antibiotics, interactions)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn split_list(field: &str) -> Vec<String> {
    field
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}
