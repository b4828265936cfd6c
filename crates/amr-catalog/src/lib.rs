//! `amr-catalog` — immutable reference data for the colony simulator.
//!
//! # Crate layout
//!
//! | Module            | Contents                                               |
//! |-------------------|--------------------------------------------------------|
//! | [`species`]       | `SpeciesProfile`                                       |
//! | [`antibiotic`]    | `AntibioticProfile`                                    |
//! | [`interaction`]   | `InteractionCatalog`, `InteractionLevel`, appearances  |
//! | [`catalog`]       | `Catalog` (keyed tables + validation), built-in data   |
//! | [`loader`]        | CSV loaders for all three tables                       |
//!
//! Catalogs are loaded once at startup and shared read-only by every run.
//! Name lookups that miss return `AmrError::InvalidConfiguration`.

pub mod antibiotic;
pub mod builtin;
pub mod catalog;
pub mod error;
pub mod interaction;
pub mod loader;
pub mod species;


pub use antibiotic::AntibioticProfile;
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use interaction::{Interaction, InteractionCatalog, InteractionLevel, MatrixCell, SpeciesAppearance};
pub use loader::{
    load_antibiotics_reader, load_catalog_dir, load_interactions_reader, load_species_reader,
};
pub use species::SpeciesProfile;
