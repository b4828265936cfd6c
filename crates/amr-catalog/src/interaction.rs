//! Qualitative (species, antibiotic) interaction table for the matrix view.
//!
//! This table has no effect on the simulation.  It is a lookup consumed by
//! the matrix renderer: a severity level per cell, and for documented pairs a
//! list of resistance mechanisms and a one-line description.

use std::collections::HashMap;

// ── InteractionLevel ──────────────────────────────────────────────────────────

/// Severity of a documented resistance interaction.
///
/// Pairs absent from the table are [`Minimal`][Self::Minimal].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionLevel {
    #[default]
    Minimal = 1,
    Moderate = 2,
    Strong = 3,
}

impl InteractionLevel {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Minimal),
            2 => Some(Self::Moderate),
            3 => Some(Self::Strong),
            _ => None,
        }
    }

    #[inline]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Glyph shown in the matrix cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Strong => "🔥",
            Self::Moderate => "⚡",
            Self::Minimal => "−",
        }
    }
}

// ── Interaction ───────────────────────────────────────────────────────────────

/// A documented (species, antibiotic) pair.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interaction {
    pub level:       InteractionLevel,
    pub mechanisms:  Vec<String>,
    pub description: String,
}

/// How a species' colonies look on the plate, for the matrix legend.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesAppearance {
    pub species:         String,
    pub color:           String,
    pub resistant_color: String,
    pub description:     String,
}

/// One cell of the rendered matrix, in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixCell<'a> {
    pub species:     &'a str,
    pub antibiotic:  &'a str,
    pub level:       InteractionLevel,
    /// `None` for undocumented pairs (no tooltip).
    pub interaction: Option<&'a Interaction>,
}

// ── InteractionCatalog ────────────────────────────────────────────────────────

/// Interaction table keyed by `(species, antibiotic)`.
///
/// Row and column order are kept separately so the matrix renders in a
/// stable, curated order rather than hash order.
#[derive(Clone, Debug, Default)]
pub struct InteractionCatalog {
    rows:        Vec<String>,
    columns:     Vec<String>,
    /// species → antibiotic → entry.
    entries:     HashMap<String, HashMap<String, Interaction>>,
    appearances: Vec<SpeciesAppearance>,
}

impl InteractionCatalog {
    pub fn new(rows: Vec<String>, columns: Vec<String>) -> Self {
        Self { rows, columns, entries: HashMap::new(), appearances: Vec::new() }
    }

    /// Insert or replace the entry for `(species, antibiotic)`.
    pub fn insert(&mut self, species: &str, antibiotic: &str, interaction: Interaction) {
        self.entries
            .entry(species.to_owned())
            .or_default()
            .insert(antibiotic.to_owned(), interaction);
    }

    pub fn add_appearance(&mut self, appearance: SpeciesAppearance) {
        self.appearances.push(appearance);
    }

    /// Species shown as matrix rows, in display order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Antibiotics shown as matrix columns, in display order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The documented interaction for a pair, if any.
    pub fn interaction(&self, species: &str, antibiotic: &str) -> Option<&Interaction> {
        self.entries.get(species)?.get(antibiotic)
    }

    /// Severity for a pair; undocumented pairs are `Minimal`.
    pub fn severity(&self, species: &str, antibiotic: &str) -> InteractionLevel {
        self.interaction(species, antibiotic)
            .map(|i| i.level)
            .unwrap_or_default()
    }

    /// Every documented pair, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &Interaction)> + '_ {
        self.entries.iter().flat_map(|(species, row)| {
            row.iter().map(move |(antibiotic, i)| (species.as_str(), antibiotic.as_str(), i))
        })
    }

    pub fn appearance(&self, species: &str) -> Option<&SpeciesAppearance> {
        self.appearances.iter().find(|a| a.species == species)
    }

    pub fn appearances(&self) -> &[SpeciesAppearance] {
        &self.appearances
    }

    /// All cells of the matrix in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = MatrixCell<'_>> + '_ {
        self.rows.iter().flat_map(move |species| {
            self.columns.iter().map(move |antibiotic| {
                let interaction = self.interaction(species, antibiotic);
                MatrixCell {
                    species,
                    antibiotic,
                    level: interaction.map(|i| i.level).unwrap_or_default(),
                    interaction,
                }
            })
        })
    }
}
