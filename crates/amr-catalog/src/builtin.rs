//! Built-in reference data: six clinically common species and six
//! antibiotics, with the documented interactions between them.

use crate::{AntibioticProfile, Interaction, InteractionCatalog, InteractionLevel, SpeciesAppearance, SpeciesProfile};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn species_profile(
    name:       &str,
    growth:     f64,
    mechanisms: &[&str],
    temp:       f64,
    ph:         f64,
    color:      &str,
) -> SpeciesProfile {
    SpeciesProfile {
        name:                  name.to_owned(),
        base_growth_rate:      growth,
        resistance_mechanisms: strings(mechanisms),
        optimal_temperature:   temp,
        optimal_ph:            ph,
        color:                 color.to_owned(),
    }
}

fn antibiotic_profile(name: &str, mechanism: &str, cross: &[&str], effective: &[&str]) -> AntibioticProfile {
    AntibioticProfile {
        name:              name.to_owned(),
        mechanism:         mechanism.to_owned(),
        effective_against: strings(effective),
        cross_resistance:  strings(cross),
    }
}

fn document(
    table:       &mut InteractionCatalog,
    species:     &str,
    antibiotic:  &str,
    level:       InteractionLevel,
    mechanisms:  &[&str],
    description: &str,
) {
    table.insert(species, antibiotic, Interaction {
        level,
        mechanisms:  strings(mechanisms),
        description: description.to_owned(),
    });
}

pub const E_COLI: &str = "Escherichia coli";
pub const S_AUREUS: &str = "Staphylococcus aureus";
pub const K_PNEUMONIAE: &str = "Klebsiella pneumoniae";
pub const P_AERUGINOSA: &str = "Pseudomonas aeruginosa";
pub const C_DIFFICILE: &str = "Clostridium difficile";
pub const M_TUBERCULOSIS: &str = "Mycobacterium tuberculosis";

pub fn species() -> Vec<SpeciesProfile> {
    vec![
        species_profile(E_COLI, 1.2,
            &["efflux pumps", "enzyme production", "plasmid transfer"], 37.0, 7.0, "#2ECC71"),
        species_profile(S_AUREUS, 1.0,
            &["cell wall modification", "biofilm formation", "enzyme production"], 35.0, 7.5, "#F1C40F"),
        species_profile(K_PNEUMONIAE, 0.9,
            &["capsule formation", "carbapenemase production", "efflux pumps"], 37.0, 7.2, "#E74C3C"),
        species_profile(P_AERUGINOSA, 1.1,
            &["biofilm formation", "efflux pumps", "outer membrane modification"], 37.0, 7.0, "#3498DB"),
        species_profile(C_DIFFICILE, 0.7,
            &["spore formation", "toxin production", "antibiotic inactivation"], 37.0, 7.1, "#9B59B6"),
        species_profile(M_TUBERCULOSIS, 0.4,
            &["cell wall modification", "drug-modifying enzymes", "efflux pumps"], 37.0, 6.8, "#E67E22"),
    ]
}

pub fn antibiotics() -> Vec<AntibioticProfile> {
    vec![
        antibiotic_profile("Vancomycin", "cell wall synthesis", &["Daptomycin"], &[S_AUREUS, C_DIFFICILE]),
        antibiotic_profile("Ciprofloxacin", "DNA gyrase inhibition", &[], &[E_COLI, P_AERUGINOSA]),
        antibiotic_profile("Meropenem", "cell wall synthesis", &["Vancomycin"], &[K_PNEUMONIAE, E_COLI]),
        antibiotic_profile("Daptomycin", "cell membrane disruption", &["Vancomycin"], &[S_AUREUS]),
        antibiotic_profile("Linezolid", "protein synthesis inhibition", &[], &[S_AUREUS, M_TUBERCULOSIS]),
        antibiotic_profile("Rifampicin", "RNA synthesis inhibition", &[], &[M_TUBERCULOSIS]),
    ]
}

pub fn interactions() -> InteractionCatalog {
    let rows = strings(&[E_COLI, S_AUREUS, K_PNEUMONIAE, P_AERUGINOSA, C_DIFFICILE, M_TUBERCULOSIS]);
    let columns = strings(&["Vancomycin", "Ciprofloxacin", "Meropenem", "Daptomycin", "Linezolid", "Rifampicin"]);
    let mut table = InteractionCatalog::new(rows, columns);

    document(&mut table, S_AUREUS, "Vancomycin", InteractionLevel::Strong,
        &["Cell wall thickening", "Peptidoglycan modification", "D-Ala-D-Ala modification"],
        "Strong interaction with documented resistance");
    document(&mut table, P_AERUGINOSA, "Ciprofloxacin", InteractionLevel::Strong,
        &["DNA gyrase mutations", "Efflux pump overexpression", "Membrane permeability changes"],
        "Rapid development of resistance observed");
    document(&mut table, K_PNEUMONIAE, "Meropenem", InteractionLevel::Strong,
        &["Carbapenemase production", "Porin loss", "Efflux pump activation"],
        "Critical clinical concern");
    document(&mut table, E_COLI, "Ciprofloxacin", InteractionLevel::Strong,
        &["DNA gyrase mutations", "Plasmid-mediated resistance", "Efflux pumps"],
        "Common therapeutic combination");
    document(&mut table, M_TUBERCULOSIS, "Rifampicin", InteractionLevel::Strong,
        &["RNA polymerase mutations", "Cell wall impermeability", "Efflux pumps"],
        "Primary treatment option");
    document(&mut table, S_AUREUS, "Daptomycin", InteractionLevel::Moderate,
        &["Membrane modifications", "Cell wall thickening"],
        "Alternative treatment option");
    document(&mut table, E_COLI, "Meropenem", InteractionLevel::Moderate,
        &["Beta-lactamase production", "Porin modifications"],
        "Effective but resistance possible");
    document(&mut table, P_AERUGINOSA, "Meropenem", InteractionLevel::Moderate,
        &["Carbapenemase production", "Efflux pumps"],
        "Used in severe infections");
    document(&mut table, S_AUREUS, "Linezolid", InteractionLevel::Moderate,
        &["23S rRNA modifications", "cfr gene expression"],
        "Reserved for resistant cases");

    let appearances = [
        (E_COLI, "#CFE8BC", "#94B37C", "Rod-shaped, slightly translucent cream to pale green"),
        (S_AUREUS, "#F8E5B9", "#D4B161", "Spherical clusters, golden cream colored"),
        (K_PNEUMONIAE, "#E8E1D5", "#B5A898", "Mucoid, grayish-white colonies"),
        (P_AERUGINOSA, "#D5E8E6", "#89ABA8", "Iridescent, blue-green with metallic sheen"),
        (C_DIFFICILE, "#E8E4D5", "#BAB297", "Ground-glass appearance, yellowish"),
        (M_TUBERCULOSIS, "#F0EBE0", "#C5B8A0", "Rough, buff-colored colonies"),
    ];
    for (species, color, resistant_color, description) in appearances {
        table.add_appearance(SpeciesAppearance {
            species:         species.to_owned(),
            color:           color.to_owned(),
            resistant_color: resistant_color.to_owned(),
            description:     description.to_owned(),
        });
    }

    table
}
