// src/generate/names.rs

use crate::model::{Region, Segment};

const MINING: &[&str] = &[
    "Gold Fields Mining",
    "AngloGold Ashanti",
    "Newmont Mining",
    "Barrick Gold",
    "Tarkwa Mine Operations",
    "Obuasi Gold Mine",
    "Kinross Mining",
    "Randgold Resources",
    "Ahafo Mine Complex",
    "Bibiani Gold Mine",
];

const WATER_TREATMENT: &[&str] = &[
    "Municipal Water Authority",
    "AquaPure Treatment",
    "WaterGen Solutions",
    "HydroTreat Systems",
    "CleanWater Utilities",
    "PureFlow Treatment",
    "Regional Water Corp",
    "AquaSafe Operations",
];

const CHEMICALS: &[&str] = &[
    "ChemProcess Industries",
    "PetroChemical Corp",
    "Industrial Chemicals Ltd",
    "ProcessChem Solutions",
    "Chemical Manufacturing Group",
    "Specialty Chemicals Inc",
    "Bulk Chemicals Corp",
    "ChemWorks Processing",
];

const ENERGY: &[&str] = &[
    "PowerGen Utilities",
    "Regional Energy Corp",
    "Thermal Power Station",
    "Energy Solutions Group",
    "National Power Authority",
    "Grid Energy Systems",
    "Power Plant Operations",
    "Utility Energy Corp",
];

const FERTILIZERS: &[&str] = &[
    "Phosphate Mining Corp",
    "FertilizerWorks Ltd",
    "AgroChemical Industries",
    "Phosphate Valley Mining",
    "NutrientChem Corp",
    "Fertilizer Processing Group",
    "PhosAgro Operations",
    "AgroMineral Industries",
];

const MANUFACTURING: &[&str] = &[
    "General Manufacturing Corp",
    "Industrial Works Ltd",
    "Multi-Industry Group",
    "Factory Operations Inc",
    "Manufacturing Solutions",
    "Industrial Processing Corp",
    "Plant Operations Group",
    "Production Systems Ltd",
];

const LOCATIONS: &[&str] = &[
    "North",
    "South",
    "East",
    "West",
    "Central",
    "Metro",
    "Downtown",
    "Uptown",
    "Riverside",
    "Parkview",
    "Hillside",
    "Valley",
    "Coastal",
    "Mountain",
];

fn region_prefixes(region: &Region) -> &'static [&'static str] {
    match region {
        Region::Morocco => &["Moroccan", "Royal", "National", "Casablanca", "Marrakech"],
        Region::WestAfrica => &["West African", "Regional", "National", "Continental", "Coastal"],
        Region::Unknown | Region::Other(_) => &["Regional", "National"],
    }
}

fn base_names(segment: &Segment) -> &'static [&'static str] {
    match segment {
        Segment::Mining => MINING,
        Segment::WaterTreatment => WATER_TREATMENT,
        Segment::Chemicals => CHEMICALS,
        Segment::Energy => ENERGY,
        Segment::Fertilizers => FERTILIZERS,
        Segment::Manufacturing | Segment::Unknown | Segment::Other(_) => MANUFACTURING,
    }
}

/// `"<prefix> <base> <location>"`, each part cycling with `index`.
pub fn generate_customer_name(region: &Region, segment: &Segment, index: usize) -> String {
    let prefixes = region_prefixes(region);
    let bases = base_names(segment);
    format!(
        "{} {} {}",
        prefixes[index % prefixes.len()],
        bases[index % bases.len()],
        LOCATIONS[index % LOCATIONS.len()]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_parts_cycle_independently() {
        assert_eq!(
            generate_customer_name(&Region::Morocco, &Segment::Mining, 0),
            "Moroccan Gold Fields Mining North"
        );
        assert_eq!(
            generate_customer_name(&Region::WestAfrica, &Segment::Energy, 9),
            "Coastal Regional Energy Corp Parkview"
        );
        assert_eq!(
            generate_customer_name(&Region::Unknown, &Segment::Unknown, 15),
            "National Production Systems Ltd South"
        );
    }
}
