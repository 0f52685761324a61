//! Deterministic demo data, used whenever the remote dataset is unavailable.
//!
//! Counts and names are derived from the region and segment labels only, so
//! the same cell always comes out the same.

pub mod names;

use tracing::debug;

use crate::model::{Customer, CustomerCell, Region, Segment};

pub use names::generate_customer_name;

const BASE_MIN: f64 = 50.0;
const BASE_MAX: f64 = 300.0;
const MIN_CUSTOMERS: usize = 10;

const LCG_MULTIPLIER: u64 = 9301;
const LCG_INCREMENT: u64 = 49297;
const LCG_MODULUS: u64 = 233_280;

/// Small linear congruential generator yielding values in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    value: u64,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            value: seed % LCG_MODULUS,
        }
    }

    pub fn next_f64(&mut self) -> f64 {
        self.value = (self.value * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.value as f64 / LCG_MODULUS as f64
    }
}

/// UTF-16 code of the label's first unit, 0 for an empty label.
fn leading_code(label: &str) -> u64 {
    label.encode_utf16().next().map(u64::from).unwrap_or(0)
}

pub fn cell_seed(region: &Region, segment: &Segment) -> u64 {
    (leading_code(region.as_str()) * 1000 + leading_code(segment.as_str()) * 100) % 10_000
}

fn region_multiplier(region: &Region) -> f64 {
    match region {
        Region::Morocco => 1.0,
        Region::WestAfrica => 1.3,
        Region::Unknown | Region::Other(_) => 1.0,
    }
}

fn segment_multiplier(segment: &Segment) -> f64 {
    match segment {
        Segment::Mining => 1.5,
        Segment::WaterTreatment => 1.3,
        Segment::Chemicals => 1.0,
        Segment::Energy => 0.8,
        Segment::Fertilizers => 0.6,
        Segment::Manufacturing => 0.7,
        Segment::Unknown | Segment::Other(_) => 1.0,
    }
}

/// Customer count for a cell: a seeded draw from the cell's scaled range,
/// never below 10.
pub fn generate_customer_count(region: &Region, segment: &Segment) -> usize {
    let rm = region_multiplier(region);
    let sm = segment_multiplier(segment);
    let min = (BASE_MIN * rm * sm).floor();
    let max = (BASE_MAX * rm * sm).floor();

    let mut random = SeededRandom::new(cell_seed(region, segment));
    let count = (random.next_f64() * (max - min + 1.0)).floor() + min;

    (count as usize).max(MIN_CUSTOMERS)
}

pub fn generate_cell(region: &Region, segment: &Segment) -> CustomerCell {
    let count = generate_customer_count(region, segment);
    let customers = (0..count)
        .map(|i| {
            Customer::new(
                format!("{}-{}-{}", region, segment, i),
                generate_customer_name(region, segment, i),
                region.clone(),
                segment.clone(),
            )
        })
        .collect();
    CustomerCell::new(region.clone(), segment.clone(), customers)
}

/// One cell for every known region × segment, regions outermost.
pub fn generate_dataset() -> Vec<CustomerCell> {
    let cells: Vec<CustomerCell> = Region::KNOWN
        .into_iter()
        .flat_map(|region| {
            Segment::KNOWN
                .into_iter()
                .map(move |segment| generate_cell(&region, &segment))
        })
        .collect();
    debug!(cells = cells.len(), "generated demo dataset");
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    #[test]
    fn lcg_sequence() {
        let mut r = SeededRandom::new(4700);
        // (4700 * 9301 + 49297) % 233280 = 140637
        assert_eq!(r.next_f64(), 140_637.0 / 233_280.0);
        let mut again = SeededRandom::new(4700);
        assert_eq!(again.next_f64(), 140_637.0 / 233_280.0);
        assert!((0.0..1.0).contains(&r.next_f64()));
    }

    #[test]
    fn seeds_from_leading_letters() {
        // 'M' = 77, 'W' = 87
        assert_eq!(cell_seed(&Region::Morocco, &Segment::Mining), 4700);
        assert_eq!(cell_seed(&Region::WestAfrica, &Segment::WaterTreatment), 5700);
        assert_eq!(cell_seed(&Region::Unknown, &Segment::Unknown), 3500);
        assert_eq!(
            cell_seed(&Region::Other(String::new()), &Segment::Other(String::new())),
            0
        );
    }

    #[test]
    fn reference_counts() {
        let expected = [
            (Region::Morocco, [301, 219, 233, 181, 134, 154]),
            (Region::WestAfrica, [391, 284, 303, 236, 174, 200]),
        ];
        for (region, counts) in expected {
            for (segment, count) in Segment::KNOWN.iter().zip(counts) {
                assert_eq!(
                    generate_customer_count(&region, segment),
                    count,
                    "{region} / {segment}"
                );
            }
        }
        assert_eq!(generate_customer_count(&Region::Unknown, &Segment::Unknown), 240);
    }

    #[test]
    fn generation_is_deterministic() {
        for region in Region::KNOWN {
            for segment in Segment::KNOWN {
                assert_eq!(
                    generate_customer_count(&region, &segment),
                    generate_customer_count(&region, &segment)
                );
                for i in [0, 7, 42] {
                    assert_eq!(
                        generate_customer_name(&region, &segment, i),
                        generate_customer_name(&region, &segment, i)
                    );
                }
            }
        }
        assert_eq!(generate_dataset(), generate_dataset());
    }

    #[test]
    fn dataset_shape() {
        let cells = generate_dataset();
        assert_eq!(cells.len(), 12);
        assert_eq!(cells[0].region, Region::Morocco);
        assert_eq!(cells[0].end_user_segment, Segment::Mining);
        assert_eq!(cells[11].region, Region::WestAfrica);
        assert_eq!(cells[11].end_user_segment, Segment::Manufacturing);

        for cell in &cells {
            assert!(cell.is_consistent());
            assert!(cell.customer_count >= MIN_CUSTOMERS);
            let category = cell.end_user_segment.category();
            assert!(cell.customers.iter().all(|c| c.category == category));
        }

        let first = &cells[0].customers[0];
        assert_eq!(first.id, "Morocco-Mining & Mineral Processing-0");
        assert_eq!(first.name, "Moroccan Gold Fields Mining North");
        assert_eq!(first.category, Category::Mining);
    }
}
