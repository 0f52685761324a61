// src/model/lookup.rs

use super::types::{Customer, CustomerCell, Region, Segment};

fn find_cell<'a>(
    cells: &'a [CustomerCell],
    region: &Region,
    segment: &Segment,
) -> Option<&'a CustomerCell> {
    cells
        .iter()
        .find(|c| &c.region == region && &c.end_user_segment == segment)
}

/// Customers in the cell for `(region, segment)`, or an empty slice.
pub fn customers_for_cell<'a>(
    cells: &'a [CustomerCell],
    region: &Region,
    segment: &Segment,
) -> &'a [Customer] {
    find_cell(cells, region, segment)
        .map(|c| c.customers.as_slice())
        .unwrap_or(&[])
}

/// Customer count for `(region, segment)`; 0 when the cell is absent.
pub fn customer_count_for_cell(cells: &[CustomerCell], region: &Region, segment: &Segment) -> usize {
    find_cell(cells, region, segment)
        .map(|c| c.customer_count)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CustomerCell> {
        let c = Customer::new(
            "customer-0".into(),
            "Tarkwa Mine".into(),
            Region::WestAfrica,
            Segment::Mining,
        );
        vec![CustomerCell::new(Region::WestAfrica, Segment::Mining, vec![c])]
    }

    #[test]
    fn finds_existing_cell() {
        let cells = sample();
        assert_eq!(
            customer_count_for_cell(&cells, &Region::WestAfrica, &Segment::Mining),
            1
        );
        let customers = customers_for_cell(&cells, &Region::WestAfrica, &Segment::Mining);
        assert_eq!(customers[0].name, "Tarkwa Mine");
    }

    #[test]
    fn missing_cell_is_empty() {
        let cells = sample();
        assert!(customers_for_cell(&cells, &Region::Morocco, &Segment::Mining).is_empty());
        assert_eq!(
            customer_count_for_cell(&cells, &Region::WestAfrica, &Segment::Energy),
            0
        );
    }
}
