//! Row normalizer: turns loosely structured spreadsheet rows into customers
//! grouped by (region, segment).
//!
//! Nothing here fails. A row without a usable name is skipped and counted;
//! a row whose region or segment cannot be worked out lands in `Unknown`.

pub mod classify;
pub mod name;
pub mod resolve;

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::model::{Customer, CustomerCell, Region, Segment};

pub use classify::{normalize_region, normalize_segment};
pub use name::resolve_name;
pub use resolve::{resolve_column, KeyMatch};

/// One spreadsheet row: column name → scalar value, in column order.
pub type Record = serde_json::Map<String, Value>;

/// How many skipped rows get their keys logged.
const SKIP_LOG_LIMIT: usize = 3;

/// Output of [`normalize_rows`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeReport {
    pub cells: Vec<CustomerCell>,
    pub total_rows: usize,
    pub processed: usize,
    pub skipped: usize,
}

impl NormalizeReport {
    pub fn customer_total(&self) -> usize {
        self.cells.iter().map(|c| c.customer_count).sum()
    }
}

/// Build the customer for row `index`, or `None` if no name can be found.
pub fn normalize_record(index: usize, record: &Record) -> Option<Customer> {
    let name = resolve_name(record)?;
    Some(Customer::new(
        format!("customer-{}", index),
        name,
        normalize_region(record),
        normalize_segment(record),
    ))
}

pub fn normalize_rows(rows: &[Record]) -> NormalizeReport {
    if let Some(first) = rows.first() {
        debug!(keys = ?first.keys().collect::<Vec<_>>(), "first row");
    }

    let mut order: Vec<(Region, Segment, Vec<Customer>)> = Vec::new();
    let mut slots: HashMap<(Region, Segment), usize> = HashMap::new();
    let mut skipped = 0;

    for (index, record) in rows.iter().enumerate() {
        let Some(customer) = normalize_record(index, record) else {
            skipped += 1;
            if skipped <= SKIP_LOG_LIMIT {
                debug!(
                    row = index + 1,
                    keys = ?record.keys().collect::<Vec<_>>(),
                    "skipping row: no customer name"
                );
            }
            continue;
        };

        let key = (customer.region.clone(), customer.end_user_segment.clone());
        let slot = *slots.entry(key).or_insert_with(|| {
            order.push((
                customer.region.clone(),
                customer.end_user_segment.clone(),
                Vec::new(),
            ));
            order.len() - 1
        });
        order[slot].2.push(customer);
    }

    let cells: Vec<CustomerCell> = order
        .into_iter()
        .map(|(region, segment, customers)| CustomerCell::new(region, segment, customers))
        .collect();

    let report = NormalizeReport {
        total_rows: rows.len(),
        processed: rows.len() - skipped,
        skipped,
        cells,
    };

    info!(
        total_rows = report.total_rows,
        processed = report.processed,
        skipped = report.skipped,
        cells = report.cells.len(),
        customers = report.customer_total(),
        "normalized rows"
    );
    for cell in &report.cells {
        debug!(
            region = %cell.region,
            segment = %cell.end_user_segment,
            count = cell.customer_count,
            "cell"
        );
    }
    if report.cells.is_empty() && !rows.is_empty() {
        warn!(sample = ?rows[0], "no customers extracted");
    }

    report
}

/// Shorthand for callers that only need the cells.
pub fn parse_customer_rows(rows: &[Record]) -> Vec<CustomerCell> {
    normalize_rows(rows).cells
}
