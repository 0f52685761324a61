pub mod lookup;
pub mod types;

pub use lookup::{customer_count_for_cell, customers_for_cell};
pub use types::{Category, Customer, CustomerCell, Region, Segment};
