//! Customer-intelligence dataset: customers grouped by region and end-user
//! segment, loaded from a remote endpoint, normalized from spreadsheet rows,
//! or generated deterministically as a fallback.

pub mod config;
pub mod generate;
pub mod load;
pub mod model;
pub mod normalize;
pub mod rows;

pub use config::LoaderConfig;
pub use generate::generate_dataset;
pub use load::{DataSource, LoadedDataset, Loader};
pub use model::{Category, Customer, CustomerCell, Region, Segment};
pub use normalize::{normalize_rows, parse_customer_rows, NormalizeReport, Record};
