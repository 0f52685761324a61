// src/model/types.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Geography a customer is bucketed under.
///
/// `Other` carries a label that came from a resolved column (or a remote
/// payload) but matched none of the known region keywords.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    Morocco,
    WestAfrica,
    Unknown,
    Other(String),
}

impl Region {
    /// The two regions the dashboard reports on, in display order.
    pub const KNOWN: [Region; 2] = [Region::Morocco, Region::WestAfrica];

    pub fn as_str(&self) -> &str {
        match self {
            Region::Morocco => "Morocco",
            Region::WestAfrica => "West Africa",
            Region::Unknown => "Unknown",
            Region::Other(label) => label,
        }
    }
}

impl From<String> for Region {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Morocco" => Region::Morocco,
            "West Africa" => Region::WestAfrica,
            "Unknown" => Region::Unknown,
            _ => Region::Other(label),
        }
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        match region {
            Region::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// End-user industry vertical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Segment {
    Mining,
    WaterTreatment,
    Chemicals,
    Energy,
    Fertilizers,
    Manufacturing,
    Unknown,
    Other(String),
}

impl Segment {
    /// The six reported segments, in display order.
    pub const KNOWN: [Segment; 6] = [
        Segment::Mining,
        Segment::WaterTreatment,
        Segment::Chemicals,
        Segment::Energy,
        Segment::Fertilizers,
        Segment::Manufacturing,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Segment::Mining => "Mining & Mineral Processing",
            Segment::WaterTreatment => "Water & Wastewater Treatment",
            Segment::Chemicals => "Chemicals & Process Industries",
            Segment::Energy => "Energy & Utilities",
            Segment::Fertilizers => "Fertilizers / Phosphate Value Chain",
            Segment::Manufacturing => "General Manufacturing (multi-industry)",
            Segment::Unknown => "Unknown",
            Segment::Other(label) => label,
        }
    }

    /// Coarse display category. Anything without a mapping is `Manufacturing`.
    pub fn category(&self) -> Category {
        match self {
            Segment::Mining => Category::Mining,
            Segment::WaterTreatment => Category::WaterTreatment,
            Segment::Chemicals => Category::Chemicals,
            Segment::Energy => Category::Energy,
            Segment::Fertilizers => Category::Fertilizers,
            Segment::Manufacturing | Segment::Unknown | Segment::Other(_) => {
                Category::Manufacturing
            }
        }
    }
}

impl From<String> for Segment {
    fn from(label: String) -> Self {
        Segment::KNOWN
            .iter()
            .find(|s| s.as_str() == label)
            .cloned()
            .unwrap_or_else(|| {
                if label == "Unknown" {
                    Segment::Unknown
                } else {
                    Segment::Other(label)
                }
            })
    }
}

impl From<Segment> for String {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category tag used for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Mining,
    WaterTreatment,
    Chemicals,
    Energy,
    Fertilizers,
    Manufacturing,
}

impl Default for Category {
    fn default() -> Self {
        Category::Manufacturing
    }
}

/// A single customer, built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub region: Region,
    pub end_user_segment: Segment,
    #[serde(rename = "type", default)]
    pub category: Category,
}

impl Customer {
    /// The category is always derived from the segment.
    pub fn new(id: String, name: String, region: Region, segment: Segment) -> Self {
        let category = segment.category();
        Self {
            id,
            name,
            region,
            end_user_segment: segment,
            category,
        }
    }
}

/// All customers sharing one (region, segment) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCell {
    pub region: Region,
    pub end_user_segment: Segment,
    pub customer_count: usize,
    pub customers: Vec<Customer>,
}

impl CustomerCell {
    pub fn new(region: Region, segment: Segment, customers: Vec<Customer>) -> Self {
        Self {
            region,
            end_user_segment: segment,
            customer_count: customers.len(),
            customers,
        }
    }

    /// `customer_count` must match the member list. Cells built locally always
    /// do; this guards cells that arrive over the wire.
    pub fn is_consistent(&self) -> bool {
        self.customer_count == self.customers.len()
    }
}
