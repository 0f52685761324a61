// src/normalize/classify.rs

use super::resolve::{resolve_column, value_text, REGION_ALIASES, SEGMENT_ALIASES};
use super::Record;
use crate::model::{Region, Segment};

/// Keywords per region, aligned with `Region::KNOWN`.
const REGION_KEYWORDS: [&[&str]; 2] = [
    &["morocco", "maroc"],
    &[
        "west africa",
        "guinea",
        "ghana",
        "nigeria",
        "senegal",
        "benin",
        "ivory coast",
        "côte d'ivoire",
        "mauritania",
        "niger",
        "togo",
        "burkina faso",
    ],
];

/// Keywords per segment, aligned with `Segment::KNOWN`. Checked top to bottom.
const SEGMENT_KEYWORDS: [&[&str]; 6] = [
    &["mining", "mineral"],
    &["water", "wastewater"],
    &["chemical", "process industr"],
    &["energy", "utilit"],
    &["fertiliz", "phosphate"],
    &["manufactur"],
];

fn first_keyword_hit<T>(text: &str, table: &[&[&str]], labels: impl IntoIterator<Item = T>) -> Option<T> {
    let lower = text.to_lowercase();
    table
        .iter()
        .zip(labels)
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, label)| label)
}

pub fn region_from_text(text: &str) -> Option<Region> {
    first_keyword_hit(text, &REGION_KEYWORDS, Region::KNOWN)
}

pub fn segment_from_text(text: &str) -> Option<Segment> {
    first_keyword_hit(text, &SEGMENT_KEYWORDS, Segment::KNOWN)
}

/// Last resort: run `classify` over every non-metadata field, in key order.
pub fn scan_record<T>(record: &Record, classify: impl Fn(&str) -> Option<T>) -> Option<T> {
    record
        .iter()
        .filter(|(key, _)| !key.starts_with('_'))
        .filter_map(|(_, value)| value_text(value))
        .find_map(|text| classify(&text))
}

/// Region from the region columns, or from any field mentioning a known
/// region. A resolved column with no known keyword keeps its own label.
pub fn normalize_region(record: &Record) -> Region {
    match resolve_column(record, REGION_ALIASES) {
        Some(raw) => region_from_text(&raw).unwrap_or_else(|| Region::from(raw)),
        None => scan_record(record, region_from_text).unwrap_or(Region::Unknown),
    }
}

pub fn normalize_segment(record: &Record) -> Segment {
    match resolve_column(record, SEGMENT_ALIASES) {
        Some(raw) => segment_from_text(&raw).unwrap_or_else(|| Segment::from(raw)),
        None => scan_record(record, segment_from_text).unwrap_or(Segment::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn region_keywords() {
        assert_eq!(region_from_text("Royaume du Maroc"), Some(Region::Morocco));
        assert_eq!(region_from_text("Côte d'Ivoire"), Some(Region::WestAfrica));
        assert_eq!(region_from_text("Lagos, NIGERIA"), Some(Region::WestAfrica));
        assert_eq!(region_from_text("Kenya"), None);
    }

    #[test]
    fn segment_keywords_checked_in_order() {
        assert_eq!(segment_from_text("Gold Mining"), Some(Segment::Mining));
        // "phosphate mining" hits the mining keywords first
        assert_eq!(
            segment_from_text("Phosphate Mining"),
            Some(Segment::Mining)
        );
        assert_eq!(
            segment_from_text("Phosphate fertilizer"),
            Some(Segment::Fertilizers)
        );
        assert_eq!(segment_from_text("Public utility"), Some(Segment::Energy));
        assert_eq!(segment_from_text("Retail"), None);
    }

    #[test]
    fn unmatched_column_keeps_its_label() {
        let r = record(json!({ "Country": "Kenya", "Industry": "Retail" }));
        assert_eq!(normalize_region(&r), Region::Other("Kenya".into()));
        assert_eq!(normalize_segment(&r), Segment::Other("Retail".into()));
    }

    #[test]
    fn falls_back_to_scanning_fields() {
        let r = record(json!({
            "_sheet": "Morocco",
            "Company": "Acme",
            "Notes": "Supplies wastewater plants in Senegal",
        }));
        assert_eq!(normalize_region(&r), Region::WestAfrica);
        assert_eq!(normalize_segment(&r), Segment::WaterTreatment);
    }

    #[test]
    fn nothing_found_is_unknown() {
        let r = record(json!({ "Company": "Acme", "Employees": 40 }));
        assert_eq!(normalize_region(&r), Region::Unknown);
        assert_eq!(normalize_segment(&r), Segment::Unknown);
    }
}
