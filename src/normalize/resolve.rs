// src/normalize/resolve.rs

use serde_json::Value;

use super::Record;

/// Column aliases for the customer name, highest priority first.
pub const NAME_ALIASES: &[&str] = &[
    "Company Name",
    "Company",
    "Customer Name",
    "Customer",
    "End User Name",
    "Client Name",
    "Organization Name",
    "Name",
    "Organization",
    "Institution",
    "End User",
    "Client",
];

pub const REGION_ALIASES: &[&str] = &[
    "Region",
    "Geography",
    "Geographic Region",
    "Market Region",
    "Country",
    "Location",
    "Territory",
    "Market",
    "Area",
];

pub const SEGMENT_ALIASES: &[&str] = &[
    "End User Type",
    "End User Segment",
    "Industry Category",
    "Industry Type",
    "Segment",
    "Customer Type",
    "End User Category",
    "Industry",
    "Category",
    "Type",
    "Segment Type",
];

/// Text form of a scalar cell. Nulls, arrays and objects carry no text.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                // spreadsheet exports often store integers as floats
                n.as_f64().map(|f| {
                    if f.is_finite() && f.fract() == 0.0 {
                        format!("{:.0}", f)
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Filler values spreadsheets use for "no data". Expects trimmed input.
pub fn is_placeholder(text: &str) -> bool {
    text.is_empty() || text == "xx" || text.eq_ignore_ascii_case("n/a")
}

/// Trimmed text of `value`, unless it is a placeholder.
pub fn accepted_text(value: &Value) -> Option<String> {
    let text = value_text(value)?;
    let trimmed = text.trim();
    if is_placeholder(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// How a column alias is compared against record keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    /// Key equals the alias byte for byte.
    Exact,
    /// Key equals the alias after trimming and lowercasing both.
    CaseInsensitive,
    /// Lowercased alias appears somewhere in the lowercased key.
    Substring,
}

/// Matchers in the order they are tried for each alias.
pub const KEY_MATCHERS: [KeyMatch; 3] = [
    KeyMatch::Exact,
    KeyMatch::CaseInsensitive,
    KeyMatch::Substring,
];

impl KeyMatch {
    /// First acceptable value under a key this matcher pairs with `alias`.
    pub fn find(self, record: &Record, alias: &str) -> Option<String> {
        let wanted = alias.trim().to_lowercase();
        match self {
            KeyMatch::Exact => record.get(alias).and_then(accepted_text),
            KeyMatch::CaseInsensitive => record
                .iter()
                .filter(|(key, _)| !key.is_empty() && key.trim().to_lowercase() == wanted)
                .find_map(|(_, value)| accepted_text(value)),
            KeyMatch::Substring => record
                .iter()
                .filter(|(key, _)| !key.is_empty() && key.to_lowercase().contains(&wanted))
                .find_map(|(_, value)| accepted_text(value)),
        }
    }
}

/// Resolve a concept through its alias list.
///
/// Aliases are walked in priority order and every matcher is tried for an
/// alias before moving to the next one, so a fuzzy hit on a high-priority
/// alias beats an exact hit on a lower one.
pub fn resolve_column(record: &Record, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|alias| {
        KEY_MATCHERS
            .iter()
            .find_map(|matcher| matcher.find(record, alias))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn placeholders_are_never_resolved() {
        for filler in ["", "xx", "n/a", "N/A", "  N/a  "] {
            let r = record(json!({ "Company": filler }));
            assert_eq!(resolve_column(&r, &["Company"]), None, "{filler:?}");
        }
        // only the exact lowercase "xx" is filler
        let r = record(json!({ "Company": "XX" }));
        assert_eq!(resolve_column(&r, &["Company"]).as_deref(), Some("XX"));
    }

    #[test]
    fn matchers_apply_in_order() {
        let r = record(json!({ " region ": "Ghana", "Sales Region": "Morocco" }));
        assert_eq!(KeyMatch::Exact.find(&r, "Region"), None);
        assert_eq!(
            KeyMatch::CaseInsensitive.find(&r, "Region").as_deref(),
            Some("Ghana")
        );
        assert_eq!(
            KeyMatch::Substring.find(&r, "sales").as_deref(),
            Some("Morocco")
        );
        assert_eq!(resolve_column(&r, &["Region"]).as_deref(), Some("Ghana"));
    }

    #[test]
    fn alias_priority_beats_match_quality() {
        // "Company Name" only matches fuzzily, "Name" matches exactly; the
        // higher-priority alias still wins.
        let r = record(json!({ "Name": "Second", "company name ": "First" }));
        assert_eq!(
            resolve_column(&r, &["Company Name", "Name"]).as_deref(),
            Some("First")
        );
    }

    #[test]
    fn placeholder_falls_through_to_next_candidate() {
        let r = record(json!({ "Company": "n/a", "Customer": "  Managem  " }));
        assert_eq!(
            resolve_column(&r, NAME_ALIASES).as_deref(),
            Some("Managem")
        );
    }

    #[test]
    fn scalar_text_forms() {
        assert_eq!(value_text(&json!(42)).as_deref(), Some("42"));
        assert_eq!(value_text(&json!(42.0)).as_deref(), Some("42"));
        assert_eq!(value_text(&json!(2.5)).as_deref(), Some("2.5"));
        assert_eq!(value_text(&json!(true)).as_deref(), Some("true"));
        assert_eq!(value_text(&Value::Null), None);
        assert_eq!(value_text(&json!(["a"])), None);
    }
}
