// src/rows.rs

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde_json::Value;
use std::{fs, path::Path};
use tracing::{debug, warn};

use crate::normalize::Record;

/// Read a JSON array of row objects. Elements that are not objects are
/// skipped with a warning.
pub fn read_json_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    let value: Value = serde_json::from_str(&text).with_context(|| format!("parsing {:?}", path))?;

    let Value::Array(items) = value else {
        anyhow::bail!("{:?} does not hold a JSON array of rows", path);
    };

    let mut rows = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => rows.push(map),
            other => warn!(row = idx, value = %other, "skipping non-object row"),
        }
    }
    debug!(rows = rows.len(), path = %path.display(), "read JSON rows");
    Ok(rows)
}

/// Read a CSV file whose first line names the columns. Every cell becomes a
/// string value; short records simply lack the trailing keys.
pub fn read_csv_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {:?}", path))?;

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("reading header row of {:?}", path))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error in {:?} at record {}", path, idx))?;
        let row: Record = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), Value::String(v.to_string())))
            .collect();
        rows.push(row);
    }
    debug!(rows = rows.len(), columns = headers.len(), path = %path.display(), "read CSV rows");
    Ok(rows)
}

/// `.csv` files go through the CSV reader, anything else is read as JSON.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .and_then(|s| s.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        read_csv_rows(path)
    } else {
        read_json_rows(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_file(suffix: &str, content: &str) -> Result<tempfile::NamedTempFile> {
        let mut tmp = Builder::new().suffix(suffix).tempfile()?;
        tmp.write_all(content.as_bytes())?;
        Ok(tmp)
    }

    #[test]
    fn csv_headers_become_keys() -> Result<()> {
        let tmp = temp_file(
            ".csv",
            "Company Name,Country,Industry\n\
             OCP Group,Morocco,Phosphate\n\
             Short Row\n",
        )?;
        let rows = read_rows(tmp.path())?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Company Name"], "OCP Group");
        assert_eq!(
            rows[0].keys().collect::<Vec<_>>(),
            vec!["Company Name", "Country", "Industry"]
        );
        assert_eq!(rows[1].len(), 1);
        Ok(())
    }

    #[test]
    fn json_skips_non_objects() -> Result<()> {
        let tmp = temp_file(
            ".json",
            r#"[{"Company": "Managem", "Employees": 6500}, 12, "x", {"Client": "SNIM"}]"#,
        )?;
        let rows = read_rows(tmp.path())?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Employees"], 6500);
        assert_eq!(rows[1]["Client"], "SNIM");
        Ok(())
    }

    #[test]
    fn json_must_be_an_array() -> Result<()> {
        let tmp = temp_file(".json", r#"{"data": []}"#)?;
        assert!(read_json_rows(tmp.path()).is_err());
        Ok(())
    }
}
