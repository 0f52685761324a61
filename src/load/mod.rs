//! Loader: fetch the customer dataset from the remote endpoint, falling back
//! to generated data on any failure.
//!
//! Every failure (connection error, non-2xx, timeout, unexpected body) is
//! logged and replaced by [`generate_dataset`]. Callers always get cells.

pub mod cache;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{header::CACHE_CONTROL, Client, StatusCode};
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::config::LoaderConfig;
use crate::generate::generate_dataset;
use crate::model::CustomerCell;

pub use cache::DatasetCache;

/// Query parameter carrying the optional source file path.
pub const FILE_PATH_PARAM: &str = "filePath";

/// Where a loaded dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Cache,
    Generated,
}

impl DataSource {
    pub fn as_str(&self) -> &str {
        match self {
            DataSource::Remote => "remote",
            DataSource::Cache => "cache",
            DataSource::Generated => "generated",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDataset {
    pub cells: Vec<CustomerCell>,
    pub source: DataSource,
    pub loaded_at: DateTime<Utc>,
}

impl LoadedDataset {
    fn new(cells: Vec<CustomerCell>, source: DataSource) -> Self {
        Self {
            cells,
            source,
            loaded_at: Utc::now(),
        }
    }
}

/// Non-2xx response from the endpoint.
#[derive(Debug)]
pub struct HttpStatusError {
    pub status: StatusCode,
    pub detail: String,
}

impl fmt::Display for HttpStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "endpoint returned {}: {}", self.status, self.detail)
    }
}

impl std::error::Error for HttpStatusError {}

/// `message` or `error` from a JSON error body.
fn error_detail(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|k| body.get(k).and_then(Value::as_str))
        .map(str::to_string)
}

/// Pull the cells out of a `{ "data": [...] }` body. Anything else is an error.
pub fn parse_payload(body: Value) -> Result<Vec<CustomerCell>> {
    let data = match body {
        Value::Object(mut map) => map.remove("data"),
        _ => None,
    };
    let items = match data {
        Some(Value::Array(items)) => items,
        Some(other) => bail!("`data` is not an array: {}", other),
        None => bail!("payload has no `data` field"),
    };
    if items.is_empty() {
        bail!("payload `data` is empty");
    }

    let cells: Vec<CustomerCell> =
        serde_json::from_value(Value::Array(items)).context("decoding customer cells")?;
    if let Some(bad) = cells.iter().find(|c| !c.is_consistent()) {
        bail!(
            "cell {} / {} claims {} customers but lists {}",
            bad.region,
            bad.end_user_segment,
            bad.customer_count,
            bad.customers.len()
        );
    }
    Ok(cells)
}

/// Owns the HTTP client and the dataset cache. One `Loader` per caller
/// context; loads take `&mut self` so they never overlap.
pub struct Loader {
    client: Client,
    config: LoaderConfig,
    cache: DatasetCache,
}

impl Loader {
    pub fn new(config: LoaderConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: LoaderConfig) -> Self {
        Self {
            client,
            config,
            cache: DatasetCache::new(),
        }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    pub fn invalidate_cache(&mut self) {
        self.cache.invalidate();
    }

    /// Load cells for `file_path` (or the endpoint's default file).
    ///
    /// A cached dataset for the same path is returned without a request. A
    /// successful fetch replaces the cache; a fallback leaves it untouched.
    #[instrument(level = "info", skip(self))]
    pub async fn load(&mut self, file_path: Option<&str>) -> LoadedDataset {
        let Some(endpoint) = self.config.endpoint.clone() else {
            debug!("no endpoint configured, using generated data");
            return LoadedDataset::new(generate_dataset(), DataSource::Generated);
        };

        if let Some(cells) = self.cache.get(file_path) {
            debug!(cells = cells.len(), "serving cached dataset");
            return LoadedDataset::new(cells.to_vec(), DataSource::Cache);
        }

        let outcome =
            tokio::time::timeout(self.config.timeout, self.fetch_remote(&endpoint, file_path))
                .await;
        match outcome {
            Ok(Ok(cells)) => {
                info!(cells = cells.len(), "loaded customer intelligence from endpoint");
                self.cache.store(file_path, cells.clone());
                LoadedDataset::new(cells, DataSource::Remote)
            }
            Ok(Err(err)) => {
                match err.downcast_ref::<HttpStatusError>() {
                    Some(status_err) if status_err.status == StatusCode::NOT_FOUND => {
                        info!("customer intelligence file not found, using generated data");
                    }
                    _ => warn!(error = %format!("{:#}", err), "load failed, using generated data"),
                }
                LoadedDataset::new(generate_dataset(), DataSource::Generated)
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.config.timeout.as_millis() as u64,
                    "fetch timed out, using generated data"
                );
                LoadedDataset::new(generate_dataset(), DataSource::Generated)
            }
        }
    }

    async fn fetch_remote(&self, endpoint: &Url, file_path: Option<&str>) -> Result<Vec<CustomerCell>> {
        let mut url = endpoint.clone();
        if let Some(path) = file_path {
            url.query_pairs_mut().append_pair(FILE_PATH_PARAM, path);
        }
        debug!(%url, "fetching customer intelligence");

        let resp = self
            .client
            .get(url.clone())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| error_detail(&body))
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());
            return Err(HttpStatusError { status, detail }.into());
        }

        let body: Value = resp
            .json()
            .await
            .with_context(|| format!("reading JSON from {}", url))?;
        parse_payload(body)
    }
}
