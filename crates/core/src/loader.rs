use tracing::info;

use crate::errors::CoreError;
use crate::models::sale::Sale;

/// Loads the sales collection from its JSON source.
///
/// The input is a JSON array of sale objects with `DD/MM/YYYY` purchase
/// dates. Both failure modes, missing file and malformed content, are
/// terminal for the current render pass: the caller surfaces the error
/// and performs no further computation.
pub struct SalesLoader;

impl SalesLoader {
    /// Read and parse the JSON document at `path`.
    pub fn load_from_file(path: &str) -> Result<Vec<Sale>, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::FileNotFound(path.to_string()),
            _ => CoreError::FileIO(e.to_string()),
        })?;
        let sales = Self::load_from_json(&raw)?;
        info!(path, records = sales.len(), "loaded sales data");
        Ok(sales)
    }

    /// Parse a JSON document the caller already read.
    /// Use this for frontends that handle file I/O themselves.
    pub fn load_from_json(json: &str) -> Result<Vec<Sale>, CoreError> {
        let sales: Vec<Sale> = serde_json::from_str(json)?;
        Ok(sales)
    }
}
