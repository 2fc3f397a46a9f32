use serde::{Deserialize, Serialize};

/// User-configurable settings for one dashboard session.
///
/// Filter widget state does not live here; it travels explicitly as a
/// `FilterSelection` on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Prefix for revenue metric strings (e.g., "R$")
    pub currency_prefix: String,

    /// Path of the JSON input document, relative to the working directory
    pub data_path: String,

    /// Export file name used when the user leaves the field blank
    pub export_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_prefix: "R$".to_string(),
            data_path: "produto.json".to_string(),
            export_name: "sales".to_string(),
        }
    }
}
