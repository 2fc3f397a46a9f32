use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single sales transaction, one per record in the input document.
///
/// Serde renames map the Rust fields to the fixed JSON keys of the
/// upstream data source. Every field is required; a record missing any
/// of them fails the whole load.
///
/// (lat, lon) are per-location constants, duplicated across records
/// that share a purchase location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Product name
    #[serde(rename = "Produto")]
    pub product: String,

    /// Product category
    #[serde(rename = "Categoria do Produto")]
    pub category: String,

    /// Sale price
    #[serde(rename = "Preço")]
    pub price: f64,

    /// Freight cost
    #[serde(rename = "Frete")]
    pub freight: f64,

    /// Purchase date (daily granularity, wire format `DD/MM/YYYY`)
    #[serde(rename = "Data da Compra", with = "purchase_date_format")]
    pub purchase_date: NaiveDate,

    /// Seller name
    #[serde(rename = "Vendedor")]
    pub seller: String,

    /// Purchase location (state name)
    #[serde(rename = "Local da compra")]
    pub location: String,

    /// Latitude of the purchase location
    pub lat: f64,

    /// Longitude of the purchase location
    pub lon: f64,

    /// Buyer rating, 1 to 5
    #[serde(rename = "Avaliação da compra")]
    pub rating: u8,

    /// Payment type (e.g., credit card)
    #[serde(rename = "Tipo de pagamento")]
    pub payment_type: String,

    /// Number of payment installments
    #[serde(rename = "Quantidade de parcelas")]
    pub installments: u32,
}

/// Serde adapter for the `DD/MM/YYYY` purchase-date wire format.
///
/// An unparseable date fails deserialization of the whole document,
/// which the loader reports as a parse error.
pub mod purchase_date_format {
    use chrono::NaiveDate;
    use serde::{self, Deserialize, Deserializer, Serializer};

    /// Wire format of the upstream data source.
    pub const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
