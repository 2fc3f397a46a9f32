use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::region::{Region, YearFilter};
use super::sale::{purchase_date_format, Sale};

/// Sidebar slider bounds. The widgets clamp their values to these
/// ranges; the filter engine itself accepts any range.
pub const PRICE_BOUNDS: (f64, f64) = (0.0, 5000.0);
pub const FREIGHT_BOUNDS: (f64, f64) = (0.0, 250.0);
pub const RATING_BOUNDS: (u8, u8) = (1, 5);
pub const INSTALLMENT_BOUNDS: (u32, u32) = (1, 24);
pub const YEAR_BOUNDS: (i32, i32) = (2020, 2023);

/// The last-submitted sidebar selections, passed explicitly into the
/// filter and aggregation engines on every interaction.
///
/// Each field is an independently-optional predicate; active predicates
/// combine with logical AND. Membership lists use an empty vector for
/// "no restriction" (the sidebar starts with all values selected, so a
/// cleared multiselect must not match nothing); ranges use `None`;
/// region and year use their sentinels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Product names to keep; empty keeps all
    pub products: Vec<String>,

    /// Product categories to keep; empty keeps all
    pub categories: Vec<String>,

    /// Sellers to keep; empty keeps all
    pub sellers: Vec<String>,

    /// Purchase locations to keep; empty keeps all
    pub locations: Vec<String>,

    /// Payment types to keep; empty keeps all
    pub payment_types: Vec<String>,

    /// Inclusive price range
    pub price: Option<(f64, f64)>,

    /// Inclusive freight range
    pub freight: Option<(f64, f64)>,

    /// Inclusive rating range
    pub rating: Option<(u8, u8)>,

    /// Inclusive installment-count range
    pub installments: Option<(u32, u32)>,

    /// Inclusive purchase-date range
    pub purchase_date: Option<(NaiveDate, NaiveDate)>,

    /// Macro-region restriction; `WholeCountry` disables it
    pub region: Region,

    /// Purchase-year restriction; `AllYears` disables it
    pub year: YearFilter,
}

/// A projectable output column of the sales table.
///
/// Column choice is a display concern: projection is applied after row
/// filtering and never affects which rows are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    Product,
    Category,
    Price,
    Freight,
    PurchaseDate,
    Seller,
    Location,
    Latitude,
    Longitude,
    Rating,
    PaymentType,
    Installments,
}

impl Column {
    /// Every column in table order.
    pub const ALL: [Column; 12] = [
        Column::Product,
        Column::Category,
        Column::Price,
        Column::Freight,
        Column::PurchaseDate,
        Column::Seller,
        Column::Location,
        Column::Latitude,
        Column::Longitude,
        Column::Rating,
        Column::PaymentType,
        Column::Installments,
    ];

    /// Header text. Matches the JSON key of the input document so a
    /// downloaded table lines up with the source data.
    pub fn header(&self) -> &'static str {
        match self {
            Column::Product => "Produto",
            Column::Category => "Categoria do Produto",
            Column::Price => "Preço",
            Column::Freight => "Frete",
            Column::PurchaseDate => "Data da Compra",
            Column::Seller => "Vendedor",
            Column::Location => "Local da compra",
            Column::Latitude => "lat",
            Column::Longitude => "lon",
            Column::Rating => "Avaliação da compra",
            Column::PaymentType => "Tipo de pagamento",
            Column::Installments => "Quantidade de parcelas",
        }
    }

    /// Render one sale's cell for this column.
    /// Dates go back out in the `DD/MM/YYYY` wire format.
    pub fn cell(&self, sale: &Sale) -> String {
        match self {
            Column::Product => sale.product.clone(),
            Column::Category => sale.category.clone(),
            Column::Price => sale.price.to_string(),
            Column::Freight => sale.freight.to_string(),
            Column::PurchaseDate => sale
                .purchase_date
                .format(purchase_date_format::FORMAT)
                .to_string(),
            Column::Seller => sale.seller.clone(),
            Column::Location => sale.location.clone(),
            Column::Latitude => sale.lat.to_string(),
            Column::Longitude => sale.lon.to_string(),
            Column::Rating => sale.rating.to_string(),
            Column::PaymentType => sale.payment_type.clone(),
            Column::Installments => sale.installments.to_string(),
        }
    }
}

/// A row-filtered, column-projected view of the sales table, ready for
/// display or CSV download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedTable {
    /// Projected columns, in output order
    pub columns: Vec<Column>,

    /// One rendered row per surviving record
    pub rows: Vec<Vec<String>>,
}

impl ProjectedTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Header texts for the projected columns.
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header()).collect()
    }
}
