use std::time::Duration;

use tracing::debug;

use crate::models::export::{CsvExport, ExportNotice};
use crate::models::filter::Column;
use crate::models::sale::Sale;

/// Extension appended to every export file name.
pub const EXPORT_EXTENSION: &str = ".csv";

/// How long the frontend shows the success notice before clearing it.
pub const NOTICE_SECONDS: u64 = 5;

/// Serializes the filtered, column-projected table to a downloadable
/// CSV artifact.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Render `sales` as UTF-8 CSV: one header row with the selected
    /// column names, one row per record, no index column.
    pub fn to_csv(&self, sales: &[Sale], columns: &[Column]) -> String {
        let mut csv = String::new();

        let headers: Vec<String> = columns.iter().map(|c| Self::escape(c.header())).collect();
        csv.push_str(&headers.join(","));
        csv.push('\n');

        for sale in sales {
            let row: Vec<String> = columns
                .iter()
                .map(|c| Self::escape(&c.cell(sale)))
                .collect();
            csv.push_str(&row.join(","));
            csv.push('\n');
        }

        csv
    }

    /// Final download name: the user's input, or `fallback` when the
    /// input is blank, with the fixed extension appended.
    pub fn file_name(&self, input: &str, fallback: &str) -> String {
        let name = input.trim();
        let name = if name.is_empty() { fallback } else { name };
        format!("{name}{EXPORT_EXTENSION}")
    }

    /// Build the complete download artifact plus its success notice.
    pub fn export(
        &self,
        sales: &[Sale],
        columns: &[Column],
        name: &str,
        fallback: &str,
    ) -> CsvExport {
        let content = self.to_csv(sales, columns);
        let file_name = self.file_name(name, fallback);
        debug!(file = %file_name, rows = sales.len(), "prepared CSV export");

        CsvExport {
            file_name,
            content,
            notice: ExportNotice {
                message: "File downloaded successfully!".to_string(),
                display_duration: Duration::from_secs(NOTICE_SECONDS),
            },
        }
    }

    /// Quote a field when it contains a delimiter, quote, or newline.
    fn escape(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
