use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A downloadable CSV artifact plus its transient success notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvExport {
    /// Final download name, extension included
    pub file_name: String,

    /// UTF-8 CSV content, header row first, no index column
    pub content: String,

    /// Notice the frontend shows once the download completes
    pub notice: ExportNotice,
}

/// A transient notice: shown for `display_duration`, then cleared.
/// The duration is data here; the frontend owns the timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNotice {
    pub message: String,

    pub display_duration: Duration,
}
