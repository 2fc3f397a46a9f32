use thiserror::Error;

/// Unified error type for the entire sales-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Load ────────────────────────────────────────────────────────
    #[error("Sales data file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse sales data: {0}")]
    ParseError(String),

    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::ParseError(e.to_string())
    }
}
