use thiserror::Error;

/// Convenience result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type returned by report and roster operations.
///
/// Aggregates over an empty subset are *not* errors: they surface as `None` and are rendered as a
/// fallback line by the report runner.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output sink failed (e.g. stdout closed by the reader).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// In-memory roster text could not be parsed into student records.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
