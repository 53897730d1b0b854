use serde::Serialize;

/// What one masked-save wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersistReport {
    /// Selected names that resolved to a record, in name order
    pub updated: Vec<String>,
    /// Selected names with no matching record
    pub skipped: Vec<String>,
    /// Rows changed; more than `updated.len()` when names repeat
    pub rows_updated: u64,
}
