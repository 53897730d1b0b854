use serde::Serialize;

/// Result of a seed import attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// Table was created and populated
    Imported { count: usize },
    /// Table already existed, nothing inserted
    AlreadySeeded,
}
