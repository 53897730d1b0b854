use serde::Serialize;

/// One displayed row of the masking view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskedRow {
    pub name: String,
    pub email: String,
    pub identifier_a: Option<String>,
    pub identifier_b: Option<String>,
}
