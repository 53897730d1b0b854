//! A row of the `Users` table.

use crate::IdentifierKind;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-assigned, immutable
    pub id: i64,
    pub name: String,
    pub email: String,
    pub identifier_a: Option<String>,
    pub identifier_b: Option<String>,
}

impl UserRecord {
    /// Stored value of the given identifier column
    pub fn identifier(&self, kind: IdentifierKind) -> Option<&str> {
        match kind {
            IdentifierKind::IdentifierA => self.identifier_a.as_deref(),
            IdentifierKind::IdentifierB => self.identifier_b.as_deref(),
        }
    }
}
