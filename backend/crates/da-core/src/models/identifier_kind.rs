use crate::{CoreError, IDENTIFIER_A_MASK_PREFIX, IDENTIFIER_B_MASK_PREFIX, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which sensitive column a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Longer numeric identifier (national ID number)
    IdentifierA,
    /// Shorter alphanumeric identifier (tax ID number)
    IdentifierB,
}

impl IdentifierKind {
    /// Column name in the `Users` table
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdentifierA => "identifier_a",
            Self::IdentifierB => "identifier_b",
        }
    }

    /// Placeholder that replaces everything but the visible suffix
    pub fn mask_prefix(&self) -> &'static str {
        match self {
            Self::IdentifierA => IDENTIFIER_A_MASK_PREFIX,
            Self::IdentifierB => IDENTIFIER_B_MASK_PREFIX,
        }
    }
}

impl FromStr for IdentifierKind {
    type Err = CoreError;

    /// Accepts the column names plus the legacy `aadhar` / `pan` names.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "identifier_a" | "aadhar" => Ok(Self::IdentifierA),
            "identifier_b" | "pan" => Ok(Self::IdentifierB),
            _ => Err(CoreError::InvalidIdentifierKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
