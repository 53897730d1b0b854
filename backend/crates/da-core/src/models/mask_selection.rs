use crate::{IdentifierKind, UserRecord, mask};

use std::collections::BTreeSet;

/// Transient per-session choice of which users to mask and which columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskSelection {
    pub names: BTreeSet<String>,
    pub mask_identifier_a: bool,
    pub mask_identifier_b: bool,
}

impl MaskSelection {
    pub fn new<I, S>(names: I, mask_identifier_a: bool, mask_identifier_b: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            mask_identifier_a,
            mask_identifier_b,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Identifier values as they should appear for `record`.
    ///
    /// Unselected records and columns whose toggle is off come back unchanged.
    pub fn apply(&self, record: &UserRecord) -> (Option<String>, Option<String>) {
        if !self.is_selected(&record.name) {
            return (record.identifier_a.clone(), record.identifier_b.clone());
        }

        (
            self.masked_column(record, IdentifierKind::IdentifierA),
            self.masked_column(record, IdentifierKind::IdentifierB),
        )
    }

    fn masked_column(&self, record: &UserRecord, kind: IdentifierKind) -> Option<String> {
        let enabled = match kind {
            IdentifierKind::IdentifierA => self.mask_identifier_a,
            IdentifierKind::IdentifierB => self.mask_identifier_b,
        };

        let value = record.identifier(kind);
        if enabled {
            mask(value, kind)
        } else {
            value.map(str::to_string)
        }
    }
}
