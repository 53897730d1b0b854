use crate::NewUserRecord;

/// One entry of the credentials seed mapping, keyed by login username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub username: String,
    pub record: NewUserRecord,
}

impl SeedEntry {
    pub fn new(username: impl Into<String>, record: NewUserRecord) -> Self {
        Self {
            username: username.into(),
            record,
        }
    }
}
