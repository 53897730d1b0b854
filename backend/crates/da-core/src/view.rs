use crate::{MaskSelection, MaskedRow, UserRecord};

/// Build the display rows for `records`, keeping their order.
pub fn compute_view(records: &[UserRecord], selection: &MaskSelection) -> Vec<MaskedRow> {
    records
        .iter()
        .map(|record| {
            let (identifier_a, identifier_b) = selection.apply(record);
            MaskedRow {
                name: record.name.clone(),
                email: record.email.clone(),
                identifier_a,
                identifier_b,
            }
        })
        .collect()
}
