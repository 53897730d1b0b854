pub mod authenticator;
pub mod error;
pub mod masking;
pub mod models;
pub mod role_gate;
pub mod view;

pub use authenticator::Authenticator;
pub use error::{CoreError, Result};
pub use masking::{
    IDENTIFIER_A_MASK_PREFIX, IDENTIFIER_B_MASK_PREFIX, VISIBLE_SUFFIX_LEN, mask, mask_by_kind_name,
};
pub use models::auth_outcome::AuthOutcome;
pub use models::auth_status::AuthStatus;
pub use models::identifier_kind::IdentifierKind;
pub use models::mask_selection::MaskSelection;
pub use models::masked_row::MaskedRow;
pub use models::new_user_record::NewUserRecord;
pub use models::seed_entry::SeedEntry;
pub use models::seed_outcome::SeedOutcome;
pub use models::user_record::UserRecord;
pub use role_gate::{RoleGate, is_admin};
pub use view::compute_view;

#[cfg(test)]
mod tests;
