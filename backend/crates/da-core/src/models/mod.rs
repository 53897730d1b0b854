pub mod auth_outcome;
pub mod auth_status;
pub mod identifier_kind;
pub mod mask_selection;
pub mod masked_row;
pub mod new_user_record;
pub mod seed_entry;
pub mod seed_outcome;
pub mod user_record;
