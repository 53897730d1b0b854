mod auth_outcome;
mod identifier_kind;
mod mask_selection;
mod new_user_record;
