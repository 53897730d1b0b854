//! Argon2id password hashing. Every hash uses the same parameters.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use error_location::ErrorLocation;

const MEMORY_COST_KIB: u32 = 19 * 1024;
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;

fn argon2_config() -> std::result::Result<Argon2<'static>, argon2::Error> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None)?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a password and return the PHC string (salt and parameters included).
#[track_caller]
pub fn hash_password(plaintext: &str) -> AuthErrorResult<String> {
    let caller = Location::caller();
    let salt = SaltString::generate(&mut OsRng);

    let argon2 = argon2_config().map_err(|e| AuthError::Hash {
        message: e.to_string(),
        location: ErrorLocation::from(caller),
    })?;

    argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash {
            message: e.to_string(),
            location: ErrorLocation::from(caller),
        })
}

/// `false` for a wrong password and for a malformed stored hash.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };

    match argon2_config() {
        Ok(argon2) => argon2
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}
