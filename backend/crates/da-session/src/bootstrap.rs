//! Conversions from configuration into the collaborators a session needs.

use da_auth::{PasswordAuthenticator, UserCredential};
use da_config::CredentialsConfig;
use da_core::{NewUserRecord, SeedEntry};

/// Seed roster in username order.
pub fn seed_entries_from(credentials: &CredentialsConfig) -> Vec<SeedEntry> {
    credentials
        .usernames
        .iter()
        .map(|(username, entry)| {
            SeedEntry::new(
                username.clone(),
                NewUserRecord {
                    name: entry.name.clone(),
                    email: entry.email.clone(),
                    identifier_a: entry.identifier_a.clone(),
                    identifier_b: entry.identifier_b.clone(),
                },
            )
        })
        .collect()
}

pub fn authenticator_from(credentials: &CredentialsConfig) -> PasswordAuthenticator {
    credentials
        .usernames
        .iter()
        .map(|(username, entry)| {
            (
                username.clone(),
                UserCredential::new(entry.name.clone(), entry.password.clone()),
            )
        })
        .collect()
}
