use crate::{UserCredential, verify_password};

use da_core::{AuthOutcome, Authenticator};

use std::collections::BTreeMap;

use log::{info, warn};

/// Checks logins against a fixed username → credential map.
#[derive(Debug, Clone, Default)]
pub struct PasswordAuthenticator {
    credentials: BTreeMap<String, UserCredential>,
}

impl PasswordAuthenticator {
    pub fn new(credentials: BTreeMap<String, UserCredential>) -> Self {
        Self { credentials }
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl FromIterator<(String, UserCredential)> for PasswordAuthenticator {
    fn from_iter<I: IntoIterator<Item = (String, UserCredential)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Authenticator for PasswordAuthenticator {
    fn login(&self, username: &str, password: &str) -> AuthOutcome {
        if username.is_empty() || password.is_empty() {
            return AuthOutcome::pending();
        }

        let Some(credential) = self.credentials.get(username) else {
            warn!("Login rejected: unknown username");
            return AuthOutcome::failure(Some(username.to_string()));
        };

        let Some(ref hash) = credential.password_hash else {
            warn!("Login rejected: no password configured for '{}'", username);
            return AuthOutcome::failure(Some(username.to_string()));
        };

        if !verify_password(password, hash) {
            warn!("Login rejected: wrong password for '{}'", username);
            return AuthOutcome::failure(Some(username.to_string()));
        }

        info!("Login succeeded for '{}'", username);
        AuthOutcome::success(credential.display_name.clone(), username)
    }
}
