pub mod error;
pub mod password_authenticator;
pub mod passwords;
pub mod user_credential;

pub use error::{AuthError, Result};
pub use password_authenticator::PasswordAuthenticator;
pub use passwords::{hash_password, verify_password};
pub use user_credential::UserCredential;

#[cfg(test)]
mod tests;
