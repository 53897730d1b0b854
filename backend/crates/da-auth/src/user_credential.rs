/// Login data for one username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredential {
    /// Name returned on success, the one the role gate compares
    pub display_name: String,
    /// Argon2 PHC string. Users without one cannot log in.
    pub password_hash: Option<String>,
}

impl UserCredential {
    pub fn new(display_name: impl Into<String>, password_hash: Option<String>) -> Self {
        Self {
            display_name: display_name.into(),
            password_hash,
        }
    }
}
