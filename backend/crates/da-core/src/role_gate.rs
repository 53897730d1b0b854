//! Administrator check.

/// Exact, case-sensitive comparison.
pub fn is_admin(display_name: &str, admin_name: &str) -> bool {
    display_name == admin_name
}

/// Holds the configured administrator name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGate {
    admin_name: String,
}

impl RoleGate {
    pub fn new(admin_name: impl Into<String>) -> Self {
        Self {
            admin_name: admin_name.into(),
        }
    }

    pub fn admin_name(&self) -> &str {
        &self.admin_name
    }

    pub fn is_admin(&self, display_name: &str) -> bool {
        is_admin(display_name, &self.admin_name)
    }
}
