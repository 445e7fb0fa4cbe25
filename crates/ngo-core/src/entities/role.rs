//! Role entity - a row of the roles lookup table

/// Role entity
///
/// Roles form an open table referenced by name. Only the two names the
/// application relies on are known at compile time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl Role {
    /// Administrator role name
    pub const ADMIN: &'static str = "ROLE_ADMIN";
    /// Role assigned on registration
    pub const USER: &'static str = "ROLE_USER";

    /// Create a new Role
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    /// Check if this role grants administrative access
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.name == Self::ADMIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        assert!(Role::new(1, Role::ADMIN).is_admin());
        assert!(!Role::new(2, Role::USER).is_admin());
        assert!(!Role::new(3, "ROLE_EDITOR").is_admin());
    }
}
