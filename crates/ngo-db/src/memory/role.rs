//! In-memory RoleRepository

use async_trait::async_trait;
use parking_lot::RwLock;

use ngo_core::entities::Role;
use ngo_core::traits::{RepoResult, RoleRepository};

/// In-memory RoleRepository seeded with the built-in roles
#[derive(Debug)]
pub struct InMemoryRoleRepository {
    roles: RwLock<Vec<Role>>,
}

impl InMemoryRoleRepository {
    pub fn new() -> Self {
        Self {
            roles: RwLock::new(vec![Role::new(1, Role::ADMIN), Role::new(2, Role::USER)]),
        }
    }

    /// Add another role, e.g. one created by an operator
    pub fn insert(&self, role: Role) {
        self.roles.write().push(role);
    }
}

impl Default for InMemoryRoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Role>> {
        Ok(self.roles.read().iter().find(|r| r.name == name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtin_roles() {
        let repo = InMemoryRoleRepository::new();
        assert!(repo.find_by_name(Role::ADMIN).await.unwrap().unwrap().is_admin());
        assert!(repo.find_by_name(Role::USER).await.unwrap().is_some());
        assert!(repo.find_by_name("ROLE_EDITOR").await.unwrap().is_none());
    }
}
