//! In-memory UserRepository

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use ngo_core::entities::User;
use ngo_core::error::DomainError;
use ngo_core::traits::{RepoResult, UserRepository};

use super::Table;

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_hash: String,
}

/// In-memory UserRepository with soft delete
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table<StoredUser>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn find_active(&self, pred: impl Fn(&User) -> bool) -> Option<User> {
        self.table
            .read()
            .rows
            .values()
            .map(|s| &s.user)
            .find(|u| !u.deleted && pred(u))
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.find_active(|u| u.id == id))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.find_active(|u| u.email == email))
    }

    async fn find_all(&self) -> RepoResult<Vec<User>> {
        Ok(self
            .table
            .read()
            .rows
            .values()
            .filter(|s| !s.user.deleted)
            .map(|s| s.user.clone())
            .collect())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.table.read().rows.values().any(|s| s.user.email == email))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<User> {
        let mut table = self.table.write();
        // Unique key on email, deleted rows included
        if table.rows.values().any(|s| s.user.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }

        let stored = table.insert_with(|id| StoredUser {
            user: User {
                id,
                deleted: false,
                ..user.clone()
            },
            password_hash: password_hash.to_string(),
        });
        Ok(stored.user)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut table = self.table.write();
        match table.rows.get_mut(&id) {
            Some(stored) if !stored.user.deleted => {
                stored.user.deleted = true;
                stored.user.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(DomainError::UserNotFound(id.to_string())),
        }
    }

    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>> {
        Ok(self
            .table
            .read()
            .rows
            .values()
            .find(|s| !s.user.deleted && s.user.email == email)
            .map(|s| s.password_hash.clone()))
    }
}
