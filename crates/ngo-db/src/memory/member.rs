//! In-memory MemberRepository

use async_trait::async_trait;
use parking_lot::RwLock;

use ngo_core::entities::Member;
use ngo_core::error::DomainError;
use ngo_core::traits::{MemberRepository, RepoResult};
use ngo_core::value_objects::{Page, PageRequest};

use super::Table;

/// In-memory MemberRepository with soft delete
#[derive(Debug, Default)]
pub struct InMemoryMemberRepository {
    table: RwLock<Table<Member>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a row regardless of its deleted flag
    pub fn raw(&self, id: i64) -> Option<Member> {
        self.table.read().rows.get(&id).cloned()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        Ok(self.table.read().rows.get(&id).filter(|m| !m.deleted).cloned())
    }

    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Member>> {
        Ok(self.table.read().page(request, |m| !m.deleted))
    }

    async fn create(&self, member: &Member) -> RepoResult<Member> {
        Ok(self.table.write().insert_with(|id| Member {
            id,
            deleted: false,
            ..member.clone()
        }))
    }

    async fn update(&self, member: &Member) -> RepoResult<()> {
        let mut table = self.table.write();
        match table.rows.get_mut(&member.id) {
            Some(row) if !row.deleted => {
                *row = Member {
                    created_at: row.created_at,
                    deleted: false,
                    ..member.clone()
                };
                Ok(())
            }
            _ => Err(DomainError::MemberNotFound(member.id)),
        }
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut table = self.table.write();
        match table.rows.get_mut(&id) {
            Some(row) if !row.deleted => {
                row.mark_deleted();
                Ok(())
            }
            _ => Err(DomainError::MemberNotFound(id)),
        }
    }
}
