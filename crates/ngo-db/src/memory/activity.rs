//! In-memory ActivityRepository

use async_trait::async_trait;
use parking_lot::RwLock;

use ngo_core::entities::Activity;
use ngo_core::error::DomainError;
use ngo_core::traits::{ActivityRepository, RepoResult};

use super::Table;

/// In-memory ActivityRepository
#[derive(Debug, Default)]
pub struct InMemoryActivityRepository {
    table: RwLock<Table<Activity>>,
}

impl InMemoryActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Activity>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn create(&self, activity: &Activity) -> RepoResult<Activity> {
        Ok(self.table.write().insert_with(|id| Activity {
            id,
            ..activity.clone()
        }))
    }

    async fn update(&self, activity: &Activity) -> RepoResult<()> {
        let mut table = self.table.write();
        let row = table
            .rows
            .get_mut(&activity.id)
            .ok_or(DomainError::ActivityNotFound(activity.id))?;
        *row = Activity {
            created_at: row.created_at,
            ..activity.clone()
        };
        Ok(())
    }
}
