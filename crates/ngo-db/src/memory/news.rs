//! In-memory NewsRepository

use std::collections::BTreeSet;

use async_trait::async_trait;
use parking_lot::RwLock;

use ngo_core::entities::News;
use ngo_core::error::DomainError;
use ngo_core::traits::{NewsRepository, RepoResult};

use super::Table;

/// In-memory NewsRepository
///
/// Tracks the known category ids so an unknown category fails like the
/// foreign key does in PostgreSQL.
#[derive(Debug, Default)]
pub struct InMemoryNewsRepository {
    table: RwLock<Table<News>>,
    categories: RwLock<BTreeSet<i64>>,
}

impl InMemoryNewsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category id that news may reference
    pub fn add_category(&self, id: i64) {
        self.categories.write().insert(id);
    }
}

#[async_trait]
impl NewsRepository for InMemoryNewsRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<News>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn create(&self, news: &News) -> RepoResult<News> {
        if !self.categories.read().contains(&news.category_id) {
            return Err(DomainError::CategoryNotFound(news.category_id));
        }

        Ok(self.table.write().insert_with(|id| News {
            id,
            ..news.clone()
        }))
    }
}
