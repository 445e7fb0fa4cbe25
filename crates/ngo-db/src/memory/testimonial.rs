//! In-memory TestimonialRepository

use async_trait::async_trait;
use parking_lot::RwLock;

use ngo_core::entities::Testimonial;
use ngo_core::error::DomainError;
use ngo_core::traits::{RepoResult, TestimonialRepository};
use ngo_core::value_objects::{Page, PageRequest};

use super::Table;

/// In-memory TestimonialRepository
#[derive(Debug, Default)]
pub struct InMemoryTestimonialRepository {
    table: RwLock<Table<Testimonial>>,
}

impl InMemoryTestimonialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TestimonialRepository for InMemoryTestimonialRepository {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Testimonial>> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Testimonial>> {
        Ok(self.table.read().page(request, |_| true))
    }

    async fn create(&self, testimonial: &Testimonial) -> RepoResult<Testimonial> {
        Ok(self.table.write().insert_with(|id| Testimonial {
            id,
            ..testimonial.clone()
        }))
    }

    async fn update(&self, testimonial: &Testimonial) -> RepoResult<()> {
        let mut table = self.table.write();
        let row = table
            .rows
            .get_mut(&testimonial.id)
            .ok_or(DomainError::TestimonialNotFound(testimonial.id))?;
        *row = Testimonial {
            created_at: row.created_at,
            ..testimonial.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.table
            .write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::TestimonialNotFound(id))
    }
}
