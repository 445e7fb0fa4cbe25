//! In-memory repositories
//!
//! Same observable behavior as the PostgreSQL repositories (identity
//! assignment, id ordering, soft-delete filtering, not-found on zero
//! affected rows) without a database. Used by service tests, router tests
//! and `ngo-api`'s in-memory mode.

mod activity;
mod member;
mod news;
mod role;
mod testimonial;
mod user;

use std::collections::BTreeMap;

use ngo_core::value_objects::{Page, PageRequest};

pub use activity::InMemoryActivityRepository;
pub use member::InMemoryMemberRepository;
pub use news::InMemoryNewsRepository;
pub use role::InMemoryRoleRepository;
pub use testimonial::InMemoryTestimonialRepository;
pub use user::InMemoryUserRepository;

/// A table keyed by a generated identity
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Store a row under the next identity and return a copy of it
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    /// Slice the rows matching `keep` into one page, in id order
    fn page(&self, request: PageRequest, keep: impl Fn(&T) -> bool) -> Page<T> {
        let matching: Vec<&T> = self.rows.values().filter(|row| keep(row)).collect();
        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .cloned()
            .collect();

        Page::new(items, request, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities_are_sequential() {
        let mut table = Table::<i64>::default();
        assert_eq!(table.insert_with(|id| id * 10), 10);
        assert_eq!(table.insert_with(|id| id * 10), 20);
        assert_eq!(table.last_id, 2);
    }

    #[test]
    fn test_pages_are_disjoint_and_ordered() {
        let mut table = Table::<i64>::default();
        for _ in 0..25 {
            table.insert_with(|id| id);
        }

        let pages: Vec<Vec<i64>> = (0..3)
            .map(|n| table.page(PageRequest::new(n, 10), |_| true).items)
            .collect();

        assert_eq!(pages[0].len(), 10);
        assert_eq!(pages[2].len(), 5);
        let all: Vec<i64> = pages.concat();
        assert_eq!(all, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_page_counts_only_kept_rows() {
        let mut table = Table::<i64>::default();
        for _ in 0..6 {
            table.insert_with(|id| id);
        }

        let page = table.page(PageRequest::new(0, 10), |n| n % 2 == 0);
        assert_eq!(page.items, vec![2, 4, 6]);
        assert_eq!(page.total, 3);
    }
}
