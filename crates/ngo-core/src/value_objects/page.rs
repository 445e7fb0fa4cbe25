//! Offset pagination

/// Zero-based page request with a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    /// Default number of items per page
    pub const DEFAULT_SIZE: u32 = 10;

    /// Create a page request. A size of zero is bumped to one.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    /// Number of rows to skip
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    /// Number of rows to fetch
    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

/// One page of results plus the total count of the underlying query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    pub total: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: i64) -> Self {
        Self {
            items,
            request,
            total,
        }
    }

    /// Whether a page exists before this one
    pub fn has_previous(&self) -> bool {
        self.request.page > 0
    }

    /// Whether rows exist beyond this page
    pub fn has_next(&self) -> bool {
        self.request.offset() + self.request.limit() < self.total
    }

    /// Convert the items, keeping the paging metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            request: self.request,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_limit() {
        let request = PageRequest::new(3, 10);
        assert_eq!(request.offset(), 30);
        assert_eq!(request.limit(), 10);
    }

    #[test]
    fn test_zero_size_is_bumped() {
        assert_eq!(PageRequest::new(0, 0).size, 1);
    }

    #[test]
    fn test_has_next_and_previous() {
        let first = Page::new(vec![1; 10], PageRequest::new(0, 10), 25);
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = Page::new(vec![1; 5], PageRequest::new(2, 10), 25);
        assert!(last.has_previous());
        assert!(!last.has_next());

        let exact = Page::new(vec![1; 10], PageRequest::new(1, 10), 20);
        assert!(!exact.has_next());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2, 3], PageRequest::new(1, 3), 9).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20, 30]);
        assert_eq!(page.request.page, 1);
        assert_eq!(page.total, 9);
    }
}
