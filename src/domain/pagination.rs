//! Zero-based paging primitives shared by repositories and services.

/// Requested slice of a result set.
///
/// `page` is zero-based; `size` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// One page of results plus the total count of the underlying query.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub request: PageRequest,
    pub total_elements: i64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: i64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> i64 {
        let size = self.request.limit();
        (self.total_elements + size - 1) / size
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn is_first(&self) -> bool {
        self.request.page == 0
    }

    pub fn is_last(&self) -> bool {
        i64::from(self.request.page) + 1 >= self.total_pages()
    }

    /// Converts the content while keeping paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
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
    fn test_zero_size_is_raised_to_one() {
        assert_eq!(PageRequest::new(0, 0).size, 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page: Page<i32> = Page::new(vec![], PageRequest::new(0, 10), 21);
        assert_eq!(page.total_pages(), 3);

        let empty: Page<i32> = Page::new(vec![], PageRequest::new(0, 10), 0);
        assert_eq!(empty.total_pages(), 0);
        assert!(empty.is_first());
        assert!(empty.is_last());
    }

    #[test]
    fn test_is_last() {
        let middle: Page<i32> = Page::new(vec![1; 10], PageRequest::new(1, 10), 25);
        assert!(!middle.is_first());
        assert!(!middle.is_last());

        let last: Page<i32> = Page::new(vec![1; 5], PageRequest::new(2, 10), 25);
        assert!(last.is_last());
    }

    #[test]
    fn test_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], PageRequest::new(0, 2), 5);
        let mapped = page.map(|n| n.to_string());

        assert_eq!(mapped.content, vec!["1", "2"]);
        assert_eq!(mapped.total_elements, 5);
        assert_eq!(mapped.number_of_elements(), 2);
        assert_eq!(mapped.request, PageRequest::new(0, 2));
    }
}
