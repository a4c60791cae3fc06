use crate::models::Sort;

use super::request::PageRequest;

/// A window of results together with the request that produced it.
///
/// Implementors supply the content, the request and whether a following
/// window exists; the navigation metadata is derived from those.
///
/// # Example
/// ```
/// use pageable_core::pagination::{Chunk, PageRequest, Slice};
///
/// let chunk = Chunk::new(vec![1, 2, 3], PageRequest::of_size(3), true);
/// assert!(chunk.is_first());
/// assert!(chunk.has_next());
/// assert_eq!(chunk.next_pageable(), PageRequest::unsorted(1, 3));
/// ```
pub trait Slice<T> {
    fn content(&self) -> &[T];

    /// The request used to fetch this slice
    fn request(&self) -> &PageRequest;

    fn has_next(&self) -> bool;

    fn has_previous(&self) -> bool {
        self.number() > 0
    }

    /// Zero-based number of this slice; 0 when unpaged.
    fn number(&self) -> usize {
        match self.request() {
            PageRequest::Paged { page, .. } => *page,
            PageRequest::Unpaged { .. } => 0,
        }
    }

    /// Requested page size, or the actual element count when unpaged.
    fn size(&self) -> usize {
        match self.request() {
            PageRequest::Paged { size, .. } => *size,
            PageRequest::Unpaged { .. } => self.number_of_elements(),
        }
    }

    fn number_of_elements(&self) -> usize {
        self.content().len()
    }

    fn has_content(&self) -> bool {
        !self.content().is_empty()
    }

    fn sort(&self) -> &Sort {
        self.request().sort()
    }

    fn is_first(&self) -> bool {
        !self.has_previous()
    }

    fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Request for the following slice.
    ///
    /// When there is none this is an unpaged request carrying the current
    /// sort, so check [`has_next`](Self::has_next) first.
    fn next_pageable(&self) -> PageRequest {
        if self.has_next() {
            return self.request().next();
        }
        PageRequest::unpaged_sorted(self.sort().clone())
    }

    /// Request for the preceding slice.
    ///
    /// When there is none this is an unpaged request carrying the current
    /// sort, so check [`has_previous`](Self::has_previous) first.
    fn previous_pageable(&self) -> PageRequest {
        if self.has_previous() {
            return self.request().previous_or_first();
        }
        PageRequest::unpaged_sorted(self.sort().clone())
    }

    /// Request for the following slice, or this slice's request if it is the last one.
    fn next_or_last_pageable(&self) -> PageRequest {
        if self.has_next() {
            return self.next_pageable();
        }
        self.request().clone()
    }

    /// Request for the preceding slice, or this slice's request if it is the first one.
    fn previous_or_first_pageable(&self) -> PageRequest {
        if self.has_previous() {
            return self.previous_pageable();
        }
        self.request().clone()
    }
}

/// A slice without a total count.
///
/// Whether more data follows has to come from the data source, typically by
/// fetching one row more than the page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk<T> {
    content: Vec<T>,
    request: PageRequest,
    has_next: bool,
}

impl<T> Chunk<T> {
    pub fn new(content: Vec<T>, request: PageRequest, has_next: bool) -> Self {
        Self {
            content,
            request,
            has_next,
        }
    }

    /// Build a chunk from a result fetched with `size + 1` as its limit.
    ///
    /// Surplus rows beyond the page size are dropped and mark the chunk as
    /// having a successor. An unpaged request never has one.
    pub fn from_overfetch(mut content: Vec<T>, request: PageRequest) -> Self {
        let has_next = match &request {
            PageRequest::Paged { size, .. } if content.len() > *size => {
                content.truncate(*size);
                true
            }
            _ => false,
        };
        Self::new(content, request, has_next)
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn map<U, F>(self, f: F) -> Chunk<U>
    where
        F: FnMut(T) -> U,
    {
        Chunk {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            has_next: self.has_next,
        }
    }
}

impl<T> Slice<T> for Chunk<T> {
    fn content(&self) -> &[T] {
        &self.content
    }

    fn request(&self) -> &PageRequest {
        &self.request
    }

    fn has_next(&self) -> bool {
        self.has_next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Sort};

    fn by_name() -> Sort {
        Sort::by(Direction::Asc, ["name"])
    }

    #[test]
    fn test_number_and_size() {
        let paged = Chunk::new(vec![1, 2, 3], PageRequest::unsorted(4, 10), false);
        assert_eq!(paged.number(), 4);
        assert_eq!(paged.size(), 10);
        assert_eq!(paged.number_of_elements(), 3);

        let unpaged = Chunk::new(vec![1, 2, 3], PageRequest::unpaged(), false);
        assert_eq!(unpaged.number(), 0);
        assert_eq!(unpaged.size(), 3);
    }

    #[test]
    fn test_content() {
        let chunk = Chunk::new(vec!["a", "b"], PageRequest::unpaged(), false);
        assert_eq!(chunk.content(), &["a", "b"]);
        assert!(chunk.has_content());
        assert_eq!(chunk.into_content(), vec!["a", "b"]);

        let empty: Chunk<i32> = Chunk::new(Vec::new(), PageRequest::unpaged(), false);
        assert!(!empty.has_content());
    }

    #[test]
    fn test_navigation_in_the_middle() {
        let chunk = Chunk::new(vec![1, 2], PageRequest::of(2, 2, by_name()), true);
        assert!(!chunk.is_first());
        assert!(!chunk.is_last());
        assert_eq!(chunk.next_pageable(), PageRequest::of(3, 2, by_name()));
        assert_eq!(chunk.previous_pageable(), PageRequest::of(1, 2, by_name()));
        assert_eq!(chunk.next_or_last_pageable(), PageRequest::of(3, 2, by_name()));
        assert_eq!(chunk.previous_or_first_pageable(), PageRequest::of(1, 2, by_name()));
    }

    #[test]
    fn test_navigation_at_the_edges() {
        let chunk = Chunk::new(vec![1, 2], PageRequest::of(0, 2, by_name()), false);
        assert!(chunk.is_first());
        assert!(chunk.is_last());
        assert_eq!(chunk.next_pageable(), PageRequest::unpaged_sorted(by_name()));
        assert_eq!(chunk.previous_pageable(), PageRequest::unpaged_sorted(by_name()));
        assert_eq!(chunk.next_or_last_pageable(), PageRequest::of(0, 2, by_name()));
        assert_eq!(chunk.previous_or_first_pageable(), PageRequest::of(0, 2, by_name()));
    }

    #[test]
    fn test_from_overfetch() {
        let chunk = Chunk::from_overfetch(vec![1, 2, 3], PageRequest::unsorted(0, 2));
        assert!(chunk.has_next());
        assert_eq!(chunk.content(), &[1, 2]);

        let chunk = Chunk::from_overfetch(vec![1, 2], PageRequest::unsorted(0, 2));
        assert!(!chunk.has_next());
        assert_eq!(chunk.content(), &[1, 2]);

        let chunk = Chunk::from_overfetch(vec![1, 2, 3], PageRequest::unpaged());
        assert!(!chunk.has_next());
        assert_eq!(chunk.number_of_elements(), 3);
    }

    #[test]
    fn test_map_keeps_request() {
        let chunk = Chunk::new(vec![1, 2], PageRequest::of(1, 2, by_name()), true)
            .map(|n| n.to_string());
        assert_eq!(chunk.content(), &["1".to_string(), "2".to_string()]);
        assert_eq!(chunk.request(), &PageRequest::of(1, 2, by_name()));
        assert!(chunk.has_next());
    }

    #[test]
    fn test_sort_comes_from_request() {
        let chunk = Chunk::new(vec![1], PageRequest::of(0, 1, by_name()), false);
        assert_eq!(chunk.sort(), &by_name());
    }
}
