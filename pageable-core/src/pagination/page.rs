use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::models::Sort;

use super::request::PageRequest;
use super::slice::Slice;

/// A slice that also knows the total number of elements across all pages.
///
/// # Example
/// ```
/// use pageable_core::pagination::{Page, PageRequest, Slice};
///
/// let page = Page::new(vec![1, 2, 3, 4, 5], PageRequest::unsorted(4, 5), 56);
/// assert_eq!(page.number(), 4);
/// assert_eq!(page.total_pages(), 12);
/// assert!(page.has_next());
/// assert_eq!(page.next_pageable(), PageRequest::unsorted(5, 5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total_elements: usize,
}

impl<T> Page<T> {
    /// Create a new page
    ///
    /// # Arguments
    /// * `content` - The items in this page
    /// * `request` - The request the items were fetched for
    /// * `total_elements` - Total number of items across all pages
    ///
    /// For a paged request with content, a total smaller than
    /// `offset + size` is raised to that value.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: usize) -> Self {
        let mut total_elements = total_elements;
        if let PageRequest::Paged { page, size, .. } = &request {
            let covered = page.saturating_mul(*size).saturating_add(*size);
            if !content.is_empty() && covered > total_elements {
                debug!(
                    supplied = total_elements,
                    effective = covered,
                    "raising page total to cover the returned page"
                );
                total_elements = covered;
            }
        }
        Self {
            content,
            request,
            total_elements,
        }
    }

    /// Single unpaged page holding all of `content`
    pub fn from_vec(content: Vec<T>) -> Self {
        let total_elements = content.len();
        Self::new(content, PageRequest::unpaged(), total_elements)
    }

    /// Page without content for an unpaged request
    pub fn empty() -> Self {
        Self::empty_for(PageRequest::unpaged())
    }

    pub fn empty_for(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    pub fn total_elements(&self) -> usize {
        self.total_elements
    }

    /// Number of pages needed for all elements. A zero page size yields a
    /// single page.
    pub fn total_pages(&self) -> usize {
        match self.size() {
            0 => 1,
            size => self.total_elements.div_ceil(size),
        }
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Transform the content, keeping the request and the totals.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Slice<T> for Page<T> {
    fn content(&self) -> &[T] {
        &self.content
    }

    fn request(&self) -> &PageRequest {
        &self.request
    }

    fn has_next(&self) -> bool {
        self.number().saturating_add(1) < self.total_pages()
    }
}

impl<T> std::fmt::Display for Page<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let content_type = if self.has_content() {
            std::any::type_name::<T>()
        } else {
            "UNKNOWN"
        };
        write!(
            f,
            "Page {} of {} containing {} instances",
            self.number().saturating_add(1),
            self.total_pages(),
            content_type
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageRef<'a, T> {
    content: &'a [T],
    number: usize,
    size: usize,
    sort: &'a Sort,
    total_elements: usize,
    total_pages: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageWire<T> {
    content: Vec<T>,
    number: usize,
    size: usize,
    #[serde(default)]
    sort: Sort,
    total_elements: usize,
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        PageRef {
            content: &self.content,
            number: self.number(),
            size: self.size(),
            sort: self.sort(),
            total_elements: self.total_elements,
            total_pages: self.total_pages(),
        }
        .serialize(serializer)
    }
}

/// Always rebuilds a paged request from `number`, `size` and `sort`, even
/// for a page that was serialized from an unpaged one.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = PageWire::<T>::deserialize(deserializer)?;
        Ok(Page {
            content: wire.content,
            request: PageRequest::of(wire.number, wire.size, wire.sort),
            total_elements: wire.total_elements,
        })
    }
}
