use pageable_api::{PageError, PageResult};

use crate::models::{Limit, OffsetScrollPosition, Sort};

/// Pagination request: either a page number and size with a sort, or an
/// unpaged request carrying only a sort.
///
/// Navigation is pure arithmetic on the stored page number. A request knows
/// nothing about how many pages actually exist; that belongs to [`super::Page`].
///
/// # Example
/// ```
/// use pageable_core::models::Sort;
/// use pageable_core::pagination::PageRequest;
///
/// let request = PageRequest::of(2, 20, Sort::unsorted());
/// assert_eq!(request.offset().unwrap(), 40);
/// assert_eq!(request.next().page_number().unwrap(), 3);
/// assert_eq!(request.previous_or_first().page_number().unwrap(), 1);
///
/// let unpaged = PageRequest::unpaged();
/// assert!(unpaged.offset().is_err());
/// assert_eq!(unpaged.next(), unpaged);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PageRequest {
    Unpaged { sort: Sort },
    Paged { page: usize, size: usize, sort: Sort },
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::unpaged()
    }
}

impl PageRequest {
    pub fn unpaged() -> Self {
        Self::unpaged_sorted(Sort::unsorted())
    }

    pub fn unpaged_sorted(sort: Sort) -> Self {
        PageRequest::Unpaged { sort }
    }

    /// Request for the zero-based `page` of `size` items
    pub fn of(page: usize, size: usize, sort: Sort) -> Self {
        PageRequest::Paged { page, size, sort }
    }

    pub fn unsorted(page: usize, size: usize) -> Self {
        Self::of(page, size, Sort::unsorted())
    }

    /// Request for the first page of `size` items
    pub fn of_size(size: usize) -> Self {
        Self::unsorted(0, size)
    }

    pub fn is_paged(&self) -> bool {
        matches!(self, PageRequest::Paged { .. })
    }

    pub fn is_unpaged(&self) -> bool {
        !self.is_paged()
    }

    pub fn page_number(&self) -> PageResult<usize> {
        match self {
            PageRequest::Paged { page, .. } => Ok(*page),
            PageRequest::Unpaged { .. } => Err(PageError::Unpaged),
        }
    }

    pub fn page_size(&self) -> PageResult<usize> {
        match self {
            PageRequest::Paged { size, .. } => Ok(*size),
            PageRequest::Unpaged { .. } => Err(PageError::Unpaged),
        }
    }

    /// `page * size`, saturating at `usize::MAX`.
    pub fn offset(&self) -> PageResult<usize> {
        match self {
            PageRequest::Paged { page, size, .. } => Ok(page.saturating_mul(*size)),
            PageRequest::Unpaged { .. } => Err(PageError::Unpaged),
        }
    }

    pub fn sort(&self) -> &Sort {
        match self {
            PageRequest::Paged { sort, .. } | PageRequest::Unpaged { sort } => sort,
        }
    }

    /// The request's own sort when it is sorted, `fallback` otherwise.
    pub fn sort_or<'a>(&'a self, fallback: &'a Sort) -> &'a Sort {
        let sort = self.sort();
        if sort.is_sorted() {
            sort
        } else {
            fallback
        }
    }

    /// Request for the following page. The page number saturates at `usize::MAX`.
    pub fn next(&self) -> Self {
        match self {
            PageRequest::Paged { page, size, sort } => {
                Self::of(page.saturating_add(1), *size, sort.clone())
            }
            PageRequest::Unpaged { .. } => self.clone(),
        }
    }

    /// Request for the page before this one.
    ///
    /// Only valid while [`has_previous`](Self::has_previous) holds: fails with
    /// `NoPreviousPage` on page zero and with `Unpaged` on an unpaged request.
    /// Use [`previous_or_first`](Self::previous_or_first) when the first page
    /// is an acceptable answer.
    pub fn previous(&self) -> PageResult<Self> {
        match self {
            PageRequest::Paged { page: 0, .. } => Err(PageError::NoPreviousPage),
            PageRequest::Paged { page, size, sort } => Ok(Self::of(page - 1, *size, sort.clone())),
            PageRequest::Unpaged { .. } => Err(PageError::Unpaged),
        }
    }

    pub fn previous_or_first(&self) -> Self {
        match self {
            PageRequest::Paged { page, size, sort } if *page > 0 => {
                Self::of(page - 1, *size, sort.clone())
            }
            _ => self.first(),
        }
    }

    pub fn first(&self) -> Self {
        match self {
            PageRequest::Paged { size, sort, .. } => Self::of(0, *size, sort.clone()),
            PageRequest::Unpaged { .. } => self.clone(),
        }
    }

    /// Same request pointing at `page`. There is no upper bound check.
    ///
    /// An unpaged request only accepts page zero, returning itself.
    pub fn with_page(&self, page: usize) -> PageResult<Self> {
        match self {
            PageRequest::Paged { size, sort, .. } => Ok(Self::of(page, *size, sort.clone())),
            PageRequest::Unpaged { .. } if page == 0 => Ok(self.clone()),
            PageRequest::Unpaged { .. } => Err(PageError::Unpaged),
        }
    }

    pub fn with_sort(&self, sort: Sort) -> Self {
        match self {
            PageRequest::Paged { page, size, .. } => Self::of(*page, *size, sort),
            PageRequest::Unpaged { .. } => Self::unpaged_sorted(sort),
        }
    }

    pub fn has_previous(&self) -> bool {
        matches!(self, PageRequest::Paged { page, .. } if *page > 0)
    }

    /// The page size as a limit, or unlimited for an unpaged request.
    pub fn to_limit(&self) -> Limit {
        match self {
            PageRequest::Paged { size, .. } => Limit::of(*size),
            PageRequest::Unpaged { .. } => Limit::UNLIMITED,
        }
    }

    pub fn to_scroll_position(&self) -> PageResult<OffsetScrollPosition> {
        self.offset().map(OffsetScrollPosition::of)
    }
}

impl std::fmt::Display for PageRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageRequest::Paged { page, size, sort } => {
                write!(f, "Page request [number: {page}, size: {size}, sort: {sort}]")
            }
            PageRequest::Unpaged { sort } => write!(f, "Unpaged request [sort: {sort}]"),
        }
    }
}
