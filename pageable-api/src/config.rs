use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::PageResult;

pub const DEFAULT_PAGE_PARAM: &str = "page";
pub const DEFAULT_SIZE_PARAM: &str = "size";
pub const DEFAULT_SORT_PARAM: &str = "sort";
pub const DEFAULT_PAGE: usize = 0;
pub const DEFAULT_SIZE: usize = 10;

/// Parameter names and fallback values used when resolving a page request
/// from query parameters.
///
/// Values absent from the query fall back to the defaults held here; malformed
/// values never do.
///
/// # Example
/// ```
/// use pageable_api::config::PageableConfig;
///
/// let config = PageableConfig::default()
///     .with_page_param("p")
///     .unwrap()
///     .with_default_size(50);
/// assert_eq!(config.page_param, "p");
/// assert_eq!(config.default_size, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PageableConfig {
    /// Name of the page number parameter
    #[validate(custom(function = "not_blank"))]
    pub page_param: String,
    /// Name of the page size parameter
    #[validate(custom(function = "not_blank"))]
    pub size_param: String,
    /// Name of the (multi-valued) sort parameter
    #[validate(custom(function = "not_blank"))]
    pub sort_param: String,
    pub default_page: usize,
    pub default_size: usize,
    /// Order clauses in their textual form, e.g. `"name,desc"`
    pub default_sort: Vec<String>,
}

impl Default for PageableConfig {
    fn default() -> Self {
        Self {
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            size_param: DEFAULT_SIZE_PARAM.to_string(),
            sort_param: DEFAULT_SORT_PARAM.to_string(),
            default_page: DEFAULT_PAGE,
            default_size: DEFAULT_SIZE,
            default_sort: Vec::new(),
        }
    }
}

impl PageableConfig {
    /// Replace the page parameter name. Surrounding whitespace is trimmed and
    /// a blank name is rejected.
    pub fn with_page_param(mut self, param: impl AsRef<str>) -> PageResult<Self> {
        self.page_param = param.as_ref().trim().to_string();
        self.validate()?;
        Ok(self)
    }

    /// Replace the size parameter name. Surrounding whitespace is trimmed and
    /// a blank name is rejected.
    pub fn with_size_param(mut self, param: impl AsRef<str>) -> PageResult<Self> {
        self.size_param = param.as_ref().trim().to_string();
        self.validate()?;
        Ok(self)
    }

    /// Replace the sort parameter name. Surrounding whitespace is trimmed and
    /// a blank name is rejected.
    pub fn with_sort_param(mut self, param: impl AsRef<str>) -> PageResult<Self> {
        self.sort_param = param.as_ref().trim().to_string();
        self.validate()?;
        Ok(self)
    }

    pub fn with_default_page(mut self, page: usize) -> Self {
        self.default_page = page;
        self
    }

    pub fn with_default_size(mut self, size: usize) -> Self {
        self.default_size = size;
        self
    }

    pub fn with_default_sort<I, S>(mut self, clauses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_sort = clauses.into_iter().map(Into::into).collect();
        self
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
