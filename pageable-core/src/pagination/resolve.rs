use pageable_api::{PageError, PageResult, PageableConfig, QuerySource};
use tracing::{debug, trace};
use validator::Validate;

use crate::models::Sort;

use super::request::PageRequest;

impl PageRequest {
    /// Resolve a paged request from query parameters
    ///
    /// # Arguments
    /// * `query` - Source of the raw query parameter values
    /// * `config` - Parameter names and the defaults used when a parameter is missing
    ///
    /// Page and size parameters that are absent or empty take the configured
    /// defaults. When the sort parameter is present every value is parsed;
    /// otherwise the configured default sort is used. A malformed default sort
    /// fails the call either way.
    ///
    /// # Example
    /// ```
    /// use pageable_api::PageableConfig;
    /// use pageable_core::models::{Direction, Sort};
    /// use pageable_core::pagination::PageRequest;
    ///
    /// let query = vec![("page", "2"), ("size", "20"), ("sort", "name,desc")];
    /// let request = PageRequest::from_query(&query, &PageableConfig::default()).unwrap();
    /// assert_eq!(request, PageRequest::of(2, 20, Sort::by(Direction::Desc, ["name"])));
    /// ```
    pub fn from_query<Q>(query: &Q, config: &PageableConfig) -> PageResult<Self>
    where
        Q: QuerySource + ?Sized,
    {
        config.validate()?;
        let default_sort = Sort::parse(&config.default_sort)?;

        let page = number_param(query, &config.page_param, config.default_page)?;
        let size = number_param(query, &config.size_param, config.default_size)?;
        let sort = if query.has_param(&config.sort_param) {
            Sort::parse(query.param_values(&config.sort_param))?
        } else {
            trace!(param = %config.sort_param, "sort parameter absent, using default sort");
            default_sort
        };

        let request = PageRequest::of(page, size, sort);
        debug!(%request, "resolved page request from query");
        Ok(request)
    }
}

fn number_param<Q>(query: &Q, param: &str, default: usize) -> PageResult<usize>
where
    Q: QuerySource + ?Sized,
{
    match query.param(param) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|source| PageError::InvalidNumber {
            param: param.to_string(),
            value: value.to_string(),
            source,
        }),
    }
}
