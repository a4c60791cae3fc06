use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised by page requests, sort parsing and query resolution.
#[derive(Error, Debug)]
pub enum PageError {
    /// Page number, size, offset or scroll position requested on an unpaged request.
    #[error("request is unpaged")]
    Unpaged,

    /// Numeric maximum requested on an unlimited `Limit`.
    #[error("limit is unlimited")]
    Unlimited,

    /// `previous()` called on a request that already refers to the first page.
    #[error("no previous page: request already refers to the first page")]
    NoPreviousPage,

    #[error("invalid direction: value {0:?}")]
    InvalidDirection(String),

    #[error("invalid null handling: value {0:?}")]
    InvalidNullHandling(String),

    /// Empty or malformed order clause.
    #[error("cannot parse order: {0}")]
    OrderParse(String),

    #[error("invalid value {value:?} for query parameter {param:?}: {source}")]
    InvalidNumber {
        param: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),
}

pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_errors_name_the_raw_text() {
        let err = PageError::InvalidDirection("sideways".into());
        assert!(err.to_string().contains("sideways"));

        let err = PageError::InvalidNullHandling("nulls_middle".into());
        assert!(err.to_string().contains("nulls_middle"));
    }

    #[test]
    fn test_invalid_number_keeps_source() {
        let source = "foo".parse::<usize>().unwrap_err();
        let err = PageError::InvalidNumber {
            param: "page".into(),
            value: "foo".into(),
            source,
        };
        let msg = err.to_string();
        assert!(msg.contains("page") && msg.contains("foo"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
