pub mod models;
pub mod pagination;

// Re-exports
pub use pageable_api::{PageError, PageResult, PageableConfig, QuerySource};
