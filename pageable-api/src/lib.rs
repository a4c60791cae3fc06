pub mod config;
pub mod error;
pub mod query;

pub use config::*;
pub use error::*;
pub use query::*;
