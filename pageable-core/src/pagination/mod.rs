pub mod page;
pub mod request;
mod resolve;
pub mod slice;

// Re-exports
pub use page::*;
pub use request::*;
pub use slice::*;
