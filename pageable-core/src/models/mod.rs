pub mod direction;
pub mod limit;
pub mod null_handling;
pub mod order;
pub mod scroll_position;
pub mod sort;

// Re-exports
pub use direction::*;
pub use limit::*;
pub use null_handling::*;
pub use order::*;
pub use scroll_position::*;
pub use sort::*;
