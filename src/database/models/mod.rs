pub(crate) mod macros;

pub mod dashboard;
pub mod notification;
pub mod shift;

// Re-export all models for easy importing
pub use dashboard::*;
pub use notification::*;
pub use shift::*;
