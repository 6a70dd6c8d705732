pub mod dashboard;
pub mod shared;
