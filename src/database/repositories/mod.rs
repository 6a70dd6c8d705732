pub mod shift;

// Re-export all repositories for easy importing
pub use shift::{PgShiftRepository, SampleShiftRepository, ShiftRepository, validate_shift_set};
