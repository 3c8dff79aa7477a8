//! Time-accounting engine.
//!
//! Pure functions only: no I/O, no clock reads, no state kept between calls.
//! Inputs are a `DaySchedule` (or `DayRecord`s) plus a `WorkTimeConfig`;
//! outputs are freshly built value objects.

pub mod bank;
pub mod daily;
pub mod period;
pub mod remaining;
pub mod state;

pub use bank::bank_hours;
pub use daily::calculate_work_time;
pub use period::{monthly_stats, period_stats};
pub use remaining::estimate_remaining;
pub use state::derive_status;
