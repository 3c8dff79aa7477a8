pub mod day_record;
pub mod day_schedule;
pub mod day_status;
pub mod day_summary;
pub mod punch;
pub mod punch_type;
pub mod summaries;
pub mod work_time;
