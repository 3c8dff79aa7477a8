pub mod backup;
pub mod calculator;
pub mod del;
pub mod log;
pub mod logic;
pub mod punch;
