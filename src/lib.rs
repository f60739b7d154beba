pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod table;

pub use domain::{ClockTime, DayCode, Meridiem, ScheduleEntry, ScheduleSet};
pub use pipeline::parse_schedule;
