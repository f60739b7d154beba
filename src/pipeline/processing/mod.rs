// Schedule processing stages, composed left to right by `pipeline::parse_schedule`

pub mod aggregate;
pub mod days;
pub mod normalize;
pub mod parser;
pub mod segment;

pub use aggregate::aggregate;
pub use days::expand_days;
pub use normalize::normalize;
pub use parser::extract_entries;
pub use segment::{segment, ScheduleClause};
