//! Schedule pipeline metrics
//!
//! Counters recorded through the `metrics` facade. Nothing is exported unless
//! the embedding application installs a recorder.

use crate::domain::ScheduleEntry;

/// Naming convention: `course_load_<phase>_<name>`
macro_rules! schedule_metric {
    ($name:literal) => {
        concat!("course_load_schedule_", $name)
    };
}

pub struct ScheduleMetrics;

impl ScheduleMetrics {
    /// Record one parsed cell
    pub fn record_cell(clauses: usize, entries: &[ScheduleEntry]) {
        ::metrics::counter!(schedule_metric!("cells_parsed")).increment(1);
        ::metrics::counter!(schedule_metric!("clauses")).increment(clauses as u64);
        ::metrics::counter!(schedule_metric!("entries")).increment(entries.len() as u64);
        if entries.is_empty() {
            ::metrics::counter!(schedule_metric!("empty_cells")).increment(1);
        }
        let unknown = entries.iter().filter(|e| !e.day.is_known()).count();
        if unknown > 0 {
            ::metrics::counter!(schedule_metric!("unknown_days")).increment(unknown as u64);
        }
    }

    /// Record a finished report
    pub fn record_report(rows: usize, courses: usize, duration_secs: f64) {
        ::metrics::counter!("course_load_report_rows").increment(rows as u64);
        ::metrics::counter!("course_load_report_courses").increment(courses as u64);
        ::metrics::histogram!("course_load_report_duration_seconds").record(duration_secs);
    }

    #[cfg(test)]
    fn names() -> Vec<&'static str> {
        vec![
            schedule_metric!("cells_parsed"),
            schedule_metric!("clauses"),
            schedule_metric!("entries"),
            schedule_metric!("empty_cells"),
            schedule_metric!("unknown_days"),
            "course_load_report_rows",
            "course_load_report_courses",
            "course_load_report_duration_seconds",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        ScheduleMetrics::record_cell(0, &[]);
        ScheduleMetrics::record_report(0, 0, 0.0);
    }

    #[test]
    fn test_metric_names() {
        for name in ScheduleMetrics::names() {
            assert!(name.starts_with("course_load_"));
        }
    }
}
