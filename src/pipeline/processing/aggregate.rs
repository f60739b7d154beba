use std::collections::BTreeSet;

use crate::domain::{ScheduleEntry, ScheduleSet};

/// Collects a cell's entries, keeping source order and duplicates, and derives
/// the `days` summary: distinct canonical codes, sorted, space-joined.
pub fn aggregate<I>(entries: I) -> ScheduleSet
where
    I: IntoIterator<Item = ScheduleEntry>,
{
    let entries: Vec<ScheduleEntry> = entries.into_iter().collect();
    let days = days_summary(&entries);
    ScheduleSet::from_parts(entries, days)
}

pub fn days_summary(entries: &[ScheduleEntry]) -> String {
    entries
        .iter()
        .map(|e| e.day.code())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, DayCode, Meridiem};

    fn entry(day: DayCode) -> ScheduleEntry {
        ScheduleEntry {
            day,
            time_start: ClockTime::new(9, 0),
            time_start_meridiem: Meridiem::Am,
            time_end: ClockTime::new(10, 0),
            time_end_meridiem: Meridiem::Am,
        }
    }

    #[test]
    fn test_days_are_sorted_and_deduplicated() {
        let set = aggregate(vec![
            entry(DayCode::Thursday),
            entry(DayCode::Tuesday),
            entry(DayCode::Thursday),
        ]);
        assert_eq!(set.days(), "T Th");
        assert_eq!(set.entries().len(), 3);
    }

    #[test]
    fn test_order_is_by_code_string() {
        let set = aggregate(vec![
            entry(DayCode::Wednesday),
            entry(DayCode::Sunday),
            entry(DayCode::Monday),
            entry(DayCode::Saturday),
            entry(DayCode::Friday),
        ]);
        assert_eq!(set.days(), "F M S Su W");
    }

    #[test]
    fn test_entry_order_is_source_order() {
        let set = aggregate(vec![entry(DayCode::Friday), entry(DayCode::Monday)]);
        assert_eq!(set.entries()[0].day, DayCode::Friday);
        assert_eq!(set.entries()[1].day, DayCode::Monday);
    }

    #[test]
    fn test_empty() {
        let set = aggregate(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.days(), "");
    }
}
