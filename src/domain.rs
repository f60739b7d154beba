//! Domain shapes produced by the schedule pipeline.
//!
//! Everything here is immutable once built: entries are created by the
//! extractor, and a [`ScheduleSet`] is only ever produced by the aggregator so
//! its `days` summary cannot drift from its entries.

use chrono::NaiveTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// A day of the week as written in a course-load document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCode {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    /// A letter in a day-code token that maps to no day. Kept so malformed
    /// source text stays visible downstream.
    Unknown(char),
}

impl DayCode {
    /// Canonical external code. Thursday and Sunday use two letters to stay
    /// distinct from Tuesday and Saturday.
    pub fn code(&self) -> String {
        match self {
            DayCode::Monday => "M".to_string(),
            DayCode::Tuesday => "T".to_string(),
            DayCode::Wednesday => "W".to_string(),
            DayCode::Thursday => "Th".to_string(),
            DayCode::Friday => "F".to_string(),
            DayCode::Saturday => "S".to_string(),
            DayCode::Sunday => "Su".to_string(),
            DayCode::Unknown(c) => c.to_string(),
        }
    }

    /// Spelling that expands back to exactly this day. Used when a composite
    /// day token is rewritten as one clause per day.
    pub fn token(&self) -> String {
        match self {
            DayCode::Thursday => "TH".to_string(),
            DayCode::Sunday => "U".to_string(),
            other => other.code(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DayCode::Unknown(_))
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl Serialize for DayCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

/// AM/PM designator of a 12-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Meridiem {
    Am,
    Pm,
    /// Absent in the source and not inheritable from the other side of the range.
    #[default]
    Unknown,
}

impl Meridiem {
    /// Case-insensitive `AM`/`PM`; anything else is `None`.
    pub fn parse(text: &str) -> Option<Self> {
        if text.eq_ignore_ascii_case("am") {
            Some(Meridiem::Am)
        } else if text.eq_ignore_ascii_case("pm") {
            Some(Meridiem::Pm)
        } else {
            None
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Meridiem::Unknown
    }

    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Meridiem::Am => Some("AM"),
            Meridiem::Pm => Some("PM"),
            Meridiem::Unknown => None,
        }
    }
}

impl Serialize for Meridiem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_none(),
        }
    }
}

/// A 12-hour wall-clock reading exactly as it appeared (`H:MM`), not yet
/// resolved against a meridiem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    /// Parses `H:MM` or `HH:MM`. Values are not range-checked.
    pub fn parse(text: &str) -> Option<Self> {
        let (h, m) = text.split_once(':')?;
        if h.is_empty()
            || h.len() > 2
            || m.len() != 2
            || !h.bytes().all(|b| b.is_ascii_digit())
            || !m.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        Some(Self::new(h.parse().ok()?, m.parse().ok()?))
    }

    /// Resolves to a 24-hour time. `None` when the meridiem is unknown or the
    /// reading is not a valid 12-hour time.
    pub fn to_naive_time(&self, meridiem: Meridiem) -> Option<NaiveTime> {
        if !(1..=12).contains(&self.hour) {
            return None;
        }
        let hour = match meridiem {
            Meridiem::Am if self.hour == 12 => 0,
            Meridiem::Am => self.hour,
            Meridiem::Pm if self.hour == 12 => 12,
            Meridiem::Pm => self.hour + 12,
            Meridiem::Unknown => return None,
        };
        NaiveTime::from_hms_opt(hour.into(), self.minute.into(), 0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One day's occurrence of a parsed time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub day: DayCode,
    pub time_start: ClockTime,
    pub time_start_meridiem: Meridiem,
    pub time_end: ClockTime,
    pub time_end_meridiem: Meridiem,
}

impl ScheduleEntry {
    /// Start and end as 24-hour times, when both meridiems are known.
    pub fn naive_range(&self) -> Option<(NaiveTime, NaiveTime)> {
        Some((
            self.time_start.to_naive_time(self.time_start_meridiem)?,
            self.time_end.to_naive_time(self.time_end_meridiem)?,
        ))
    }
}

/// Everything parsed out of one table cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScheduleSet {
    #[serde(rename = "schedule")]
    entries: Vec<ScheduleEntry>,
    days: String,
}

impl ScheduleSet {
    pub(crate) fn from_parts(entries: Vec<ScheduleEntry>, days: String) -> Self {
        Self { entries, days }
    }

    /// Entries in source order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Sorted, space-joined canonical codes of the distinct days present.
    pub fn days(&self) -> &str {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_tokens_round_trip_to_codes() {
        assert_eq!(DayCode::Thursday.code(), "Th");
        assert_eq!(DayCode::Thursday.token(), "TH");
        assert_eq!(DayCode::Sunday.code(), "Su");
        assert_eq!(DayCode::Sunday.token(), "U");
        assert_eq!(DayCode::Unknown('X').code(), "X");
    }

    #[test]
    fn test_clock_time_parse() {
        assert_eq!(ClockTime::parse("9:30"), Some(ClockTime::new(9, 30)));
        assert_eq!(ClockTime::parse("12:05"), Some(ClockTime::new(12, 5)));
        assert_eq!(ClockTime::parse("123:00"), None);
        assert_eq!(ClockTime::parse("9:3"), None);
        assert_eq!(ClockTime::parse(":30"), None);
        assert_eq!(ClockTime::new(7, 5).to_string(), "7:05");
    }

    #[test]
    fn test_to_naive_time() {
        let noon = ClockTime::new(12, 0);
        assert_eq!(noon.to_naive_time(Meridiem::Pm), NaiveTime::from_hms_opt(12, 0, 0));
        assert_eq!(noon.to_naive_time(Meridiem::Am), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(
            ClockTime::new(1, 30).to_naive_time(Meridiem::Pm),
            NaiveTime::from_hms_opt(13, 30, 0)
        );
        assert_eq!(noon.to_naive_time(Meridiem::Unknown), None);
        assert_eq!(ClockTime::new(13, 0).to_naive_time(Meridiem::Pm), None);
    }

    #[test]
    fn test_naive_range_needs_both_meridiems() {
        let mut entry = ScheduleEntry {
            day: DayCode::Friday,
            time_start: ClockTime::new(11, 0),
            time_start_meridiem: Meridiem::Am,
            time_end: ClockTime::new(1, 30),
            time_end_meridiem: Meridiem::Pm,
        };
        assert_eq!(
            entry.naive_range(),
            Some((
                NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(13, 30, 0).unwrap()
            ))
        );
        entry.time_end_meridiem = Meridiem::Unknown;
        assert_eq!(entry.naive_range(), None);
    }

    #[test]
    fn test_entry_serialization() {
        let entry = ScheduleEntry {
            day: DayCode::Thursday,
            time_start: ClockTime::new(9, 30),
            time_start_meridiem: Meridiem::Am,
            time_end: ClockTime::new(12, 0),
            time_end_meridiem: Meridiem::Unknown,
        };
        let value = serde_json::to_value(entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "day": "Th",
                "time_start": "9:30",
                "time_start_meridiem": "AM",
                "time_end": "12:00",
                "time_end_meridiem": null
            })
        );
    }
}
