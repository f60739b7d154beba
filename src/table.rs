//! Mapping of extracted table rows onto course records.
//!
//! Rows arrive as plain cell strings from the table-extraction step. Only the
//! two schedule cells are interpreted; every other field is passed through
//! with light whitespace cleanup.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::domain::ScheduleSet;
use crate::pipeline::parse_schedule;

static ORDINAL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Column index of every field in a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub schedule_id: usize,
    pub subject_code: usize,
    pub subject: usize,
    pub subject_credit: usize,
    pub faculty_credit: usize,
    pub college_code: usize,
    pub hr_per_week: usize,
    pub hr_per_sem: usize,
    pub section: usize,
    pub schedule_days: usize,
    pub schedule_times: usize,
    pub room: usize,
    pub total_students: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            schedule_id: COL_SCHEDULE_ID,
            subject_code: COL_SUBJECT_CODE,
            subject: COL_SUBJECT,
            subject_credit: COL_SUBJECT_CREDIT,
            faculty_credit: COL_FACULTY_CREDIT,
            college_code: COL_COLLEGE_CODE,
            hr_per_week: COL_HR_PER_WEEK,
            hr_per_sem: COL_HR_PER_SEM,
            section: COL_SECTION,
            schedule_days: COL_SCHEDULE_DAYS,
            schedule_times: COL_SCHEDULE_TIMES,
            room: COL_ROOM,
            total_students: COL_TOTAL_STUDENTS,
        }
    }
}

/// One course line of the load document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRecord {
    pub schedule_id: String,
    pub subject_code: String,
    pub subject: String,
    pub subject_credit: String,
    pub faculty_credit: String,
    pub college_code: String,
    pub hr_per_week: String,
    pub hr_per_sem: String,
    pub section: String,
    #[serde(flatten)]
    pub schedule: ScheduleSet,
    pub room: String,
    pub total_students: String,
}

/// Totals carried verbatim from a non-course row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total_subject_credit: String,
    pub total_faculty_credit: String,
    pub all_total_students: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Course(Box<CourseRecord>),
    Totals(Totals),
}

/// Read-only view of one row; out-of-range cells read as empty.
struct Cells<'a>(&'a [String]);

impl<'a> Cells<'a> {
    fn raw(&self, index: usize) -> &'a str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    fn trimmed(&self, index: usize) -> String {
        self.raw(index).trim().to_string()
    }

    fn single_line(&self, index: usize) -> String {
        self.raw(index).replace('\n', " ")
    }
}

impl TableRow {
    /// Classifies and maps a row. A row is a course row when its id,
    /// subject-code and subject cells are all non-blank.
    pub fn from_cells(row: &[String], layout: &ColumnLayout) -> Self {
        let cells = Cells(row);
        let is_course = [layout.schedule_id, layout.subject_code, layout.subject]
            .iter()
            .all(|&i| !cells.raw(i).trim().is_empty());

        if !is_course {
            return TableRow::Totals(Totals {
                total_subject_credit: cells.trimmed(layout.subject_credit),
                total_faculty_credit: cells.trimmed(layout.faculty_credit),
                all_total_students: cells.trimmed(layout.total_students),
            });
        }

        let schedule_text = combine_columns(
            cells.raw(layout.schedule_days),
            cells.raw(layout.schedule_times),
        );
        let schedule = parse_schedule(&schedule_text);

        TableRow::Course(Box::new(CourseRecord {
            schedule_id: ORDINAL_PREFIX
                .replace(&cells.trimmed(layout.schedule_id), "")
                .into_owned(),
            subject_code: cells.trimmed(layout.subject_code),
            subject: cells.single_line(layout.subject),
            subject_credit: cells.trimmed(layout.subject_credit),
            faculty_credit: cells.trimmed(layout.faculty_credit),
            college_code: cells.trimmed(layout.college_code),
            hr_per_week: cells.trimmed(layout.hr_per_week),
            hr_per_sem: cells.trimmed(layout.hr_per_sem),
            section: cells.trimmed(layout.section),
            schedule,
            room: cells.single_line(layout.room).trim().to_string(),
            total_students: cells.trimmed(layout.total_students),
        }))
    }
}

/// Joins two side-by-side cells line by line: line `i` of `left` is paired
/// with line `i` of `right`, the shorter cell padded with empty lines.
///
/// A days column `"MW\nF"` beside a times column
/// `"9:00 AM-10:00 AM\n1:00 PM-3:00 PM"` becomes
/// `"MW 9:00 AM-10:00 AM F 1:00 PM-3:00 PM"`.
pub fn combine_columns(left: &str, right: &str) -> String {
    let left = cell_lines(left);
    let right = cell_lines(right);
    let len = left.len().max(right.len());

    (0..len)
        .map(|i| {
            let l = left.get(i).copied().unwrap_or("");
            let r = right.get(i).copied().unwrap_or("");
            format!("{} {}", l, r).trim().to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn cell_lines(cell: &str) -> Vec<&str> {
    cell.trim().split('\n').filter(|line| !line.is_empty()).collect()
}
