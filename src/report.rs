use serde::Serialize;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::error::{CourseLoadError, Result};
use crate::metrics::ScheduleMetrics;
use crate::table::{ColumnLayout, CourseRecord, TableRow, Totals};

/// Everything extracted from one course-load table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub total_subject_credit: String,
    pub total_faculty_credit: String,
    pub all_total_students: String,
    pub schedule: Vec<CourseRecord>,
}

impl LoadReport {
    /// Maps every row after the header, in order, on the current thread.
    pub fn from_rows(rows: &[Vec<String>], layout: &ColumnLayout) -> Self {
        let mapped = rows
            .iter()
            .skip(1)
            .map(|row| TableRow::from_cells(row, layout));
        Self::assemble(mapped)
    }

    /// Course rows are kept in order; totals come from the last non-course row.
    fn assemble<I: IntoIterator<Item = TableRow>>(rows: I) -> Self {
        let mut totals = Totals::default();
        let mut schedule = Vec::new();
        for row in rows {
            match row {
                TableRow::Course(course) => schedule.push(*course),
                TableRow::Totals(t) => totals = t,
            }
        }
        Self {
            total_subject_credit: totals.total_subject_credit,
            total_faculty_credit: totals.total_faculty_credit,
            all_total_students: totals.all_total_students,
            schedule,
        }
    }
}

/// Reads rows as emitted by the table-extraction step: a JSON array of rows,
/// each an array of cell strings.
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Same result as [`LoadReport::from_rows`], with rows split into contiguous
/// chunks and mapped on up to `workers` blocking tasks. Chunks are rejoined in
/// row order.
#[instrument(skip(rows, layout), fields(row_count = rows.len()))]
pub async fn build_report(
    rows: Vec<Vec<String>>,
    layout: ColumnLayout,
    workers: usize,
) -> Result<LoadReport> {
    let started = Instant::now();
    let body: Vec<Vec<String>> = rows.into_iter().skip(1).collect();
    let total = body.len();
    let chunk_size = total.div_ceil(workers.max(1)).max(1);

    let mut handles = Vec::new();
    let mut remaining = body.into_iter();
    loop {
        let chunk: Vec<Vec<String>> = remaining.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        let layout = layout.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            chunk
                .iter()
                .map(|row| TableRow::from_cells(row, &layout))
                .collect::<Vec<_>>()
        }));
    }
    debug!(tasks = handles.len(), chunk_size, "spawned row workers");

    let mut mapped = Vec::with_capacity(total);
    for handle in handles {
        let rows = handle
            .await
            .map_err(|e| CourseLoadError::Worker(e.to_string()))?;
        mapped.extend(rows);
    }

    let report = LoadReport::assemble(mapped);
    let elapsed = started.elapsed().as_secs_f64();
    ScheduleMetrics::record_report(total, report.schedule.len(), elapsed);
    info!(
        rows = total,
        courses = report.schedule.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "built load report"
    );
    Ok(report)
}
