use anyhow::Result;
use course_load::config::Config;
use course_load::error::CourseLoadError;
use course_load::report::{build_report, read_rows, LoadReport};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_rows(value: serde_json::Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{}", value)?;
    Ok(file)
}

#[tokio::test]
async fn test_rows_file_to_report() -> Result<()> {
    let file = write_rows(json!([
        [
            "", "No.", "Code", "Subject", "Units", "Load", "College", "Hr/Wk", "Hr/Sem",
            "Section", "Days", "Time", "Room", "Students"
        ],
        [
            "", "1. 2201", "IT 211", "Data\nStructures", "3", "3", "CCS", "5", "90", "BSIT 2A",
            "TTH\nS", "9:30AM-12:00PM\n7:30-10:00 AM", "CL 3", "38"
        ],
        [
            "", "2. 2202", "IT 212", "Networks", "3", "3", "CCS", "3", "54", "BSIT 2B",
            "", "M 1:00 PM-4:00 PM W 1:00 PM-2:00 PM", "CL 1", "41"
        ],
        [
            "", "3. 2203", "NSTP", "Civic Welfare", "3", "0", "CAS", "3", "54", "A", "TBA",
            "", "", "50"
        ],
        ["", "", "", "", "9", "6", "", "", "", "", "", "", "", "129"]
    ]))?;

    let rows = read_rows(file.path())?;
    let config = Config::default();
    let report = build_report(rows, config.columns.clone(), config.extraction.workers).await?;

    assert_eq!(report.schedule.len(), 3);
    assert_eq!(report.total_subject_credit, "9");
    assert_eq!(report.total_faculty_credit, "6");
    assert_eq!(report.all_total_students, "129");

    let ds = &report.schedule[0];
    assert_eq!(ds.schedule_id, "2201");
    assert_eq!(ds.subject, "Data Structures");
    assert_eq!(ds.schedule.entries().len(), 3);
    assert_eq!(ds.schedule.days(), "S T Th");

    let networks = &report.schedule[1];
    assert_eq!(networks.schedule.days(), "M W");

    let nstp = &report.schedule[2];
    assert!(nstp.schedule.is_empty());
    assert_eq!(nstp.schedule.days(), "");

    let value = serde_json::to_value(&report)?;
    assert_eq!(value["schedule"][0]["schedule"][2]["day"], "S");
    assert_eq!(value["schedule"][0]["schedule"][2]["time_start_meridiem"], "AM");
    assert_eq!(value["schedule"][2]["schedule"], json!([]));
    Ok(())
}

#[tokio::test]
async fn test_parallel_report_keeps_row_order() -> Result<()> {
    let mut rows = vec![vec![String::new(); 14]];
    for i in 0..50 {
        let mut row = vec![String::new(); 14];
        row[1] = format!("{}. {}", i + 1, 1000 + i);
        row[2] = format!("C{}", i);
        row[3] = "Subject".to_string();
        row[10] = if i % 2 == 0 { "MWF".into() } else { "TTH".into() };
        row[11] = "8:00 AM - 9:00 AM".to_string();
        rows.push(row);
    }

    let sequential = LoadReport::from_rows(&rows, &Config::default().columns);
    let parallel = build_report(rows, Config::default().columns, 7).await?;
    assert_eq!(parallel, sequential);
    let ids: Vec<&str> = parallel.schedule.iter().map(|c| c.schedule_id.as_str()).collect();
    assert_eq!(ids.first(), Some(&"1000"));
    assert_eq!(ids.last(), Some(&"1049"));
    Ok(())
}

#[test]
fn test_read_rows_rejects_malformed_json() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{{\"not\": \"rows\"}}")?;
    assert!(matches!(read_rows(file.path()), Err(CourseLoadError::Json(_))));
    assert!(matches!(read_rows("/nonexistent/rows.json"), Err(CourseLoadError::Io(_))));
    Ok(())
}
