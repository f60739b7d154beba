/// Defaults shared by configuration, table mapping and the CLI.
/// These mirror the layout of the course-load documents the tool was built for.

// Configuration
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["pdf"];
pub const DEFAULT_WORKERS: usize = 4;

// Logging
pub const LOG_FILE_PREFIX: &str = "course_load.log";
pub const DEFAULT_LOG_DIRECTIVE: &str = "course_load=info";

// Column indices of a course-load table row
pub const COL_SCHEDULE_ID: usize = 1;
pub const COL_SUBJECT_CODE: usize = 2;
pub const COL_SUBJECT: usize = 3;
pub const COL_SUBJECT_CREDIT: usize = 4;
pub const COL_FACULTY_CREDIT: usize = 5;
pub const COL_COLLEGE_CODE: usize = 6;
pub const COL_HR_PER_WEEK: usize = 7;
pub const COL_HR_PER_SEM: usize = 8;
pub const COL_SECTION: usize = 9;
pub const COL_SCHEDULE_DAYS: usize = 10;
pub const COL_SCHEDULE_TIMES: usize = 11;
pub const COL_ROOM: usize = 12;
pub const COL_TOTAL_STUDENTS: usize = 13;
