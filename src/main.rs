use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use course_load::config::Config;
use course_load::constants::DEFAULT_CONFIG_PATH;
use course_load::error::CourseLoadError;
use course_load::logging;
use course_load::parse_schedule;
use course_load::report::{build_report, read_rows};

#[derive(Parser)]
#[command(name = "course-load")]
#[command(about = "Parse schedule cells of academic course-load tables")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write JSON logs to this directory, rotated daily
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse schedule cell texts and print one ScheduleSet per argument
    Parse {
        /// Raw cell texts
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Build a load report from extracted table rows
    Report {
        /// JSON array of rows, each an array of cell strings (first row is the header)
        #[arg(long)]
        rows: PathBuf,
        /// Name of the document the rows were extracted from; checked against
        /// the allowed extensions
        #[arg(long)]
        source_name: Option<String>,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Ok(Config::load(DEFAULT_CONFIG_PATH)?),
        None => Ok(Config::default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init_logging(cli.log_dir.as_deref(), cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse { text } => {
            let sets: Vec<_> = text.iter().map(|t| parse_schedule(t)).collect();
            let empty = sets.iter().filter(|s| s.is_empty()).count();
            if empty > 0 {
                warn!("{} of {} cells had no recognizable schedule", empty, sets.len());
            }
            let output = if sets.len() == 1 {
                serde_json::to_string_pretty(&sets[0])?
            } else {
                serde_json::to_string_pretty(&sets)?
            };
            println!("{}", output);
        }
        Commands::Report { rows, source_name } => {
            if let Some(name) = source_name.as_deref() {
                if !config.extraction.is_allowed_file(name) {
                    return Err(CourseLoadError::UnsupportedFile(name.to_string()).into());
                }
            }

            let table = read_rows(&rows)
                .with_context(|| format!("reading rows from {}", rows.display()))?;
            info!(path = %rows.display(), rows = table.len(), "loaded table rows");

            let report =
                build_report(table, config.columns.clone(), config.extraction.workers).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
