//! Cell text → [`ScheduleSet`].
//!
//! Normalizer → Segmenter → DayCodeExpander → TimeRangeExtractor → Aggregator.
//! Every stage is a pure function of its input, so cells can be processed in
//! any order and on any thread.

pub mod processing;

pub use processing::{aggregate, expand_days, extract_entries, normalize, segment, ScheduleClause};

use tracing::{debug, instrument};

use crate::domain::ScheduleSet;
use crate::metrics::ScheduleMetrics;

/// Parses one cell. Never fails: text without a recognizable schedule yields
/// an empty set.
#[instrument(level = "debug", skip_all)]
pub fn parse_schedule(raw: &str) -> ScheduleSet {
    let normalized = normalize(raw);
    let clauses = segment(&normalized);
    debug!(raw, clauses = clauses.len(), "segmented cell");

    let set = aggregate(clauses.iter().flat_map(|clause| extract_entries(clause.as_str())));
    ScheduleMetrics::record_cell(clauses.len(), set.entries());
    set
}
