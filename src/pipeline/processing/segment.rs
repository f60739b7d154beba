use std::fmt;
use tracing::debug;

use super::normalize::normalize;
use super::parser::{parse_range_at, tokenize, Token, TokenKind};

/// One day-group plus one time range, cut out of a cell and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleClause(String);

impl ScheduleClause {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScheduleClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a cell's text into independent clauses.
///
/// First cuts once at the earliest point where a meridiem is directly followed
/// by a capitalized word (the start of a second schedule). If that leaves a
/// single piece whose composite day code shares one time range, the piece is
/// rewritten as one clause per day. Pieces without any time are dropped.
pub fn segment(text: &str) -> Vec<ScheduleClause> {
    let pieces: Vec<String> = split_two_schedules(text)
        .into_iter()
        .map(normalize)
        .filter(|piece| {
            let keep = has_time(piece);
            if !keep && !piece.is_empty() {
                debug!(fragment = %piece, "dropping fragment without a time");
            }
            keep
        })
        .collect();

    if let [single] = pieces.as_slice() {
        if let Some(per_day) = split_same_time_days(single) {
            debug!(clause = %single, days = per_day.len(), "split shared time range per day");
            return per_day.into_iter().map(ScheduleClause).collect();
        }
    }

    pieces.into_iter().map(ScheduleClause).collect()
}

/// Cuts at the first `<AM|PM> <Capitalized>` boundary. At most two pieces.
pub fn split_two_schedules(text: &str) -> Vec<&str> {
    let tokens = tokenize(text);
    let boundary = tokens
        .windows(2)
        .find(|pair| pair[0].is_meridiem() && pair[1].starts_capitalized_word())
        .map(|pair| pair[0].span.end);

    match boundary {
        Some(cut) => {
            debug!(cut, "two schedules in one cell");
            vec![text[..cut].trim(), text[cut..].trim()]
        }
        None => vec![text.trim()],
    }
}

/// `MWF 8:00 AM - 9:00 AM` becomes `M 8:00 AM - 9:00 AM`, `W ...`, `F ...`.
/// Returns `None` unless the whole clause is one range over several days.
pub fn split_same_time_days(clause: &str) -> Option<Vec<String>> {
    let tokens = tokenize(clause);
    let range = parse_range_at(&tokens, 0)?;
    if range.tokens.end != tokens.len() || range.days.len() < 2 {
        return None;
    }

    let times = &clause[tokens.get(1)?.span.start..];
    Some(
        range
            .days
            .iter()
            .map(|day| normalize(&format!("{} {}", day.token(), times)))
            .collect(),
    )
}

fn has_time(text: &str) -> bool {
    tokenize(text).iter().any(|t: &Token| matches!(t.kind, TokenKind::Time(_)))
}
