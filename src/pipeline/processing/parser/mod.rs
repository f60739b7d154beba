//! Day + time-range grammar over the token stream of one clause.
//!
//! ```text
//! range    := WORD TIME meridiem? DASH TIME meridiem?
//! meridiem := AM | PM
//! ```
//!
//! `WORD` is the day-code group, expanded with [`expand_days`]. Matches are
//! found left to right and never overlap; tokens that cannot start a match are
//! skipped.

pub mod lexer;

pub use lexer::{tokenize, Token, TokenKind};

use std::ops::Range;
use tracing::trace;

use super::days::expand_days;
use crate::domain::{ClockTime, DayCode, Meridiem, ScheduleEntry};

/// One grammar match, before it is fanned out per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMatch {
    pub days: Vec<DayCode>,
    pub start: ClockTime,
    pub start_meridiem: Meridiem,
    pub end: ClockTime,
    pub end_meridiem: Meridiem,
    /// Token indices covered by the match.
    pub tokens: Range<usize>,
}

impl RangeMatch {
    /// One entry per day, all sharing this match's range.
    pub fn entries(&self) -> impl Iterator<Item = ScheduleEntry> + '_ {
        self.days.iter().map(move |&day| ScheduleEntry {
            day,
            time_start: self.start,
            time_start_meridiem: self.start_meridiem,
            time_end: self.end,
            time_end_meridiem: self.end_meridiem,
        })
    }
}

/// Parses every day/time range in `clause` into entries, in source order.
/// A clause with no match yields an empty vector.
pub fn extract_entries(clause: &str) -> Vec<ScheduleEntry> {
    let tokens = tokenize(clause);
    let matches = find_ranges(&tokens);
    trace!(clause, matches = matches.len(), "extracted ranges");
    matches.iter().flat_map(|m| m.entries()).collect()
}

/// All non-overlapping matches in the token stream.
pub fn find_ranges(tokens: &[Token]) -> Vec<RangeMatch> {
    let mut found = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match parse_range_at(tokens, i) {
            Some(m) => {
                i = m.tokens.end;
                found.push(m);
            }
            None => i += 1,
        }
    }
    found
}

/// Tries the grammar starting exactly at token `at`.
pub fn parse_range_at(tokens: &[Token], at: usize) -> Option<RangeMatch> {
    let mut cursor = Cursor { tokens, pos: at };

    let day_token = cursor.word()?;
    let start = cursor.time()?;
    let start_meridiem = cursor.meridiem();
    cursor.dash()?;
    let end = cursor.time()?;
    let end_meridiem = cursor.meridiem();

    let (start_meridiem, end_meridiem) = inherit_meridiem(start_meridiem, end_meridiem);
    Some(RangeMatch {
        days: expand_days(day_token),
        start,
        start_meridiem,
        end,
        end_meridiem,
        tokens: at..cursor.pos,
    })
}

/// Fills a missing side from the side that has one. Both missing stays
/// unknown; nothing is guessed.
pub fn inherit_meridiem(start: Meridiem, end: Meridiem) -> (Meridiem, Meridiem) {
    match (start, end) {
        (Meridiem::Unknown, known) if known.is_known() => (known, known),
        (known, Meridiem::Unknown) if known.is_known() => (known, known),
        pair => pair,
    }
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn word(&mut self) -> Option<&'a str> {
        match self.peek()? {
            TokenKind::Word(w) => {
                self.pos += 1;
                Some(w.as_str())
            }
            _ => None,
        }
    }

    fn time(&mut self) -> Option<ClockTime> {
        match self.peek()? {
            TokenKind::Time(t) => {
                self.pos += 1;
                Some(*t)
            }
            _ => None,
        }
    }

    fn meridiem(&mut self) -> Meridiem {
        match self.peek() {
            Some(TokenKind::Meridiem(m)) => {
                self.pos += 1;
                *m
            }
            _ => Meridiem::Unknown,
        }
    }

    fn dash(&mut self) -> Option<()> {
        match self.peek()? {
            TokenKind::Dash => {
                self.pos += 1;
                Some(())
            }
            _ => None,
        }
    }
}
