//! Spacing and delimiter repair for schedule text.
//!
//! Every rewrite here is local and total: text that does not look like a
//! schedule comes back with only its whitespace and dashes tidied.
//! `normalize(normalize(x)) == normalize(x)` holds for all input.

use once_cell::sync::Lazy;
use regex::Regex;

use super::parser::{parse_range_at, tokenize, Token, TokenKind};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static MERIDIEM_THEN_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([AaPp][Mm])(\d)").unwrap());
static DIGIT_THEN_MERIDIEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)([AaPp][Mm])").unwrap());
static DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[-\x{2013}\x{2014}]\s*").unwrap());

/// Normalizes one schedule string.
///
/// When the whole string is a single `<DAYS> <TIME> [AM|PM] - <TIME> [AM|PM]`
/// clause it is rendered canonically as `TTH 9:30 AM - 12:00 PM`; otherwise the
/// spacing-repaired text is returned as is.
pub fn normalize(text: &str) -> String {
    let repaired = repair_spacing(text);
    match canonical_clause(&repaired) {
        Some(canonical) => canonical,
        None => repaired,
    }
}

/// Whitespace collapse, meridiem separation, elided-dash recovery and dash
/// spacing, in that order.
pub fn repair_spacing(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let separated = MERIDIEM_THEN_DIGIT.replace_all(&collapsed, "$1 $2");
    let separated = DIGIT_THEN_MERIDIEM.replace_all(&separated, "$1 $2");
    let dashed = insert_elided_dashes(&separated);
    let spaced = DASH.replace_all(&dashed, " - ");
    WHITESPACE.replace_all(&spaced, " ").trim().to_string()
}

/// `9:30 AM 12:00 PM` becomes `9:30 AM-12:00 PM`: two adjacent times that both
/// carry a meridiem are read as a range whose dash was lost. A time that
/// already closes a range is never the start of another.
fn insert_elided_dashes(text: &str) -> String {
    let tokens = tokenize(text);
    let mut cuts: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;

    while i + 3 < tokens.len() {
        let follows_dash = i > 0 && tokens[i - 1].kind == TokenKind::Dash;
        let elided_range = is_time(&tokens[i])
            && tokens[i + 1].is_meridiem()
            && is_time(&tokens[i + 2])
            && tokens[i + 3].is_meridiem();
        if !follows_dash && elided_range {
            cuts.push((tokens[i + 1].span.end, tokens[i + 2].span.start));
            i += 4;
        } else {
            i += 1;
        }
    }

    if cuts.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + cuts.len());
    let mut last = 0;
    for (gap_start, gap_end) in cuts {
        out.push_str(&text[last..gap_start]);
        out.push('-');
        last = gap_end;
    }
    out.push_str(&text[last..]);
    out
}

fn is_time(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Time(_))
}

/// Renders `text` canonically if it is exactly one day/time clause.
fn canonical_clause(text: &str) -> Option<String> {
    let tokens = tokenize(text);
    let clause = parse_range_at(&tokens, 0)?;
    if clause.tokens.end != tokens.len() {
        return None;
    }

    let parts: Vec<String> = tokens
        .iter()
        .map(|t| match &t.kind {
            TokenKind::Word(w) => w.clone(),
            TokenKind::Time(time) => time.to_string(),
            TokenKind::Meridiem(m) => m.as_str().unwrap_or_default().to_string(),
            TokenKind::Dash => "-".to_string(),
            TokenKind::Other(o) => o.clone(),
        })
        .collect();
    Some(parts.join(" "))
}
