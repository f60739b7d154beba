use crate::domain::{ClockTime, Meridiem};
use std::ops::Range;

/// Kind of a lexed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of letters, usually a day-code group.
    Word(String),
    Time(ClockTime),
    Meridiem(Meridiem),
    Dash,
    /// Anything else: bare numbers, punctuation, malformed times.
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range in the lexed text.
    pub span: Range<usize>,
}

impl Token {
    pub fn is_meridiem(&self) -> bool {
        matches!(self.kind, TokenKind::Meridiem(_))
    }

    /// True for a word whose first letter is uppercase, i.e. a plausible start
    /// of a new day-code group.
    pub fn starts_capitalized_word(&self) -> bool {
        match &self.kind {
            TokenKind::Word(w) => w.chars().next().is_some_and(|c| c.is_uppercase()),
            _ => false,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Class {
    Space,
    Letter,
    Digit,
    Dash,
    Other,
}

fn classify(c: char) -> Class {
    if c.is_whitespace() {
        Class::Space
    } else if c.is_alphabetic() {
        Class::Letter
    } else if c.is_ascii_digit() || c == ':' {
        Class::Digit
    } else if matches!(c, '-' | '\u{2013}' | '\u{2014}') {
        Class::Dash
    } else {
        Class::Other
    }
}

/// Splits text into tokens. Letters and digits always begin new tokens, so
/// glued input such as `TTH9:30AM` still lexes as `TTH`, `9:30`, `AM`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let class = classify(c);
        if class == Class::Space {
            continue;
        }
        if class == Class::Dash {
            tokens.push(Token {
                kind: TokenKind::Dash,
                span: start..start + c.len_utf8(),
            });
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if classify(next) != class {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }

        let lexeme = &text[start..end];
        match class {
            Class::Letter => push_word(&mut tokens, lexeme, start),
            Class::Digit => tokens.push(Token {
                kind: ClockTime::parse(lexeme)
                    .map(TokenKind::Time)
                    .unwrap_or_else(|| TokenKind::Other(lexeme.to_string())),
                span: start..end,
            }),
            _ => tokens.push(Token {
                kind: TokenKind::Other(lexeme.to_string()),
                span: start..end,
            }),
        }
    }

    tokens
}

/// A word starting with `AM`/`PM` is a meridiem glued to whatever follows.
/// Neither `A` nor `P` is a day letter, so the split is unambiguous.
fn push_word(tokens: &mut Vec<Token>, word: &str, start: usize) {
    if let Some(prefix) = word.get(..2) {
        if let Some(meridiem) = Meridiem::parse(prefix) {
            tokens.push(Token {
                kind: TokenKind::Meridiem(meridiem),
                span: start..start + 2,
            });
            if word.len() > 2 {
                tokens.push(Token {
                    kind: TokenKind::Word(word[2..].to_string()),
                    span: start + 2..start + word.len(),
                });
            }
            return;
        }
    }
    tokens.push(Token {
        kind: TokenKind::Word(word.to_string()),
        span: start..start + word.len(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_canonical_clause() {
        assert_eq!(
            kinds("TTH 9:30 AM - 12:00 PM"),
            vec![
                TokenKind::Word("TTH".into()),
                TokenKind::Time(ClockTime::new(9, 30)),
                TokenKind::Meridiem(Meridiem::Am),
                TokenKind::Dash,
                TokenKind::Time(ClockTime::new(12, 0)),
                TokenKind::Meridiem(Meridiem::Pm),
            ]
        );
    }

    #[test]
    fn test_glued_input() {
        assert_eq!(
            kinds("MWF8:00am-9:00pmS"),
            vec![
                TokenKind::Word("MWF".into()),
                TokenKind::Time(ClockTime::new(8, 0)),
                TokenKind::Meridiem(Meridiem::Am),
                TokenKind::Dash,
                TokenKind::Time(ClockTime::new(9, 0)),
                TokenKind::Meridiem(Meridiem::Pm),
                TokenKind::Word("S".into()),
            ]
        );
    }

    #[test]
    fn test_spans_index_source_text() {
        let text = "M 9:00 AM";
        let tokens = tokenize(text);
        assert_eq!(&text[tokens[1].span.clone()], "9:00");
        assert_eq!(&text[tokens[2].span.clone()], "AM");
    }

    #[test]
    fn test_non_times_are_other() {
        assert_eq!(
            kinds("Rm 301, 9"),
            vec![
                TokenKind::Word("Rm".into()),
                TokenKind::Other("301".into()),
                TokenKind::Other(",".into()),
                TokenKind::Other("9".into()),
            ]
        );
    }

    #[test]
    fn test_unicode_does_not_panic() {
        let tokens = tokenize("Ü 9:00 – 10:00 ☃");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Time(ClockTime::new(9, 0))));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Dash));
    }
}
