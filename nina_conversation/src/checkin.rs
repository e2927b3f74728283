//! Parsing of check-in answers.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Number of scores in a check-in: mood, fatigue, pain, sleep.
const SCORE_COUNT: usize = 4;

static SEPARATOR: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn separator() -> &'static Regex {
    SEPARATOR.get_or_init(|| {
        Regex::new(r"[\s,]+").expect("Static regex pattern is guaranteed to be valid")
    })
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckinParseError {
    #[error("expected 4 numbers, got {0}")]
    WrongCount(usize),

    #[error("not an integer: {0}")]
    NotANumber(String),
}

/// Parse four integers separated by spaces and/or commas.
///
/// Values are returned as written; clamping happens when the check-in is
/// built.
pub fn parse_scores(text: &str) -> Result<[i64; 4], CheckinParseError> {
    let tokens: Vec<&str> = separator()
        .split(text.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() != SCORE_COUNT {
        return Err(CheckinParseError::WrongCount(tokens.len()));
    }

    let mut scores = [0_i64; SCORE_COUNT];
    for (slot, token) in scores.iter_mut().zip(&tokens) {
        *slot = token
            .parse()
            .map_err(|_| CheckinParseError::NotANumber((*token).to_string()))?;
    }
    Ok(scores)
}
