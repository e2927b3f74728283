//! Completed check-ins and diary entries.

use chrono::{DateTime, Utc};

/// Upper bound of every check-in score.
const SCORE_MAX: i64 = 10;

/// Daily self-assessment, each score in `0..=10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckIn {
    /// humor
    pub mood: u8,
    /// fadiga
    pub fatigue: u8,
    /// dor
    pub pain: u8,
    /// sono
    pub sleep: u8,
    pub recorded_at: DateTime<Utc>,
}

impl CheckIn {
    /// Build a check-in from raw scores in the order mood, fatigue, pain,
    /// sleep, clamping each into `0..=10`.
    #[must_use]
    pub fn clamped(scores: [i64; 4]) -> Self {
        let [mood, fatigue, pain, sleep] = scores.map(clamp_score);
        Self {
            mood,
            fatigue,
            pain,
            sleep,
            recorded_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn scores(&self) -> [u8; 4] {
        [self.mood, self.fatigue, self.pain, self.sleep]
    }
}

fn clamp_score(value: i64) -> u8 {
    // Clamped into 0..=10, so the conversion cannot fail.
    u8::try_from(value.clamp(0, SCORE_MAX)).unwrap_or(0)
}

/// Answers to the two diary questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    /// pesou: what weighed on the day
    pub weighed: String,
    /// ajudou: what helped
    pub helped: String,
    pub recorded_at: DateTime<Utc>,
}

impl DiaryEntry {
    #[must_use]
    pub fn new(weighed: String, helped: String) -> Self {
        Self {
            weighed,
            helped,
            recorded_at: Utc::now(),
        }
    }
}

/// Append-only log, oldest first.
#[derive(Debug, Clone)]
pub struct RecordLog<T> {
    entries: Vec<T>,
}

impl<T> RecordLog<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn append(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// The last `n` entries, oldest first.
    #[must_use]
    pub fn last_n(&self, n: usize) -> &[T] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for RecordLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
