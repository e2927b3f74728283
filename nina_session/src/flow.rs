//! Structured multi-turn flows.

/// Which structured flow, if any, the next message continues.
///
/// Only one flow is active per chat. Starting a new one replaces whatever
/// was in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    /// Waiting for the four check-in numbers.
    AwaitingCheckin,
    Diary(DiaryStep),
}

/// Progress through the two diary questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiaryStep {
    /// Waiting for "what weighed on your day".
    Weighed,
    /// Waiting for "what helped today"; carries the first answer.
    Helped { weighed: String },
}

impl FlowState {
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Short label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingCheckin => "awaiting-checkin",
            Self::Diary(DiaryStep::Weighed) => "diary-step-1",
            Self::Diary(DiaryStep::Helped { .. }) => "diary-step-2",
        }
    }
}
