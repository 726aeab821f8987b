use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum ChallengeError {
    #[error("unknown participant {0:?}")]
    UnknownParticipant(String),
    #[error("steps must be greater than 0")]
    ZeroSteps,
    #[error("{steps} steps in one week is more than the {max} allowed")]
    TooManySteps { steps: u64, max: u64 },
    #[error("week ends ({week_end}) before it starts ({week_start})")]
    InvertedWeek {
        week_start: NaiveDate,
        week_end: NaiveDate,
    },
    #[error("{name} has no entry at index {index} ({len} entries)")]
    EntryOutOfRange {
        name: String,
        index: usize,
        len: usize,
    },
    #[error("invalid backup: {0}")]
    InvalidBackup(serde_json::Error),
    #[error("failed to serialize store: {0}")]
    Serialize(serde_json::Error),
}
