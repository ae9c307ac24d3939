use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed feed time '{value}': expected \"HH:MM\"")]
    ScheduleParse { value: String },

    #[error("Invalid feeding schedule for '{fish}': {reason}")]
    InvalidSchedule { fish: String, reason: String },

    #[error("Fish source unavailable: {0}")]
    SourceUnavailable(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
