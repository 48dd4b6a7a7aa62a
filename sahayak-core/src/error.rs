use thiserror::Error;

/// Errors raised by state transitions the UI normally prevents up front
/// (disabled buttons), plus configuration loading.
#[derive(Debug, Error)]
pub enum Error {
    /// Required form fields are missing.
    #[error("form incomplete: {0}")]
    FormIncomplete(&'static str),

    #[error("campaign {0} is already completed")]
    CampaignClosed(u32),

    #[error("campaign {0} has no free places")]
    CampaignFull(u32),

    #[error("already joined campaign {0}")]
    AlreadyJoined(u32),

    #[error("not a participant of campaign {0}")]
    NotJoined(u32),

    /// Transcription retry without a recording.
    #[error("no recording available")]
    NoRecording,

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
