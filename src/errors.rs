#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Please enter your name first!")]
    EmptyName,

    #[error("rate must be a positive whole number, got {0:?}")]
    InvalidRate(String),

    #[error("{0} is in the past, pick today or a later date")]
    PastDate(String),

    #[error("not logged in")]
    NoSession,

    #[error("only the admin can do that")]
    Forbidden,

    #[error("slot {slot} on {date} is {status}, not available")]
    SlotUnavailable {
        date: String,
        slot: String,
        status: String,
    },

    #[error("slot {slot} on {date} has no pending request")]
    NotPending { date: String, slot: String },

    #[error("unknown slot {0:?}, expected HH:00")]
    UnknownSlot(String),

    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("no pending request #{0}")]
    NoSuchRequest(usize),

    #[error("{0}")]
    InvalidCommand(String),
}

impl AppError {
    /// Errors the user can correct by changing their input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::EmptyName
                | AppError::InvalidRate(_)
                | AppError::PastDate(_)
                | AppError::NoSession
                | AppError::Forbidden
                | AppError::UnknownSlot(_)
                | AppError::InvalidDate(_)
                | AppError::NoSuchRequest(_)
                | AppError::InvalidCommand(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
