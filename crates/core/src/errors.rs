use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Slot unavailable: {0}")]
    SlotUnavailable(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl AgendaError {
    /// The reason carried by a booking rejection, if this is one.
    pub fn unavailability_reason(&self) -> Option<&str> {
        match self {
            AgendaError::SlotUnavailable(reason) => Some(reason),
            _ => None,
        }
    }
}

pub type AgendaResult<T> = Result<T, AgendaError>;
