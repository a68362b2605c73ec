use thiserror::Error;

// Domain-level faults raised by the animal use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimalError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unexpected(String),
}

impl AnimalError {
    // Human-readable message carried by the fault.
    pub fn message(&self) -> &str {
        match self {
            AnimalError::InvalidArgument(message)
            | AnimalError::NotFound(message)
            | AnimalError::Unexpected(message) => message,
        }
    }

    // Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AnimalError::InvalidArgument(_) => "invalid_argument",
            AnimalError::NotFound(_) => "not_found",
            AnimalError::Unexpected(_) => "unexpected",
        }
    }
}
