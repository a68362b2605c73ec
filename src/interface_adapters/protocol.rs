use serde::Serialize;

// Error envelope returned for every translated fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}
