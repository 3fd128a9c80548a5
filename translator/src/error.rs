//! FILENAME: translator/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("model call timed out")]
    Timeout,

    #[error("model unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("input is required")]
    MissingInput,

    #[error("model timed out")]
    Timeout,

    #[error("backend error: {0}")]
    Backend(String),

    #[error("model did not return a valid JSON object")]
    InvalidReply,

    #[error("model refused: {0}")]
    Refused(String),

    #[error("model reply is missing the propositions mapping")]
    MissingPropositions,

    #[error("model reply is missing required fields")]
    MissingFields,
}

impl TranslateError {
    /// Message suitable for showing to the end user.
    pub fn user_message(&self) -> String {
        match self {
            TranslateError::MissingInput => "input is required".to_string(),
            TranslateError::InvalidReply => {
                "The model did not return a valid JSON object. Try rephrasing your input."
                    .to_string()
            }
            TranslateError::MissingPropositions => {
                "The model did not return the mapping of propositions. Try a simpler sentence."
                    .to_string()
            }
            TranslateError::Timeout => "Timeout. Try again with a shorter sentence.".to_string(),
            TranslateError::Refused(reason) => reason.clone(),
            TranslateError::Backend(_) | TranslateError::MissingFields => {
                "Internal server error".to_string()
            }
        }
    }
}

impl From<BackendError> for TranslateError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Timeout => TranslateError::Timeout,
            BackendError::Unavailable(reason) => TranslateError::Backend(reason),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
