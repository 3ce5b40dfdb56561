use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

/// Failure of a single request against the stats backend.
///
/// Cloneable so one in-flight request can be shared by every caller that asked
/// for the same cache key.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not authenticated (HTTP {0})")]
    Unauthenticated(u16),

    #[error("Request failed with HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Maps a non-success HTTP status to the matching error.
    ///
    /// 401 and 403 mean "no usable session" and are kept apart from every
    /// other status so callers can treat them as anonymous access.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthenticated(status),
            _ => Self::Status {
                status,
                message: message.into(),
            },
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated(_))
    }

    /// Text for the page. Server-provided messages are shown as they are.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } if !message.is_empty() => message.clone(),
            Self::Status { status, .. } => format!("Request failed (HTTP {})", status),
            Self::Unauthenticated(_) => "Please sign in to continue".to_string(),
            Self::Network(_) => "Could not reach the server".to_string(),
            Self::Decode(_) => "Unexpected response from the server".to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthenticated(status) => Some(*status),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Reads the result of a current-user fetch.
///
/// 401 and 403 mean nobody is signed in; every other failure stays an error.
pub fn session_outcome<T>(
    result: std::result::Result<T, FetchError>,
) -> std::result::Result<Option<T>, FetchError> {
    match result {
        Ok(user) => Ok(Some(user)),
        Err(err) if err.is_unauthenticated() => Ok(None),
        Err(err) => Err(err),
    }
}

#[derive(Debug, Error)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Field messages in field order, e.g. "Enter a valid email address. Password is required".
impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);
        let messages: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        Self::Validation(messages.join(". "))
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
