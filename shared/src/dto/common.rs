use serde::{Deserialize, Serialize};

/// Error text as the API sends it: one message or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub fn to_text(&self) -> String {
        match self {
            Self::One(message) => message.clone(),
            Self::Many(messages) => messages.join(" "),
        }
    }
}

/// Common error response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<ErrorMessage>,
    /// Set by the framework itself, e.g. on authentication failures.
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn message(&self) -> Option<String> {
        self.error
            .as_ref()
            .map(ErrorMessage::to_text)
            .or_else(|| self.detail.clone())
    }
}
