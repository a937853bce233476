/// Shown when the failure carries neither a detail string nor a description.
pub const FALLBACK_MESSAGE: &str = "Please try again or contact me directly via email.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The backend answered with something other than `200 OK`.
    #[error("Request failed with status code {status}")]
    Rejected {
        status: u16,
        detail: Option<String>,
    },

    /// No response was received (connection refused, DNS, timeout).
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    pub fn detail(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected { detail, .. } => detail.as_deref(),
            SubmitError::Transport(_) => None,
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Picks the text shown to the visitor for a failed submission: the server
/// detail string, then the error description, then [`FALLBACK_MESSAGE`].
pub fn error_message(err: &SubmitError) -> String {
    if let Some(detail) = err.detail().filter(|d| !d.is_empty()) {
        return detail.to_owned();
    }

    let description = err.to_string();
    if !description.is_empty() {
        return description;
    }

    FALLBACK_MESSAGE.to_owned()
}

/// Extracts `detail` from an error body shaped like `{"detail": "..."}`.
///
/// Non-string details (validation error arrays) are ignored.
pub fn detail_from_body(body: &[u8]) -> Option<String> {
    let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;

    value
        .get("detail")?
        .as_str()
        .filter(|detail| !detail.is_empty())
        .map(str::to_owned)
}
