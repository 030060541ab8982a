use thiserror::Error;

/// Failures while fetching or decoding an advice payload.
///
/// The variants exist for logging; the page loader maps every one of them
/// to the same user-visible fallback string and propagates nothing.
#[derive(Debug, Error)]
pub enum AdviceFetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("response body is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// A rendering surface rejected a background-image assignment.
///
/// Recovery is fully local: the background stays unset, no fallback image
/// is substituted, and nothing is surfaced to the user.
#[derive(Debug, Clone, Error)]
#[error("background assignment rejected: {reason}")]
pub struct BackgroundError {
    reason: String,
}

impl BackgroundError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
