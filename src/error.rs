use thiserror::Error;

/// Errors surfaced by the profile REST client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

// UI state holds errors as plain strings for display in notices.
impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.to_string()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
