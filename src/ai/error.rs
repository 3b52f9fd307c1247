use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API key is not configured")]
    NotConfigured,

    #[error("Invalid Gemini endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Built with the URL stripped, since the URL holds the API key.
    #[error("Failed to reach Gemini API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API request failed: {status} - {body}")]
    Status { status: StatusCode, body: String },

    #[error("Invalid API response structure: {0}")]
    MalformedResponse(String),
}
