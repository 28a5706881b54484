use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures a console action can surface to the user.
///
/// The `Display` impl is what ends up in error banners, so each variant
/// renders as a plain sentence rather than a debug dump.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection,
    /// CORS rejection in the browser).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status. `message` carries
    /// the backend's `detail` field when one was present.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body was not JSON at all, whatever the status said.
    #[error("Invalid JSON response")]
    InvalidJson,

    /// The body was valid JSON but not the shape this client expects.
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code, when the server got far enough to send one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
