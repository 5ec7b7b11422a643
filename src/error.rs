use thiserror::Error;

/// Errors that can occur while turning a photo into a recipe
#[derive(Error, Debug)]
pub enum SnapError {
    /// No image was selected for the submission
    #[error("Please select an image.")]
    MissingImage,

    /// The backend answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request could not be sent or the response could not be read
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a body we could not understand
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Reading an image from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The backend could not be constructed from configuration
    #[error("Backend error: {0}")]
    Provider(String),
}

impl SnapError {
    /// Message suitable for the feedback region.
    ///
    /// Server-supplied messages are shown as-is; anything without a useful
    /// message falls back to `default`.
    pub fn feedback(&self, default: &str) -> String {
        match self {
            SnapError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            SnapError::Api { .. } => default.to_string(),
            SnapError::MissingImage => self.to_string(),
            SnapError::Request(e) => format!("{}: {}", default.trim_end_matches('.'), e),
            other => other.to_string(),
        }
    }
}
