use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapServiceError {
    #[error("Mapping client not available.")]
    ClientUnavailable,
    #[error("Provider returned status {status}{}", detail(.message))]
    Status {
        status: String,
        message: Option<String>,
    },
    #[error("Provider returned no results.")]
    NoResults,
    #[error("Coordinates ({lat}, {lng}) cannot be sent to the provider.")]
    InvalidCoordinates { lat: f64, lng: f64 },
}

impl MapServiceError {
    pub fn status(status: impl Into<String>) -> Self {
        MapServiceError::Status {
            status: status.into(),
            message: None,
        }
    }
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}
