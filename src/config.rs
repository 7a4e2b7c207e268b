use crate::GenericError;

pub const API_KEY_VAR: &str = "GOOGLE_MAPS_TOKEN";
pub const PLACES_BASE_URL_VAR: &str = "GOOGLE_PLACES_BASE_URL";
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Credentials and endpoints for the Google-backed provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsConfig {
    pub api_key: String,
    pub places_base_url: String,
}

impl MapsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        MapsConfig {
            api_key: api_key.into(),
            places_base_url: DEFAULT_PLACES_BASE_URL.to_string(),
        }
    }

    /// Reads the configuration from the process environment or a `.env` file.
    pub fn from_env() -> Result<Self, GenericError> {
        let mut config = MapsConfig::new(dotenv::var(API_KEY_VAR)?);
        if let Ok(base_url) = dotenv::var(PLACES_BASE_URL_VAR) {
            config = config.with_places_base_url(base_url);
        }
        Ok(config)
    }

    pub fn with_places_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.places_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}
