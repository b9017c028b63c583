use std::path::PathBuf;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "WELLNESS_API_URL";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: String,
    session_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let api_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            api_url,
            session_file: Some(default_session_path()),
        }
    }
}

impl ClientConfig {
    /// Configuration for an explicit server, without session persistence
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            session_file: None,
        }
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    pub fn without_session_file(mut self) -> Self {
        self.session_file = None;
        self
    }

    pub fn server_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn session_file(&self) -> Option<&PathBuf> {
        self.session_file.as_ref()
    }
}

/// Platform data directory location for the saved session
pub fn default_session_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    path.push("wellness-portal");
    path.push("session.json");
    path
}
