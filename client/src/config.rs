//! REST base-path configuration.
//!
//! The console talks to `/api` on its own origin unless the bundle was built
//! with `READING_CONSOLE_API_URL`, in which case calls go to `<url>/api`.
//! Same-origin is the reverse-proxy deployment; the URL form is for a
//! separately hosted API.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base path used when no API URL is configured.
pub const DEFAULT_API_BASE: &str = "/api";

/// Where REST calls are sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_path: String,
}

impl ApiConfig {
    /// Read the API URL baked in at build time.
    pub fn from_build_env() -> Self {
        Self::from_api_url(option_env!("READING_CONSOLE_API_URL"))
    }

    /// Build a config from an optional API origin such as `https://api.example.org`.
    pub fn from_api_url(api_url: Option<&str>) -> Self {
        match api_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self { base_path: format!("{}/api", url.trim_end_matches('/')) },
            None => Self::default(),
        }
    }

    /// Join an endpoint path (starting with `/`) onto the base path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_path: DEFAULT_API_BASE.to_owned() }
    }
}
