//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public origin of the site, used for canonical links
    /// Example: https://leadq.ai
    pub site_url: Option<String>,

    /// tracing-subscriber filter directives
    /// Example: info,leadq=debug
    pub log_filter: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            site_url: std::env::var("SITE_URL").ok().filter(|v| !v.trim().is_empty()),
            log_filter: std::env::var("RUST_LOG").ok(),
        }
    }

    /// Check if a public site URL is configured
    pub fn has_site_url(&self) -> bool {
        self.site_url.is_some()
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Absolute URL for `path` on the configured origin
    pub fn canonical_url(&self, path: &str) -> Option<String> {
        let origin = self.site_url.as_deref()?.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            Some(format!("{origin}/"))
        } else {
            Some(format!("{origin}/{path}"))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(site_url: Option<&str>, log_filter: Option<&str>) -> Config {
        Config {
            site_url: site_url.map(str::to_string),
            log_filter: log_filter.map(str::to_string),
        }
    }

    #[test]
    fn test_has_site_url() {
        assert!(config(Some("https://leadq.ai"), None).has_site_url());
        assert!(!config(None, None).has_site_url());
    }

    #[test]
    fn test_log_filter_default() {
        assert_eq!(config(None, None).log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(config(None, Some("debug")).log_filter(), "debug");
    }

    #[test]
    fn test_canonical_url_joins_cleanly() {
        let config = config(Some("https://leadq.ai/"), None);

        assert_eq!(config.canonical_url("/"), Some("https://leadq.ai/".to_string()));
        assert_eq!(
            config.canonical_url("/privacy-policy"),
            Some("https://leadq.ai/privacy-policy".to_string())
        );
    }

    #[test]
    fn test_canonical_url_without_site_url() {
        assert_eq!(config(None, None).canonical_url("/"), None);
    }
}
