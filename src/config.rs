//! Feed definitions loaded from YAML
//!
//! A feed definition names the endpoint to page through, the page size, and
//! the credentials/static query parameters the requests carry.
//!
//! ```yaml
//! name: trending-gifs
//! base_url: https://api.giphy.com
//! path: /v1/gifs/trending
//! page_size: 18
//! api_key_env: GIPHY_API_KEY
//! query:
//!   rating: g
//! ```

use crate::error::{Error, Result};
use crate::giphy::GiphyFetcher;
use crate::http::{HttpClient, HttpClientConfig};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

fn default_page_size() -> u64 {
    18
}

fn default_api_key_param() -> String {
    "api_key".to_string()
}

/// A paginated feed definition
#[derive(Debug, Clone, Deserialize)]
pub struct FeedConfig {
    /// Unique feed name
    pub name: String,

    /// Base URL for API requests
    pub base_url: String,

    /// Endpoint path to page through
    pub path: String,

    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: u64,

    /// Static query parameters added to every request
    #[serde(default)]
    pub query: HashMap<String, String>,

    /// Inline API key (prefer `api_key_env`)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Environment variable holding the API key
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// Query parameter name the API key is sent as
    #[serde(default = "default_api_key_param")]
    pub api_key_param: String,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl FeedConfig {
    /// Validate the definition
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::missing_field("name"));
        }
        if self.base_url.is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        if self.path.is_empty() {
            return Err(Error::missing_field("path"));
        }
        if self.page_size == 0 {
            return Err(Error::InvalidConfigValue {
                field: "page_size".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve the API key from the inline value or the environment
    pub fn resolve_api_key(&self) -> Result<Option<String>> {
        if let Some(key) = &self.api_key {
            return Ok(Some(key.clone()));
        }
        match &self.api_key_env {
            Some(var) => std::env::var(var).map(Some).map_err(|_| Error::config(format!(
                "environment variable '{var}' is not set"
            ))),
            None => Ok(None),
        }
    }

    /// Build a fetcher for this feed
    pub fn build_fetcher(&self) -> Result<GiphyFetcher> {
        self.validate()?;

        let mut builder = HttpClientConfig::builder().base_url(&self.base_url);
        if let Some(seconds) = self.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        for (key, value) in &self.query {
            builder = builder.query(key, value);
        }
        if let Some(key) = self.resolve_api_key()? {
            builder = builder.query(&self.api_key_param, key);
        }

        let client = HttpClient::with_config(builder.build());
        Ok(GiphyFetcher::new(client, self.path.clone()))
    }
}

/// Load a feed definition from a YAML file
pub fn load_feed(path: impl AsRef<Path>) -> Result<FeedConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    load_feed_from_str(&contents)
}

/// Load a feed definition from a YAML string
pub fn load_feed_from_str(yaml: &str) -> Result<FeedConfig> {
    let config: FeedConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
name: trending-gifs
base_url: https://api.giphy.com
path: /v1/gifs/trending
page_size: 18
api_key: test-key
query:
  rating: g
"#;

    #[test]
    fn test_load_from_str() {
        let config = load_feed_from_str(SAMPLE).unwrap();
        assert_eq!(config.name, "trending-gifs");
        assert_eq!(config.base_url, "https://api.giphy.com");
        assert_eq!(config.path, "/v1/gifs/trending");
        assert_eq!(config.page_size, 18);
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.api_key_param, "api_key");
        assert_eq!(config.query.get("rating").unwrap(), "g");
    }

    #[test]
    fn test_defaults() {
        let config = load_feed_from_str(
            "name: minimal\nbase_url: https://api.example.com\npath: /v1/items\n",
        )
        .unwrap();
        assert_eq!(config.page_size, 18);
        assert!(config.query.is_empty());
        assert!(config.api_key.is_none());
        assert!(config.timeout_seconds.is_none());
    }

    #[test]
    fn test_validation_errors() {
        let err = load_feed_from_str("name: x\nbase_url: ''\npath: /v1\n").unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));

        let err = load_feed_from_str(
            "name: x\nbase_url: https://a\npath: /v1\npage_size: 0\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = load_feed(file.path()).unwrap();
        assert_eq!(config.name, "trending-gifs");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_feed("/nonexistent/feed.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_resolve_api_key_inline() {
        let config = load_feed_from_str(SAMPLE).unwrap();
        assert_eq!(config.resolve_api_key().unwrap().as_deref(), Some("test-key"));
    }

    #[test]
    fn test_resolve_api_key_missing_env() {
        let config = load_feed_from_str(
            "name: x\nbase_url: https://a\npath: /v1\napi_key_env: PAGEFEED_NO_SUCH_VAR\n",
        )
        .unwrap();
        assert!(config.resolve_api_key().is_err());
    }

    #[test]
    fn test_build_fetcher() {
        let config = load_feed_from_str(SAMPLE).unwrap();
        let fetcher = config.build_fetcher().unwrap();
        assert_eq!(fetcher.path(), "/v1/gifs/trending");
    }
}
