//! Client configuration.
//!
//! `ClientConfig` represents the optional `~/.polished/config.toml` that
//! controls where the backend lives and how long requests may take.

use serde::{Deserialize, Serialize};

/// Configuration for the Polished client.
///
/// All fields have sensible defaults; an absent or empty config file is
/// equivalent to `ClientConfig::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the resume-review backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. Resume analysis can take a while on
    /// long documents, so the default is generous.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: ClientConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout_secs, 120);
    }

    #[test]
    fn test_deserialize_with_values() {
        let toml_str = r#"
base_url = "https://review.example.com"
request_timeout_secs = 30
"#;
        let config: ClientConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.base_url, "https://review.example.com");
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
            request_timeout_secs: 60,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.base_url, "http://127.0.0.1:9000");
        assert_eq!(parsed.request_timeout_secs, 60);
    }
}
