use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, error};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port, shared by the REST API and the WebSocket upgrade
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// CORS allowed origins, comma separated. Unset means any origin.
    pub cors_origins: Option<String>,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Document every new connection is attached to
    #[serde(default = "default_document_id")]
    pub default_document_id: String,

    /// Seed content of the default document
    #[serde(default = "default_document_content")]
    pub default_document_content: String,

    /// Seed content of documents created on first reference
    #[serde(default = "default_new_document_content")]
    pub new_document_content: String,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        match envy::from_env::<Config>() {
            Ok(config) => {
                info!("✅ Configuration loaded successfully");
                Ok(config)
            }
            Err(e) => {
                error!("❌ Failed to load configuration: {}", e);
                Err(ConfigError::EnvError(e))
            }
        }
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Allowed CORS origins, or `None` when every origin is allowed
    pub fn cors_origin_list(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .cors_origins
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();
        if origins.is_empty() {
            None
        } else {
            Some(origins)
        }
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment.to_lowercase() == "dev" || self.environment.to_lowercase() == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            cors_origins: None,
            default_document_id: default_document_id(),
            default_document_content: default_document_content(),
            new_document_content: default_new_document_content(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvError(#[from] envy::Error),
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_document_id() -> String {
    "default".to_string()
}

fn default_document_content() -> String {
    "// Welcome to Real-Time Collaboration Tool!\n// Start typing to collaborate with others in real-time.\n\n".to_string()
}

fn default_new_document_content() -> String {
    "// New Document\n\n".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_relay_seed_documents() {
        let config = Config::default();
        assert_eq!(config.server_address(), "0.0.0.0:3001");
        assert_eq!(config.default_document_id, "default");
        assert_eq!(config.new_document_content, "// New Document\n\n");
        assert!(config.is_development());
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let mut config = Config::default();
        assert_eq!(config.cors_origin_list(), None);

        config.cors_origins = Some("http://a.test, http://b.test ,".to_string());
        assert_eq!(
            config.cors_origin_list(),
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );

        config.cors_origins = Some(" , ".to_string());
        assert_eq!(config.cors_origin_list(), None);
    }
}
