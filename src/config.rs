use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment reported by the status endpoint
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Database connection string, reported but never opened
    #[serde(default = "default_db_url")]
    pub db_url: String,

    /// Comma-separated CORS allowed origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
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

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Config>(vars)?)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse the CORS allowlist into header values
    pub fn cors_origin_list(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| {
                if o == "*" {
                    return Err(ConfigError::InvalidCorsOrigin {
                        origin: o.to_string(),
                        reason: "wildcard cannot be combined with credentials".to_string(),
                    });
                }
                o.parse::<HeaderValue>()
                    .map_err(|e| ConfigError::InvalidCorsOrigin {
                        origin: o.to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect()
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "dev" || env == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "prod" || env == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            db_url: default_db_url(),
            cors_origins: default_cors_origins(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Invalid CORS origin '{origin}': {reason}")]
    InvalidCorsOrigin { origin: String, reason: String },
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_db_url() -> String {
    "sqlite:///ufdr.db".to_string()
}

fn default_cors_origins() -> String {
    "http://localhost:5173,http://127.0.0.1:5173".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
