use std::env;

use thiserror::Error;

const DEFAULT_VIEWPORT_ROWS: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Runtime settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Sent as the `User-Agent` header on the search request.
    pub user_agent: String,
    /// Number of rows the table view shows at once.
    pub viewport_rows: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            viewport_rows: DEFAULT_VIEWPORT_ROWS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let user_agent = read("SEARCH_USER_AGENT").unwrap_or_else(default_user_agent);

        let viewport_rows = match read("VIEWPORT_ROWS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(rows) if rows > 0 => rows,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: "VIEWPORT_ROWS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_VIEWPORT_ROWS,
        };

        Ok(Self {
            user_agent,
            viewport_rows,
        })
    }
}

fn default_user_agent() -> String {
    format!("swift-search/{}", env!("CARGO_PKG_VERSION"))
}
