// src/config.rs
use std::env;

/// Origins always accepted in development (local Vite dev servers plus the
/// relay itself).
pub const DEV_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:5174",
    "http://localhost:5175",
    "http://localhost:3000",
];

const DEFAULT_PORT: u16 = 5000;

/// Process configuration, read once at startup. Handlers receive this
/// through [`crate::state::AppState`] instead of touching the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the generation provider. When absent the relay still
    /// runs but answers every chat with a canned configuration reply.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    /// Environment tag ("development", "production", ...).
    pub env: String,
    /// Extra allowed CORS origin, honored only in production.
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|v| !v.is_empty()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            allowed_origin: env::var("ALLOWED_ORIGIN").ok().filter(|v| !v.is_empty()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.env == "production"
    }

    /// Full CORS allow-list: the fixed dev origins, plus the configured
    /// origin in production.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = DEV_ORIGINS.iter().map(|o| o.to_string()).collect();
        if self.is_production() {
            if let Some(origin) = &self.allowed_origin {
                origins.push(origin.clone());
            }
        }
        origins
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            port: DEFAULT_PORT,
            env: "development".to_string(),
            allowed_origin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_origin_ignored_outside_production() {
        let config = Config {
            allowed_origin: Some("https://nyayamitra.example".to_string()),
            ..Config::default()
        };
        assert_eq!(config.allowed_origins().len(), DEV_ORIGINS.len());
    }

    #[test]
    fn extra_origin_added_in_production() {
        let config = Config {
            env: "production".to_string(),
            allowed_origin: Some("https://nyayamitra.example".to_string()),
            ..Config::default()
        };
        let origins = config.allowed_origins();
        assert!(origins.contains(&"https://nyayamitra.example".to_string()));
        assert_eq!(origins.len(), DEV_ORIGINS.len() + 1);
    }
}
