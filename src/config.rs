/*
 * Responsibility
 * - Environment/config loading (PORT, APP_ENV, allowed origins)
 * - Config validation (startup fails on bad values)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

/// Origins that may receive the proxied feed when ALLOWED_ORIGINS is unset.
/// Exact-match strings only; localhost (any port) is handled dynamically by
/// the origin validator and is intentionally not listed here.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://bsidhom.github.io",
    "https://dash.cloudflare.com",
    "https://numbat.dev",
    "https://workers-playground-broken-wave-5333.bsidhom.workers.dev",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    /// Read once at startup, never mutated afterwards.
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::from_env();

        let allowed_origins = match std::env::var("ALLOWED_ORIGINS") {
            Ok(raw) => parse_allowed_origins(&raw),
            Err(_) => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        Ok(Self {
            addr,
            app_env,
            allowed_origins,
        })
    }
}

fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ALLOWED_ORIGINS, parse_allowed_origins};

    #[test]
    fn parses_comma_separated_origins() {
        assert_eq!(
            parse_allowed_origins(" https://a.example , https://b.example ,,"),
            vec![
                "https://a.example".to_string(),
                "https://b.example".to_string()
            ]
        );
    }

    #[test]
    fn empty_value_means_no_configured_origins() {
        assert!(parse_allowed_origins("").is_empty());
    }

    #[test]
    fn default_allowlist_entries_are_bare_origins() {
        for origin in DEFAULT_ALLOWED_ORIGINS {
            assert!(origin.starts_with("https://"), "{origin}");
            assert!(!origin.ends_with('/'), "{origin}");
        }
    }
}
