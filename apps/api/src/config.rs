use anyhow::{Context, Result};

/// Application configuration loaded once at startup from environment
/// variables and carried around as an immutable value on `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub client_origins: Vec<String>,
    /// May be empty — the service boots without it and the LLM routes
    /// return 503 until it is set.
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub tectonic_path: String,
    pub request_timeout_ms: u64,
    pub rust_log: String,
}

const FALLBACK_ORIGINS: &[&str] = &["http://localhost:5173", "http://127.0.0.1:5173"];

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let configured_origins = std::env::var("CLIENT_ORIGINS")
            .or_else(|_| std::env::var("CLIENT_ORIGIN"))
            .ok()
            .map(|value| parse_origins(&value))
            .filter(|origins| !origins.is_empty());

        Ok(Config {
            port: optional_env("PORT", "4000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            client_origins: configured_origins.unwrap_or_else(|| {
                FALLBACK_ORIGINS.iter().map(|s| s.to_string()).collect()
            }),
            gemini_api_key: optional_env("GEMINI_API_KEY", ""),
            gemini_model: optional_env("GEMINI_MODEL", "models/gemini-2.5-flash"),
            tectonic_path: optional_env("TECTONIC_PATH", "tectonic"),
            request_timeout_ms: optional_env("REQUEST_TIMEOUT_MS", "180000")
                .parse::<u64>()
                .context("REQUEST_TIMEOUT_MS must be a number of milliseconds")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Splits a comma-separated origin list, trimming and dropping empties.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins(" http://a.example , http://b.example,, ");
        assert_eq!(origins, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn test_parse_origins_single_wildcard() {
        assert_eq!(parse_origins("*"), vec!["*"]);
    }

    #[test]
    fn test_parse_origins_empty_input() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ,").is_empty());
    }
}
