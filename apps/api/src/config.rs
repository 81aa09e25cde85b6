use anyhow::{bail, Context, Result};
use axum::http::HeaderValue;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Which `DocumentParser` backend the upload endpoints use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParserBackend {
    #[default]
    Mock,
    Keyword,
}

impl std::str::FromStr for ParserBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(ParserBackend::Mock),
            "keyword" => Ok(ParserBackend::Keyword),
            other => bail!("DOCUMENT_PARSER must be 'mock' or 'keyword', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Single origin allowed by CORS, with credentials.
    pub frontend_origin: HeaderValue,
    pub rust_log: String,
    pub document_parser: ParserBackend,
    pub upload_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            frontend_origin: HeaderValue::from_static(DEFAULT_FRONTEND_ORIGIN),
            rust_log: "info".to_string(),
            document_parser: ParserBackend::Mock,
            upload_limit_bytes: DEFAULT_UPLOAD_LIMIT_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. `from_env` passes the
    /// process environment; tests pass a fixed map.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        let origin = lookup("FRONTEND_ORIGIN").unwrap_or_else(|| DEFAULT_FRONTEND_ORIGIN.to_string());
        let frontend_origin = HeaderValue::from_str(&origin)
            .with_context(|| format!("FRONTEND_ORIGIN is not a valid header value: '{origin}'"))?;

        let document_parser = match lookup("DOCUMENT_PARSER") {
            Some(raw) => raw.parse()?,
            None => ParserBackend::default(),
        };

        let upload_limit_bytes = match lookup("UPLOAD_LIMIT_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("UPLOAD_LIMIT_BYTES must be a byte count, got '{raw}'"))?,
            None => DEFAULT_UPLOAD_LIMIT_BYTES,
        };

        Ok(Config {
            port,
            frontend_origin,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            document_parser,
            upload_limit_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.frontend_origin, "http://localhost:5173");
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.document_parser, ParserBackend::Mock);
        assert_eq!(config.upload_limit_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("PORT", "8088"),
            ("FRONTEND_ORIGIN", "https://talent.example.com"),
            ("RUST_LOG", "debug"),
            ("DOCUMENT_PARSER", "Keyword"),
            ("UPLOAD_LIMIT_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(config.port, 8088);
        assert_eq!(config.frontend_origin, "https://talent.example.com");
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.document_parser, ParserBackend::Keyword);
        assert_eq!(config.upload_limit_bytes, 1024);
    }

    #[test]
    fn test_invalid_port_fails() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_port_out_of_range_fails() {
        assert!(config_from(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_unknown_parser_backend_fails() {
        let err = config_from(&[("DOCUMENT_PARSER", "llm")]).unwrap_err();
        assert!(err.to_string().contains("DOCUMENT_PARSER"));
    }

    #[test]
    fn test_origin_with_newline_fails() {
        assert!(config_from(&[("FRONTEND_ORIGIN", "http://a\nb")]).is_err());
    }
}
