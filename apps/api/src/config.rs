use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional so the catalog endpoints still serve without a key.
    pub gemini_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub rate_limit_max_requests: u32,
    pub rate_limit_window_secs: u64,
    /// Key rate limits on `x-forwarded-for`; only safe behind a trusted proxy.
    pub trust_forwarded_for: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            rate_limit_max_requests: parse_env("RATE_LIMIT_MAX_REQUESTS", 10)
                .context("RATE_LIMIT_MAX_REQUESTS must be a positive integer")?,
            rate_limit_window_secs: parse_env("RATE_LIMIT_WINDOW_SECS", 15 * 60)
                .context("RATE_LIMIT_WINDOW_SECS must be a positive integer")?,
            trust_forwarded_for: parse_env("TRUST_FORWARDED_FOR", false)
                .context("TRUST_FORWARDED_FOR must be true or false")?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value {raw:?} for '{key}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u32 = parse_env("PATHWAY_API_TEST_UNSET_VAR", 10).unwrap();
        assert_eq!(value, 10);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("PATHWAY_API_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("PATHWAY_API_TEST_BAD_PORT", 8080);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_key_is_absent() {
        std::env::set_var("PATHWAY_API_TEST_BLANK_KEY", "  ");
        assert_eq!(optional_env("PATHWAY_API_TEST_BLANK_KEY"), None);
    }
}
