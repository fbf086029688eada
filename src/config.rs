use dotenvy::dotenv;
use std::env;

/// Runtime configuration, loaded once in main and passed by reference to
/// whatever needs it. No global statics.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Per-fetch timeout in seconds for the content scraper.
    pub timeout_secs: u64,
    pub user_agent: String,
    pub content_length: usize,
    pub max_results: usize,
}

impl Config {
    pub fn from_env() -> Config {
        dotenv().ok(); // Load .env file if present
        Config {
            host: get_env_or_default("FORAGE_HOST", "127.0.0.1"),
            port: get_env_parsed("FORAGE_PORT", 8888),
            timeout_secs: get_env_parsed("FORAGE_TIMEOUT", 10),
            user_agent: get_env_or_default(
                "FORAGE_USER_AGENT",
                "Mozilla/5.0 (compatible; ForageBot/1.0)",
            ),
            content_length: get_env_parsed("FORAGE_CONTENT_LENGTH", 2500),
            max_results: get_env_parsed("FORAGE_MAX_RESULTS", 10),
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8888,
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (compatible; ForageBot/1.0)".to_string(),
            content_length: 2500,
            max_results: 10,
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
