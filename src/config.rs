// Application configuration.
// Reads the API base URL, cache directory, and user agent from the environment.

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{LeaguedexError, Result};

/// Default TheSportsDB API root (free public key "3").
pub const DEFAULT_API_BASE: &str = "https://www.thesportsdb.com/api/v1/json/3";

const DEFAULT_USER_AGENT: &str = "leaguedex-tui";

const ENV_API_BASE: &str = "LEAGUEDEX_API_BASE";
const ENV_CACHE_DIR: &str = "LEAGUEDEX_CACHE_DIR";
const ENV_USER_AGENT: &str = "LEAGUEDEX_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API root, without a trailing slash.
    pub api_base: String,
    /// Directory holding cached responses and the log file.
    pub cache_dir: PathBuf,
    pub user_agent: String,
}

impl Config {
    /// Build the configuration from environment variables, falling back to defaults.
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_base = lookup(ENV_API_BASE)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = api_base.trim().trim_end_matches('/').to_string();

        let cache_dir = match lookup(ENV_CACHE_DIR).filter(|v| !v.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => default_cache_dir().ok_or_else(|| {
                LeaguedexError::Config(format!(
                    "could not determine a cache directory; set {}",
                    ENV_CACHE_DIR
                ))
            })?,
        };

        let user_agent = lookup(ENV_USER_AGENT)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            api_base,
            cache_dir,
            user_agent,
        })
    }

    /// Directory for the rolling log file.
    pub fn log_dir(&self) -> PathBuf {
        self.cache_dir.join("logs")
    }
}

/// Per-user cache directory (~/.cache/leaguedex on Linux).
pub fn default_cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "leaguedex").map(|dirs| dirs.cache_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_overrides_from_env() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_BASE, "http://localhost:8080/api/"),
            (ENV_CACHE_DIR, "/tmp/leaguedex-test"),
            (ENV_USER_AGENT, "custom-agent"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, "http://localhost:8080/api");
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/leaguedex-test"));
        assert_eq!(config.user_agent, "custom-agent");
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/leaguedex-test/logs"));
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_API_BASE, "  "),
            (ENV_CACHE_DIR, "/tmp/leaguedex-test"),
        ]))
        .unwrap();

        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
