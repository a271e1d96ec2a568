//! Runtime configuration read from the environment.
//!
//! `.env.local` and `.env` are loaded first (see [`load_dotenv`]), so API
//! keys can live in a file next to the binary instead of the shell profile.

use std::path::PathBuf;

use crate::{
    CACHE_DIR_ENV_VAR, CFBD_API_KEY_ENV_VAR, CFBD_BASE_URL_ENV_VAR, FOOTBALL_DATA_API_KEY_ENV_VAR,
    FOOTBALL_DATA_BASE_URL_ENV_VAR,
};

pub const CFBD_DEFAULT_BASE_URL: &str = "https://api.collegefootballdata.com";
pub const FOOTBALL_DATA_DEFAULT_BASE_URL: &str = "https://api.football-data.org/v4";

/// Load `.env.local` then `.env`; neither file is required.
pub fn load_dotenv() {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();
}

/// Connection settings for one remote statistics service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cfbd: ApiConfig,
    pub football_data: ApiConfig,
    pub cache_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            cfbd: ApiConfig {
                base_url: env_or(CFBD_BASE_URL_ENV_VAR, CFBD_DEFAULT_BASE_URL),
                api_key: non_empty_env(CFBD_API_KEY_ENV_VAR),
            },
            football_data: ApiConfig {
                base_url: env_or(FOOTBALL_DATA_BASE_URL_ENV_VAR, FOOTBALL_DATA_DEFAULT_BASE_URL),
                api_key: non_empty_env(FOOTBALL_DATA_API_KEY_ENV_VAR),
            },
            cache_dir: non_empty_env(CACHE_DIR_ENV_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_cache_dir),
        }
    }
}

/// `~/.cache/sports-dash` (or the platform equivalent).
pub fn default_cache_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("sports-dash")
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or(name: &str, default: &str) -> String {
    non_empty_env(name)
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| default.to_string())
}
