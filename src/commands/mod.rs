//! Command implementations for the sports-dash CLI

pub mod cfb;
pub mod dashboard;
pub mod demo;
pub mod soccer;


use serde_json::Value;

use crate::{
    config::{ApiConfig, Config},
    core::{ApiCacheKey, UnifiedCache},
    error::DashError,
    report::{
        text::{render_json, render_sections},
        Section,
    },
    Result,
};

/// Text width used when stdout is not a terminal.
pub const DEFAULT_WIDTH: u16 = 100;

/// Responses kept in memory per run.
const MEMORY_CACHE_ENTRIES: usize = 256;

/// The `--api-key` flag wins over the configured (environment) key.
pub fn resolve_api_key(api_key: Option<String>, config: &ApiConfig, env_var: &str) -> Result<String> {
    api_key
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .or_else(|| config.api_key.clone())
        .ok_or_else(|| DashError::MissingApiKey {
            env_var: env_var.to_string(),
        })
}

/// `limit` must select at least one row.
pub fn validate_limit(limit: usize) -> Result<usize> {
    if limit == 0 {
        return Err(DashError::InvalidArgument {
            message: "limit must be at least 1".to_string(),
        });
    }
    Ok(limit)
}

/// Response cache rooted at the configured cache directory.
pub fn response_cache(config: &Config) -> UnifiedCache<ApiCacheKey, Value> {
    UnifiedCache::with_disk(MEMORY_CACHE_ENTRIES, config.cache_dir.clone())
}

pub fn output_width() -> u16 {
    crossterm::terminal::size()
        .map(|(w, _)| w)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Render sections as text or JSON.
pub fn format_sections(sections: &[Section], json: bool, width: u16) -> Result<String> {
    if json {
        render_json(sections)
    } else {
        Ok(render_sections(sections, width))
    }
}

/// Print sections to stdout.
pub fn emit(sections: &[Section], json: bool) -> Result<()> {
    let out = format_sections(sections, json, output_width())?;
    println!("{}", out.trim_end()); // tarpaulin::skip
    Ok(())
}
