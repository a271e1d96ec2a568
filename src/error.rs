//! Error types for the sports dashboard

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, DashError>;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("API key not provided and {env_var} environment variable not set")]
    MissingApiKey { env_var: String },

    #[error("{service} rejected the API key (check your credentials)")]
    Unauthorized { service: String },

    #[error("{service} rate limit reached, try again later")]
    RateLimited { service: String },

    #[error("Season {year} is outside the supported range {min}..={max}")]
    InvalidSeason { year: u16, min: u16, max: u16 },

    #[error("Team not found: {name}")]
    TeamNotFound { name: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DashError {
    /// Whether the failure came from the remote service rather than local state.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            DashError::Http(_) | DashError::Unauthorized { .. } | DashError::RateLimited { .. }
        )
    }
}
