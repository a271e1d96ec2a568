//! HTTP utilities for statistics API communication

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::cache::{ApiCacheKey, CachePolicy, UnifiedCache};
use crate::{error::DashError, Result};

/// How the API key is attached to each request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// A custom header carrying the raw key, e.g. `X-Auth-Token`
    Header(&'static str),
}

/// Build the default headers for a service: JSON accept plus auth.
pub fn auth_header_map(scheme: AuthScheme, api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    match scheme {
        AuthScheme::Bearer => {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))?;
            value.set_sensitive(true);
            h.insert(AUTHORIZATION, value);
        }
        AuthScheme::Header(name) => {
            let mut value = HeaderValue::from_str(api_key.trim())?;
            value.set_sensitive(true);
            h.insert(HeaderName::from_static(name), value);
        }
    }
    Ok(h)
}

/// JSON GET client for one statistics service.
///
/// Responses are cached as raw JSON keyed by path and query, so typed
/// decoding changes never invalidate the cache.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    service: &'static str,
    base_url: String,
    cache: UnifiedCache<ApiCacheKey, Value>,
    policy: CachePolicy,
}

impl ApiClient {
    pub fn new(
        service: &'static str,
        base_url: &str,
        scheme: AuthScheme,
        api_key: &str,
        cache: UnifiedCache<ApiCacheKey, Value>,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("sports-dash/", env!("CARGO_PKG_VERSION")))
            .default_headers(auth_header_map(scheme, api_key)?)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            service,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
            policy: CachePolicy::Use,
        })
    }

    pub fn with_policy(mut self, policy: CachePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn set_policy(&mut self, policy: CachePolicy) {
        self.policy = policy;
    }

    /// GET `path` with `query`, going through the cache per the client's policy.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let key = ApiCacheKey::new(self.service, path, query);

        if self.policy.reads() {
            if let Some(cached) = self.cache.get(&key) {
                return Ok(serde_json::from_value(cached)?);
            }
        }

        let value = self.fetch(path, query).await?;

        if self.policy.writes() {
            self.cache.put(key, value.clone());
        }

        Ok(serde_json::from_value(value)?)
    }

    async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http.get(&url).query(query).build()?;
        debug!(service = self.service, url = %request.url(), "GET");

        let response = self.http.execute(request).await?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(DashError::Unauthorized {
                    service: self.service.to_string(),
                })
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(DashError::RateLimited {
                    service: self.service.to_string(),
                })
            }
            _ => {}
        }

        let value = response.error_for_status()?.json::<Value>().await?;
        info!(service = self.service, path, "fetched");
        Ok(value)
    }
}
