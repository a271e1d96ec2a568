//! Core utilities shared by every data source
//!
//! - `cache`: two-tier response cache (LRU memory + JSON files)
//! - `de`: lenient serde helpers for loosely typed API payloads
//! - `http`: authenticated JSON client with cache integration

pub mod cache;
pub mod de;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{try_read_to_string, write_string, ApiCacheKey, CacheKey, CachePolicy, UnifiedCache};
pub use http::{ApiClient, AuthScheme};
