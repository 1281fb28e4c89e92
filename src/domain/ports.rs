use crate::utils::error::Result;
use async_trait::async_trait;

/// Supplies localized day and month names.
///
/// `weekday` counts from Sunday (0) to Saturday (6) and `month` from
/// January (0) to December (11). Out-of-range indices wrap around.
pub trait Localization: Send + Sync {
    fn day_name(&self, weekday: usize) -> &str;
    fn month_name(&self, month: usize) -> &str;
}

/// JSON request surface of a site API.
///
/// Non-2xx responses come back as `SiteError::Status` carrying the parsed
/// error body. `post_params` yields no payload on success.
#[async_trait]
pub trait JsonApi: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value>;
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<serde_json::Value>;
    async fn post_params(&self, url: &str, body: &str) -> Result<()>;
}
