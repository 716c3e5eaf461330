use async_trait::async_trait;

use crate::error::FragmentError;

/// Fetch primitive behind a loader: GET `url`, reject non-2xx, return the body as text.
#[async_trait]
pub trait FragmentSource: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FragmentError>;
}
