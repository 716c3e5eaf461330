use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::traits::FragmentSource;
use crate::config::LoaderConfig;
use crate::error::FragmentError;

pub struct HttpFragmentSource {
    client: Client,
    base_url: Option<Url>,
}

impl HttpFragmentSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Resolve relative fragment URLs against `base`.
    pub fn with_base_url(base: &str) -> Result<Self, FragmentError> {
        let base_url = Url::parse(base).map_err(|e| FragmentError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            client: Client::new(),
            base_url: Some(base_url),
        })
    }

    pub fn from_config(config: &LoaderConfig) -> Result<Self, FragmentError> {
        match config.base_url.as_deref() {
            Some(base) => Self::with_base_url(base),
            None => Ok(Self::new()),
        }
    }

    pub fn resolve(&self, url: &str) -> Result<Url, FragmentError> {
        let invalid = |reason: String| FragmentError::InvalidUrl {
            url: url.to_string(),
            reason,
        };
        match Url::parse(url) {
            Ok(parsed) => Ok(parsed),
            Err(url::ParseError::RelativeUrlWithoutBase) => match &self.base_url {
                Some(base) => base.join(url).map_err(|e| invalid(e.to_string())),
                None => Err(invalid("relative URL without a base".to_string())),
            },
            Err(e) => Err(invalid(e.to_string())),
        }
    }
}

impl Default for HttpFragmentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FragmentSource for HttpFragmentSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FragmentError> {
        let target = self.resolve(url)?;
        let resp = self
            .client
            .get(target)
            .send()
            .await
            .map_err(FragmentError::Transport)?;

        let status = resp.status();
        debug!("fragment fetch status={} url={}", status.as_u16(), url);
        if !status.is_success() {
            return Err(FragmentError::HttpStatus {
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(FragmentError::BodyRead)
    }
}
