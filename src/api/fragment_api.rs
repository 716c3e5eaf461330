use std::sync::Arc;

use crate::config::LoaderConfig;
use crate::error::FragmentError;
use crate::loader::fragment::FragmentLoader;
use crate::source::http_source::HttpFragmentSource;

/// Loader for `url` over a default HTTP client. `url` must be absolute.
pub fn fragment(url: impl Into<String>) -> Arc<FragmentLoader> {
    FragmentLoader::new(url, Arc::new(HttpFragmentSource::new()))
}

/// Loader for `url`, resolving relative URLs against `config.base_url`.
pub fn fragment_with_config(
    url: impl Into<String>,
    config: &LoaderConfig,
) -> Result<Arc<FragmentLoader>, FragmentError> {
    let source = HttpFragmentSource::from_config(config)?;
    Ok(FragmentLoader::new(url, Arc::new(source)))
}
