//! Client-side HTML fragment loading.
//!
//! A [`FragmentLoader`] holds a URL and the text last fetched from it. Calling
//! [`FragmentLoader::load`] fetches the URL in the background; on success the text replaces
//! `content` and subscribers are notified, on failure an error is logged and `content` is
//! left as it was.

pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod source;

pub use api::fragment_api::{fragment, fragment_with_config};
pub use api::simple::init_logging;
pub use config::LoaderConfig;
pub use error::FragmentError;
pub use loader::fragment::FragmentLoader;
pub use source::http_source::HttpFragmentSource;
pub use source::traits::FragmentSource;
