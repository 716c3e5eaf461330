use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::instrument::WithSubscriber;
use tracing::{debug, error};

use crate::config::LOG_TARGET;
use crate::source::traits::FragmentSource;

/// A fragment URL plus the text most recently fetched from it.
///
/// `content` starts empty and is replaced on every successful load. Failed loads leave it
/// alone and only emit an `error!` event. Overlapping loads are not serialized, so the
/// load that *finishes* last decides the final value, regardless of call order.
pub struct FragmentLoader {
    url: String,
    content: watch::Sender<String>,
    source: Arc<dyn FragmentSource>,
}

impl FragmentLoader {
    pub fn new(url: impl Into<String>, source: Arc<dyn FragmentSource>) -> Arc<Self> {
        Arc::new(Self {
            url: url.into(),
            content: watch::Sender::new(String::new()),
            source,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Snapshot of the current content.
    pub fn content(&self) -> String {
        self.content.borrow().clone()
    }

    /// Receiver notified on every successful load, including ones that return the same text.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.content.subscribe()
    }

    /// Start a load on the ambient runtime and return immediately.
    ///
    /// The handle only signals completion; whether the load succeeded is visible through
    /// `content` and the log, nowhere else.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime. Use `load_in_place` from other executors.
    pub fn load(self: &Arc<Self>) -> JoinHandle<()> {
        let loader = Arc::clone(self);
        tokio::spawn(async move { loader.load_in_place().await }.with_current_subscriber())
    }

    /// Run the load pipeline inline.
    pub async fn load_in_place(&self) {
        debug!("fragment pending url={}", self.url);
        match self.source.fetch_text(&self.url).await {
            Ok(text) => {
                debug!("fragment loaded url={} bytes={}", self.url, text.len());
                self.content.send_replace(text);
            }
            Err(e) => {
                error!(target: LOG_TARGET, "Error loading fragment {}: {}", self.url, e);
            }
        }
    }
}
