use std::sync::Arc;

use eventboard_core::{EventGateway, EventStore};
use tokio::sync::RwLock;
use url::Url;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn EventGateway>,
    /// Last-fetched events and the current filter. Locked only for reducer steps,
    /// never across a gateway call.
    pub store: Arc<RwLock<EventStore>>,
    /// Base URL of the public event pages, used for sharing links
    pub public_url: Url,
}

impl AppState {
    pub fn new(gateway: Arc<dyn EventGateway>, public_url: Url) -> Self {
        AppState {
            gateway,
            store: Arc::new(RwLock::new(EventStore::new())),
            public_url,
        }
    }
}
