use std::sync::Arc;

use section_tracker::SectionRegistry;

use crate::contact::MessageRelay;
use crate::content::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<ProfileStore>,
    /// `None` when no relay access key is configured; the contact endpoint then
    /// answers with a configuration error instead of relaying.
    pub relay: Option<Arc<dyn MessageRelay>>,
    /// Navigation targets served to the client.
    pub sections: Arc<SectionRegistry>,
}
