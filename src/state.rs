use std::sync::Arc;

use crate::dataset::Dataset;
use crate::services::MetadataService;

/// Shared application state
///
/// The dataset is read-only after load; the metadata service guards its own
/// cache internally, so the whole state is cheaply cloneable per request.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub metadata: MetadataService,
}
