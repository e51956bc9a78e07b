use std::sync::Arc;
use std::time::Duration;

use crate::modules::people::core::ports::PersonStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PersonStore>,
    /// Bound applied to every store call made on behalf of a request.
    pub request_timeout: Duration,
}
