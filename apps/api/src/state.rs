use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Every prompt goes through here. In production: Gemini behind the response cache.
    pub generator: Arc<dyn TextGenerator>,
    pub config: Config,
}
