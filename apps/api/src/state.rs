use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend. `GeminiClient` in production, a recording double in tests.
    pub model: Arc<dyn TextModel>,
    pub config: Config,
}
