use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::news::HeadlineSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; profiles and API keys live only inside a request.
#[derive(Clone)]
pub struct AppState {
    /// Default: GoogleNewsSource.
    pub news: Arc<dyn HeadlineSource>,
    /// Default: LlmClient (Together.ai).
    pub llm: Arc<dyn TextGenerator>,
}
