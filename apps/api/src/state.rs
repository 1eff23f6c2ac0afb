use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The service is stateless per request: the statement catalog is a static
/// slice and nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
