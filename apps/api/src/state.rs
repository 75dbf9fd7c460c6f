use crate::compiler::LatexCompiler;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Nothing here is mutable — requests share no state beyond
/// these cheap-to-clone handles.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub compiler: LatexCompiler,
    /// Kept on state for handlers that need runtime knobs (origins,
    /// timeouts) beyond what the components captured at startup.
    #[allow(dead_code)]
    pub config: Config,
}
