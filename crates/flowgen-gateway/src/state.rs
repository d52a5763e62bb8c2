use std::sync::Arc;

use flowgen_core::config::{CodegenConfig, GatewayConfig};
use flowgen_core::traits::{FlowchartStore, TextGenerator};

/// Shared application state for axum handlers.
pub struct AppState {
    pub config: GatewayConfig,
    pub codegen: CodegenConfig,
    pub store: Arc<dyn FlowchartStore>,
    pub generator: Arc<dyn TextGenerator>,
}
