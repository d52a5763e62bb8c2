use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tracing::info;

use flowgen_core::config::{CodegenConfig, GatewayConfig};
use flowgen_core::traits::{FlowchartStore, TextGenerator};

use crate::routes;
use crate::state::AppState;

/// Build the API router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(routes::health))
        // Flowchart CRUD
        .route(
            "/api/flowcharts",
            get(routes::list_flowcharts).post(routes::create_flowchart),
        )
        .route(
            "/api/flowcharts/{id}",
            get(routes::get_flowchart)
                .put(routes::update_flowchart)
                .delete(routes::delete_flowchart),
        )
        // Workflow engine
        .route("/api/generate-code", post(routes::generate_code))
        .route("/api/execution-order", post(routes::execution_order))
        .route("/api/describe", post(routes::describe_workflow))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// HTTP gateway server built on axum.
pub struct GatewayServer {
    config: GatewayConfig,
    codegen: CodegenConfig,
    store: Arc<dyn FlowchartStore>,
    generator: Arc<dyn TextGenerator>,
}

impl GatewayServer {
    pub fn new(
        config: GatewayConfig,
        codegen: CodegenConfig,
        store: Arc<dyn FlowchartStore>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            config,
            codegen,
            store,
            generator,
        }
    }

    /// Run the gateway server until the cancellation token is triggered.
    pub async fn run(&self, shutdown: CancellationToken) -> anyhow::Result<()> {
        let state = Arc::new(AppState {
            config: self.config.clone(),
            codegen: self.codegen.clone(),
            store: self.store.clone(),
            generator: self.generator.clone(),
        });

        let app = router(state);

        let listener = TcpListener::bind(&self.config.bind).await?;
        info!(bind = %self.config.bind, model = %self.generator.model(), "Gateway listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        info!("Gateway shut down");
        Ok(())
    }
}
