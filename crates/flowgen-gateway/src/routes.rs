use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use flowgen_core::types::{Flowchart, FlowchartDraft, FlowchartPatch, WorkflowGraph};
use flowgen_engine::{describe, resolve};

use crate::error::ApiError;
use crate::state::AppState;

// GET /api/health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

// ── Flowchart CRUD ──────────────────────────────────────────────

// GET /api/flowcharts
pub async fn list_flowcharts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Flowchart>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

// POST /api/flowcharts
pub async fn create_flowchart(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<FlowchartDraft>,
) -> Result<(StatusCode, Json<Flowchart>), ApiError> {
    draft.validate()?;
    let chart = state.store.create(draft).await?;
    info!(id = %chart.id, name = %chart.name, "Flowchart created");
    Ok((StatusCode::CREATED, Json(chart)))
}

// GET /api/flowcharts/:id
pub async fn get_flowchart(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Flowchart>, ApiError> {
    Ok(Json(state.store.get(&id).await?))
}

// PUT /api/flowcharts/:id
pub async fn update_flowchart(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<FlowchartPatch>,
) -> Result<Json<Flowchart>, ApiError> {
    patch.validate()?;
    Ok(Json(state.store.update(&id, patch).await?))
}

// DELETE /api/flowcharts/:id
pub async fn delete_flowchart(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&id).await?;
    info!(id = %id, "Flowchart deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ── Workflow engine ─────────────────────────────────────────────

// POST /api/generate-code
pub async fn generate_code(
    State(state): State<Arc<AppState>>,
    Json(graph): Json<WorkflowGraph>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let code = flowgen_llm::generate_code(
        state.generator.as_ref(),
        &state.codegen,
        &graph.nodes,
        &graph.connections,
    )
    .await?;
    Ok(Json(serde_json::json!({ "code": code })))
}

// POST /api/execution-order
pub async fn execution_order(Json(graph): Json<WorkflowGraph>) -> Json<serde_json::Value> {
    let order = resolve(&graph.nodes, &graph.connections);
    Json(serde_json::json!({ "order": order }))
}

// POST /api/describe
pub async fn describe_workflow(Json(graph): Json<WorkflowGraph>) -> Json<serde_json::Value> {
    let description = describe(&graph.nodes, &graph.connections);
    Json(serde_json::json!({ "description": description }))
}
