use futures::future::BoxFuture;
use tokio::sync::RwLock;
use tracing::debug;

use flowgen_core::error::{FlowgenError, Result};
use flowgen_core::traits::FlowchartStore;
use flowgen_core::types::{Flowchart, FlowchartDraft, FlowchartPatch};

/// In-process flowchart store. Contents live for the lifetime of the process.
pub struct MemoryStore {
    charts: RwLock<Vec<Flowchart>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            charts: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored flowcharts.
    pub async fn len(&self) -> usize {
        self.charts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.charts.read().await.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowchartStore for MemoryStore {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Flowchart>>> {
        Box::pin(async move { Ok(self.charts.read().await.clone()) })
    }

    fn create(&self, draft: FlowchartDraft) -> BoxFuture<'_, Result<Flowchart>> {
        Box::pin(async move {
            let mut charts = self.charts.write().await;
            let default_name = format!("Flowchart {}", charts.len() + 1);
            let chart = Flowchart::from_draft(draft, default_name);
            debug!(id = %chart.id, name = %chart.name, "Flowchart created");
            charts.push(chart.clone());
            Ok(chart)
        })
    }

    fn get(&self, id: &str) -> BoxFuture<'_, Result<Flowchart>> {
        let id = id.to_string();
        Box::pin(async move {
            self.charts
                .read()
                .await
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or(FlowgenError::NotFound(id))
        })
    }

    fn update(&self, id: &str, patch: FlowchartPatch) -> BoxFuture<'_, Result<Flowchart>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut charts = self.charts.write().await;
            let chart = charts
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or_else(|| FlowgenError::NotFound(id.clone()))?;
            chart.apply(patch);
            debug!(id = %chart.id, "Flowchart updated");
            Ok(chart.clone())
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, Result<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut charts = self.charts.write().await;
            let pos = charts
                .iter()
                .position(|c| c.id == id)
                .ok_or_else(|| FlowgenError::NotFound(id.clone()))?;
            charts.remove(pos);
            debug!(id = %id, "Flowchart deleted");
            Ok(())
        })
    }
}
