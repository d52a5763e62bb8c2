use futures::future::BoxFuture;

use crate::error::Result;
use crate::types::{Flowchart, FlowchartDraft, FlowchartPatch};

/// Text generation backend — sends a prompt to an external model.
pub trait TextGenerator: Send + Sync + 'static {
    /// Generate text for `prompt`, steered by a system instruction.
    fn generate(&self, system: &str, prompt: &str) -> BoxFuture<'_, Result<String>>;

    /// Model identifier, for logging.
    fn model(&self) -> &str {
        "unknown"
    }
}

/// Flowchart store — owns named workflow graphs.
pub trait FlowchartStore: Send + Sync + 'static {
    /// All flowcharts, in creation order.
    fn list(&self) -> BoxFuture<'_, Result<Vec<Flowchart>>>;

    /// Create a flowchart from a draft and return the stored record.
    fn create(&self, draft: FlowchartDraft) -> BoxFuture<'_, Result<Flowchart>>;

    /// Fetch one flowchart. Unknown ids yield `FlowgenError::NotFound`.
    fn get(&self, id: &str) -> BoxFuture<'_, Result<Flowchart>>;

    /// Apply a partial update. Unknown ids yield `FlowgenError::NotFound`.
    fn update(&self, id: &str, patch: FlowchartPatch) -> BoxFuture<'_, Result<Flowchart>>;

    /// Remove a flowchart. Unknown ids yield `FlowgenError::NotFound`.
    fn delete(&self, id: &str) -> BoxFuture<'_, Result<()>>;
}
