//! Mocks and fixtures shared across Flowgen test suites.

use std::sync::Mutex;

use futures::future::BoxFuture;

use flowgen_core::error::{FlowgenError, Result};
use flowgen_core::traits::TextGenerator;
use flowgen_core::types::{Connection, Node, NodeMetadata};

/// A text generator that returns a canned reply and records every call.
pub struct MockGenerator {
    reply: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `(system, prompt)` pairs received so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl TextGenerator for MockGenerator {
    fn generate(&self, system: &str, prompt: &str) -> BoxFuture<'_, Result<String>> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        let reply = self.reply.clone();
        Box::pin(async move { Ok(reply) })
    }

    fn model(&self) -> &str {
        "mock"
    }
}

/// A text generator whose upstream always fails.
pub struct FailingGenerator {
    message: String,
}

impl FailingGenerator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl TextGenerator for FailingGenerator {
    fn generate(&self, _system: &str, _prompt: &str) -> BoxFuture<'_, Result<String>> {
        let message = self.message.clone();
        Box::pin(async move { Err(FlowgenError::TextGeneration(message)) })
    }
}

/// Fetch → Transform → Save, listed in execution order.
pub fn etl_nodes() -> Vec<Node> {
    vec![
        Node::new("a", "Fetch")
            .with_description("Download the daily export")
            .with_metadata(
                NodeMetadata::new()
                    .with_priority("high")
                    .with_tags(["io", "http"]),
            ),
        Node::new("b", "Transform"),
        Node::new("c", "Save").with_metadata(NodeMetadata::new().with_assignee("ops")),
    ]
}

/// Edges chaining [`etl_nodes`].
pub fn etl_connections() -> Vec<Connection> {
    vec![Connection::new("a", "b"), Connection::new("b", "c")]
}
