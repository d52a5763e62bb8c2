use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FlowgenError, Result};

/// A single labeled step in a workflow graph.
///
/// Editor layout fields (`x`, `y`, `color`, ...) are kept in `extra` so they
/// survive a store round-trip untouched; nothing in Flowgen reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within one workflow.
    pub id: String,
    /// Display label used by the narrative.
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<NodeMetadata>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Node {
    /// Create a node with only an id and a title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the free-text description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the metadata block.
    pub fn with_metadata(mut self, metadata: NodeMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Optional per-node annotations. Only `priority`, `assignee` and `tags`
/// are rendered into the narrative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NodeMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// A directed dependency from one node to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Source node id.
    #[serde(rename = "fromNodeId")]
    pub from: String,
    /// Target node id.
    #[serde(rename = "toNodeId")]
    pub to: String,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: None,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// The nodes and connections of one workflow, as posted by a caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowGraph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

/// A named, stored workflow graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flowchart {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flowchart {
    /// Build a new record from a draft, assigning a fresh id and timestamps.
    pub fn from_draft(draft: FlowchartDraft, default_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name.unwrap_or(default_name),
            nodes: draft.nodes,
            connections: draft.connections,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update and bump `updated_at`.
    pub fn apply(&mut self, patch: FlowchartPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(nodes) = patch.nodes {
            self.nodes = nodes;
        }
        if let Some(connections) = patch.connections {
            self.connections = connections;
        }
        self.updated_at = Utc::now();
    }

    /// Borrow the graph part of this flowchart.
    pub fn graph(&self) -> (&[Node], &[Connection]) {
        (&self.nodes, &self.connections)
    }
}

/// Request body for creating a flowchart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowchartDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl FlowchartDraft {
    /// Reject a name that is present but blank. A missing name is fine.
    pub fn validate(&self) -> Result<()> {
        validate_name(self.name.as_deref())
    }
}

/// Request body for updating a flowchart. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowchartPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Option<Vec<Node>>,
    #[serde(default)]
    pub connections: Option<Vec<Connection>>,
}

impl FlowchartPatch {
    pub fn validate(&self) -> Result<()> {
        validate_name(self.name.as_deref())
    }
}

fn validate_name(name: Option<&str>) -> Result<()> {
    match name {
        Some(n) if n.trim().is_empty() => Err(FlowgenError::InvalidInput(
            "flowchart name must not be empty".into(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_from_editor_json() {
        let json = serde_json::json!({
            "id": "node_1",
            "x": 120, "y": 80, "width": 180, "height": 80,
            "title": "Fetch data",
            "type": "process",
            "color": "#3b82f6",
            "description": "Pull rows from the API",
            "metadata": {
                "priority": "high",
                "assignee": "",
                "tags": ["io", "api"],
                "notes": "rate limited"
            }
        });
        let node: Node = serde_json::from_value(json).unwrap();
        assert_eq!(node.id, "node_1");
        assert_eq!(node.title, "Fetch data");
        assert_eq!(node.extra.get("x"), Some(&serde_json::json!(120)));
        assert_eq!(node.extra.get("type"), Some(&serde_json::json!("process")));

        let meta = node.metadata.as_ref().unwrap();
        assert_eq!(meta.priority.as_deref(), Some("high"));
        assert_eq!(meta.tags.as_ref().unwrap(), &vec!["io", "api"]);
        assert_eq!(meta.notes.as_deref(), Some("rate limited"));

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["color"], "#3b82f6");
        assert_eq!(back["metadata"]["tags"][1], "api");
    }

    #[test]
    fn test_connection_field_names() {
        let conn: Connection =
            serde_json::from_str(r#"{"id":"c1","fromNodeId":"a","toNodeId":"b"}"#).unwrap();
        assert_eq!(conn.from, "a");
        assert_eq!(conn.to, "b");
        assert_eq!(conn.id.as_deref(), Some("c1"));

        let json = serde_json::to_value(Connection::new("x", "y")).unwrap();
        assert_eq!(json, serde_json::json!({"fromNodeId": "x", "toNodeId": "y"}));
    }

    #[test]
    fn test_workflow_graph_defaults() {
        let graph: WorkflowGraph = serde_json::from_str("{}").unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.connections.is_empty());
    }

    #[test]
    fn test_flowchart_from_draft_and_patch() {
        let draft = FlowchartDraft {
            name: None,
            nodes: vec![Node::new("a", "Fetch")],
            connections: vec![],
        };
        let mut chart = Flowchart::from_draft(draft, "Flowchart 1".into());
        assert_eq!(chart.name, "Flowchart 1");
        assert_eq!(chart.created_at, chart.updated_at);
        assert!(Uuid::parse_str(&chart.id).is_ok());

        chart.apply(FlowchartPatch {
            name: Some("Renamed".into()),
            ..Default::default()
        });
        assert_eq!(chart.name, "Renamed");
        assert_eq!(chart.nodes.len(), 1);
        assert!(chart.updated_at >= chart.created_at);
    }

    #[test]
    fn test_blank_names_rejected() {
        let draft = FlowchartDraft {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert!(matches!(draft.validate(), Err(FlowgenError::InvalidInput(_))));
        assert!(FlowchartDraft::default().validate().is_ok());

        let patch = FlowchartPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(FlowchartPatch::default().validate().is_ok());
    }
}
