use tracing::{info, warn};

use flowgen_core::config::CodegenConfig;
use flowgen_core::error::Result;
use flowgen_core::traits::TextGenerator;
use flowgen_core::types::{Connection, Node};
use flowgen_engine::{build_codegen_prompt, codegen_system_prompt, describe};

/// Describe the workflow and ask `generator` to turn it into code.
///
/// The narrative is forwarded unmodified inside the prompt.
pub async fn generate_code(
    generator: &dyn TextGenerator,
    codegen: &CodegenConfig,
    nodes: &[Node],
    connections: &[Connection],
) -> Result<String> {
    let narrative = describe(nodes, connections);
    let prompt = build_codegen_prompt(&narrative, &codegen.language);
    let system = codegen
        .system_prompt
        .clone()
        .unwrap_or_else(|| codegen_system_prompt(&codegen.language));

    info!(
        nodes = nodes.len(),
        connections = connections.len(),
        model = %generator.model(),
        language = %codegen.language,
        "Generating code from workflow"
    );

    generator.generate(&system, &prompt).await.map_err(|e| {
        warn!(error = %e, "Code generation failed");
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowgen_core::error::FlowgenError;
    use flowgen_engine::CODEGEN_SYSTEM_PROMPT;
    use flowgen_test_utils::{etl_connections, etl_nodes, FailingGenerator, MockGenerator};

    #[tokio::test]
    async fn test_prompt_carries_narrative() {
        let mock = MockGenerator::new("def main(): pass");
        let code = generate_code(&mock, &CodegenConfig::default(), &etl_nodes(), &etl_connections())
            .await
            .unwrap();
        assert_eq!(code, "def main(): pass");

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        let (system, prompt) = &calls[0];
        assert_eq!(system, CODEGEN_SYSTEM_PROMPT);
        assert!(prompt.starts_with("Generate Python code for this workflow:\n\nWorkflow Description:\n\n"));
        assert!(prompt.contains("Step 1: Fetch\n   Description: Download the daily export\n"));
        assert!(prompt.contains("- Fetch -> Transform\n- Transform -> Save\n"));
    }

    #[tokio::test]
    async fn test_empty_workflow_still_generates() {
        let mock = MockGenerator::new("# nothing to do");
        generate_code(&mock, &CodegenConfig::default(), &[], &[])
            .await
            .unwrap();
        let (_, prompt) = &mock.calls()[0];
        assert!(prompt.contains("Empty workflow with no nodes."));
    }

    #[tokio::test]
    async fn test_custom_system_prompt_and_language() {
        let mock = MockGenerator::new("fn main() {}");
        let codegen = CodegenConfig {
            language: "Rust".into(),
            system_prompt: Some("Write idiomatic code.".into()),
        };
        generate_code(&mock, &codegen, &etl_nodes(), &etl_connections())
            .await
            .unwrap();
        let (system, prompt) = &mock.calls()[0];
        assert_eq!(system, "Write idiomatic code.");
        assert!(prompt.starts_with("Generate Rust code"));
    }

    #[tokio::test]
    async fn test_upstream_error_propagates() {
        let failing = FailingGenerator::new("HTTP 503: overloaded");
        let err = generate_code(&failing, &CodegenConfig::default(), &etl_nodes(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, FlowgenError::TextGeneration(_)));
        assert_eq!(err.to_string(), "Text generation error: HTTP 503: overloaded");
    }
}
