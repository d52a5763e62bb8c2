/// Default system prompt for code generation.
pub const CODEGEN_SYSTEM_PROMPT: &str = "You are a code generation expert. Generate clean, well-documented Python code based on flowchart descriptions.";

/// System prompt for `language`. The default prompt names Python, so any
/// other language is substituted in.
pub fn codegen_system_prompt(language: &str) -> String {
    CODEGEN_SYSTEM_PROMPT.replace("Python", language)
}

/// Wrap a workflow narrative into the user prompt for code generation.
pub fn build_codegen_prompt(narrative: &str, language: &str) -> String {
    format!(
        "Generate {lang} code for this workflow:\n\n\
         {narrative}\n\n\
         Requirements:\n\
         - Create a complete {lang} script\n\
         - Include proper error handling\n\
         - Add comments explaining each step\n\
         - Use appropriate data structures\n\
         - Follow the execution order shown in the flowchart",
        lang = language,
        narrative = narrative,
    )
}
