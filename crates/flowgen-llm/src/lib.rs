pub mod codegen;
pub mod providers;

use std::sync::Arc;

use flowgen_core::config::ModelConfig;
use flowgen_core::error::Result;
use flowgen_core::traits::TextGenerator;

pub use codegen::generate_code;
pub use providers::openai::OpenAiClient;

/// Create a text generator for the configured provider.
///
/// Every supported provider speaks the OpenAI chat-completions protocol.
pub fn create_generator(config: &ModelConfig) -> Result<Arc<dyn TextGenerator>> {
    Ok(Arc::new(OpenAiClient::new(config.clone())?))
}
