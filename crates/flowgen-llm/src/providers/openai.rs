use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use flowgen_core::config::ModelConfig;
use flowgen_core::error::{FlowgenError, Result};
use flowgen_core::traits::TextGenerator;

use super::presets::{build_extra_headers, get_preset, ProviderPreset};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI-compatible client. Works with OpenAI, Groq, Ollama, OpenRouter, etc.
pub struct OpenAiClient {
    http: Client,
    config: ModelConfig,
    url: String,
    api_key: Option<String>,
    extra_headers: Vec<(String, String)>,
}

impl OpenAiClient {
    pub fn new(config: ModelConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FlowgenError::Config(format!("HTTP client: {}", e)))?;

        let preset = get_preset(&config.provider);
        let url = config
            .base_url
            .clone()
            .or_else(|| preset.as_ref().map(|p| p.default_base_url.to_string()))
            .unwrap_or_else(|| OPENAI_API_URL.to_string());
        let api_key = resolve_api_key(&config, preset.as_ref());
        let extra_headers = build_extra_headers(preset.as_ref(), &config.extra_headers);

        if api_key.is_none() && preset.as_ref().is_some_and(|p| p.needs_api_key) {
            warn!(provider = %config.provider, "No API key configured, requests will likely be rejected");
        }

        Ok(Self {
            http,
            config,
            url,
            api_key,
            extra_headers,
        })
    }

    /// The chat-completions URL this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Configured key first, then the preset's environment variable.
///
/// An unexpanded `${VAR}` reference counts as no key.
fn resolve_api_key(config: &ModelConfig, preset: Option<&ProviderPreset>) -> Option<String> {
    config
        .api_key
        .clone()
        .filter(|k| !k.is_empty() && !k.starts_with("${"))
        .or_else(|| {
            preset
                .and_then(|p| p.api_key_env)
                .and_then(|var| std::env::var(var).ok())
                .filter(|k| !k.is_empty())
        })
}

// Request types
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<OaiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct OaiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// Response types
#[derive(Deserialize, Debug)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize, Debug)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Pull `choices[0].message.content` out of a chat-completions body.
pub(crate) fn parse_response(body: &str) -> Result<String> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| FlowgenError::TextGenerationParse(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| FlowgenError::TextGenerationParse("response has no message content".into()))
}

impl TextGenerator for OpenAiClient {
    fn generate(&self, system: &str, prompt: &str) -> BoxFuture<'_, Result<String>> {
        let system = system.to_string();
        let prompt = prompt.to_string();

        Box::pin(async move {
            let body = ChatRequest {
                model: &self.config.model_id,
                messages: vec![
                    OaiMessage {
                        role: "system",
                        content: &system,
                    },
                    OaiMessage {
                        role: "user",
                        content: &prompt,
                    },
                ],
                temperature: self.config.temperature,
                max_tokens: self.config.max_tokens,
            };

            let mut req = self.http.post(&self.url).json(&body);

            if let Some(api_key) = &self.api_key {
                req = req.header("Authorization", format!("Bearer {}", api_key));
            }

            for (k, v) in &self.extra_headers {
                req = req.header(k.as_str(), v.as_str());
            }

            debug!(model = %self.config.model_id, url = %self.url, "Sending chat completion");

            let response = req
                .send()
                .await
                .map_err(|e| FlowgenError::TextGeneration(e.to_string()))?;

            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|e| FlowgenError::TextGeneration(e.to_string()))?;

            if !status.is_success() {
                return Err(FlowgenError::TextGeneration(format!("HTTP {}: {}", status, text)));
            }

            parse_response(&text)
        })
    }

    fn model(&self) -> &str {
        &self.config.model_id
    }
}
