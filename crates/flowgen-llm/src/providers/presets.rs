use std::collections::HashMap;

/// A named provider preset for OpenAI-compatible APIs.
pub struct ProviderPreset {
    pub default_base_url: &'static str,
    pub needs_api_key: bool,
    /// Environment variable consulted when no `api_key` is configured.
    pub api_key_env: Option<&'static str>,
    pub extra_headers: &'static [(&'static str, &'static str)],
}

/// Look up a provider preset by name.
pub fn get_preset(provider: &str) -> Option<ProviderPreset> {
    match provider {
        "groq" => Some(ProviderPreset {
            default_base_url: "https://api.groq.com/openai/v1/chat/completions",
            needs_api_key: true,
            api_key_env: Some("GROQ_API_KEY"),
            extra_headers: &[],
        }),
        "openai" => Some(ProviderPreset {
            default_base_url: "https://api.openai.com/v1/chat/completions",
            needs_api_key: true,
            api_key_env: Some("OPENAI_API_KEY"),
            extra_headers: &[],
        }),
        "ollama" => Some(ProviderPreset {
            default_base_url: "http://localhost:11434/v1/chat/completions",
            needs_api_key: false,
            api_key_env: None,
            extra_headers: &[],
        }),
        "openrouter" => Some(ProviderPreset {
            default_base_url: "https://openrouter.ai/api/v1/chat/completions",
            needs_api_key: true,
            api_key_env: Some("OPENROUTER_API_KEY"),
            extra_headers: &[("X-Title", "Flowgen")],
        }),
        "together" => Some(ProviderPreset {
            default_base_url: "https://api.together.xyz/v1/chat/completions",
            needs_api_key: true,
            api_key_env: Some("TOGETHER_API_KEY"),
            extra_headers: &[],
        }),
        "mistral" => Some(ProviderPreset {
            default_base_url: "https://api.mistral.ai/v1/chat/completions",
            needs_api_key: true,
            api_key_env: Some("MISTRAL_API_KEY"),
            extra_headers: &[],
        }),
        "deepseek" => Some(ProviderPreset {
            default_base_url: "https://api.deepseek.com/v1/chat/completions",
            needs_api_key: true,
            api_key_env: Some("DEEPSEEK_API_KEY"),
            extra_headers: &[],
        }),
        _ => None,
    }
}

/// Build extra headers from a preset + user config overrides.
pub fn build_extra_headers(
    preset: Option<&ProviderPreset>,
    user_headers: &HashMap<String, String>,
) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = preset
        .map(|p| p.extra_headers)
        .unwrap_or_default()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    for (k, v) in user_headers {
        // User overrides take precedence
        if let Some(pos) = headers.iter().position(|(hk, _)| hk == k) {
            headers[pos].1 = v.clone();
        } else {
            headers.push((k.clone(), v.clone()));
        }
    }

    headers
}

/// List all known preset provider names.
pub fn all_preset_names() -> &'static [&'static str] {
    &[
        "groq",
        "openai",
        "ollama",
        "openrouter",
        "together",
        "mistral",
        "deepseek",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_name_has_a_preset() {
        for name in all_preset_names() {
            assert!(get_preset(name).is_some(), "missing preset for {}", name);
        }
        assert!(get_preset("nonsense").is_none());
    }

    #[test]
    fn test_groq_preset() {
        let preset = get_preset("groq").unwrap();
        assert!(preset.default_base_url.starts_with("https://api.groq.com/"));
        assert_eq!(preset.api_key_env, Some("GROQ_API_KEY"));
    }

    #[test]
    fn test_user_headers_override_preset() {
        let preset = get_preset("openrouter").unwrap();
        let mut user = HashMap::new();
        user.insert("X-Title".to_string(), "Custom".to_string());
        user.insert("X-Extra".to_string(), "1".to_string());

        let headers = build_extra_headers(Some(&preset), &user);
        assert_eq!(headers.len(), 2);
        assert!(headers.contains(&("X-Title".to_string(), "Custom".to_string())));
        assert!(headers.contains(&("X-Extra".to_string(), "1".to_string())));
    }

    #[test]
    fn test_headers_without_preset() {
        let headers = build_extra_headers(None, &HashMap::new());
        assert!(headers.is_empty());
    }
}
