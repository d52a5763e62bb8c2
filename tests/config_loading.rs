use std::io::Write;

use flowgen_core::config::AppConfig;

#[test]
fn test_load_full_config_from_file() {
    let toml_content = r#"
[model]
provider = "openrouter"
model_id = "qwen/qwen-2.5-coder-32b-instruct"
api_key = "sk-test-key"
max_tokens = 4096
temperature = 0.3
timeout_secs = 30

[model.extra_headers]
HTTP-Referer = "https://example.com"

[gateway]
bind = "0.0.0.0:9999"

[codegen]
language = "TypeScript"
system_prompt = "You write small, typed modules."
"#;

    let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
    tmp.write_all(toml_content.as_bytes()).expect("write toml");

    let config = AppConfig::load(tmp.path()).expect("load config");

    assert_eq!(config.model.provider, "openrouter");
    assert_eq!(config.model.model_id, "qwen/qwen-2.5-coder-32b-instruct");
    assert_eq!(config.model.api_key, Some("sk-test-key".to_string()));
    assert_eq!(config.model.max_tokens, 4096);
    assert_eq!(config.model.timeout_secs, 30);
    assert_eq!(
        config.model.extra_headers.get("HTTP-Referer").map(String::as_str),
        Some("https://example.com")
    );
    assert_eq!(config.gateway.bind, "0.0.0.0:9999");
    assert_eq!(config.codegen.language, "TypeScript");
    assert_eq!(
        config.codegen.system_prompt.as_deref(),
        Some("You write small, typed modules.")
    );
}

#[test]
fn test_env_var_expansion_in_config() {
    std::env::set_var("FLOWGEN_TEST_API_KEY", "expanded-key-value");

    let toml_content = r#"
[model]
api_key = "${FLOWGEN_TEST_API_KEY}"
"#;

    let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
    tmp.write_all(toml_content.as_bytes()).expect("write toml");

    let config = AppConfig::load(tmp.path()).expect("load config");
    assert_eq!(config.model.api_key, Some("expanded-key-value".to_string()));

    std::env::remove_var("FLOWGEN_TEST_API_KEY");
}

#[test]
fn test_minimal_config_uses_defaults() {
    let toml_content = r#"
[gateway]
bind = "127.0.0.1:8080"
"#;

    let mut tmp = tempfile::NamedTempFile::new().expect("create temp file");
    tmp.write_all(toml_content.as_bytes()).expect("write toml");

    let config = AppConfig::load(tmp.path()).expect("load config");

    assert_eq!(config.gateway.bind, "127.0.0.1:8080");
    assert_eq!(config.model.provider, "groq");
    assert_eq!(config.model.model_id, "llama-3.3-70b-versatile");
    assert_eq!(config.model.max_tokens, 2000);
    assert!(config.model.base_url.is_none());
    assert!(config.model.extra_headers.is_empty());
    assert_eq!(config.codegen.language, "Python");
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = AppConfig::default();
    let rendered = toml::to_string_pretty(&config).expect("serialize");
    let parsed = AppConfig::parse(&rendered).expect("parse");
    assert_eq!(parsed.model.model_id, config.model.model_id);
    assert_eq!(parsed.gateway.bind, config.gateway.bind);
}
