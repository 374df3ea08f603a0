//! 配置功能测试

use std::time::Duration;
use transchain::domain::error::AppError;
use transchain::infrastructure::config::{load_config_from, parse_config, write_config_sample, Config};
use transchain::infrastructure::providers::{lingva, mymemory};
use transchain::state::AppState;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.target_language, "en");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.theme, "default");
    assert!(config.rtl_marks);
    assert!(config.http_proxy.is_none());
    assert!(config.providers.lingva.enabled);
    assert!(config.providers.mymemory.enabled);
    assert!(config.providers.libretranslate.enabled);
    assert_eq!(config.providers.lingva.base_url.as_deref(), Some("https://lingva.ml"));
}

#[test]
fn test_logging_defaults() {
    let config = Config::default();

    assert!(config.logging.enable);
    assert_eq!(config.logging.level, "WARN");
    assert!(config.logging.path.is_none());
}

#[test]
fn test_config_toml_format() {
    let toml_content = r#"
target_language = "fr"
timeout_secs = 4
theme = "mono"
rtl_marks = false

[logging]
enable = true
path = "/tmp/test.log"
level = "DEBUG"

[providers.mymemory]
enabled = false
base_url = "http://localhost:9000"
email = "me@example.com"

[providers.libretranslate]
base_url = "http://localhost:5000"
api_key = "secret"
"#;

    let config = parse_config(toml_content).unwrap();

    assert_eq!(config.target_language, "fr");
    assert_eq!(config.timeout_secs, 4);
    assert_eq!(config.theme, "mono");
    assert!(!config.rtl_marks);
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/test.log"));

    assert!(!config.providers.mymemory.enabled);
    assert_eq!(config.providers.mymemory.email.as_deref(), Some("me@example.com"));
    assert!(config.providers.libretranslate.enabled);
    assert_eq!(config.providers.libretranslate.api_key.as_deref(), Some("secret"));
    // Untouched sections keep their defaults
    assert!(config.providers.lingva.enabled);
    assert_eq!(config.providers.lingva.base_url.as_deref(), Some("https://lingva.ml"));
}

#[test]
fn test_disabling_provider_without_base_url() {
    let toml_content = r#"
timeout_secs = 4

[providers.lingva]
enabled = false
"#;

    let config = parse_config(toml_content).unwrap();

    assert!(!config.providers.lingva.enabled);
    assert!(config.providers.lingva.base_url.is_none());
    assert_eq!(config.timeout_secs, 4);

    let state = AppState::with_client(config, reqwest::Client::new());
    assert_eq!(
        state.fallback_chain(None).provider_names(),
        vec!["MyMemory", "LibreTranslate"]
    );

    // Loading the same document from disk keeps the user's settings
    let dir = std::env::temp_dir().join(format!("transchain-disable-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, toml_content).unwrap();

    let loaded = load_config_from(&path).unwrap();
    assert!(!loaded.providers.lingva.enabled);
    assert_eq!(loaded.timeout_secs, 4);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_omitted_base_url_uses_public_endpoint() {
    let config = parse_config("[providers.mymemory]\nemail = \"me@example.com\"\n").unwrap();
    let provider = &config.providers.mymemory;

    assert!(provider.enabled);
    assert_eq!(
        provider.base_url_or(mymemory::DEFAULT_BASE_URL),
        "https://api.mymemory.translated.net"
    );

    let blank = parse_config("[providers.lingva]\nbase_url = \"\"\n").unwrap();
    assert_eq!(
        blank.providers.lingva.base_url_or(lingva::DEFAULT_BASE_URL),
        "https://lingva.ml"
    );
}

#[test]
fn test_zero_timeout_is_rejected() {
    let err = parse_config("timeout_secs = 0").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = std::env::temp_dir().join(format!("transchain-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.toml");
    std::fs::write(&path, "timeout_secs = \"ten\"").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.timeout_secs, 10);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_generated_sample_round_trips() {
    let dir = std::env::temp_dir().join(format!("transchain-sample-{}", std::process::id()));
    let path = dir.join("config.toml");

    write_config_sample(&path).unwrap();
    let config = load_config_from(&path).unwrap();
    assert_eq!(config.target_language, Config::default().target_language);
    assert_eq!(
        config.providers.libretranslate.base_url.as_deref(),
        Some("https://libretranslate.com")
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_timeout_from_config_reaches_chain() {
    let config = parse_config("timeout_secs = 3").unwrap();
    let state = AppState::new(config).unwrap();

    assert_eq!(state.fallback_chain(None).attempt_timeout(), Duration::from_secs(3));
}
