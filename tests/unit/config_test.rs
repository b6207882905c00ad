//! Tests for settings loading and env overlay

use serial_test::serial;

use optic::config::{DEFAULT_BASE_URL, DEFAULT_MODEL, Settings};

fn clear_env() {
    for var in ["PORT", "ANTHROPIC_API_KEY", "ANTHROPIC_MODEL", "ANTHROPIC_BASE_URL"] {
        unsafe { std::env::remove_var(var) };
    }
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let mut settings = Settings::default();
    settings.apply_env();

    assert_eq!(settings.port, 3000);
    assert_eq!(settings.workers, 4);
    assert_eq!(settings.model, DEFAULT_MODEL);
    assert_eq!(settings.max_tokens, 256);
    assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    assert_eq!(settings.timeout_secs, 30);
    assert!(settings.api_key.is_none());
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("ANTHROPIC_API_KEY", "sk-test");
        std::env::set_var("ANTHROPIC_MODEL", "claude-haiku-4-5");
        std::env::set_var("ANTHROPIC_BASE_URL", "http://localhost:9999");
    }

    let mut settings = Settings::default();
    settings.apply_env();
    clear_env();

    assert_eq!(settings.port, 8080);
    assert_eq!(settings.api_key.as_deref(), Some("sk-test"));
    assert_eq!(settings.model, "claude-haiku-4-5");
    assert_eq!(settings.base_url, "http://localhost:9999");
}

#[test]
#[serial]
fn test_invalid_port_is_ignored() {
    clear_env();
    unsafe { std::env::set_var("PORT", "not-a-port") };

    let mut settings = Settings::default();
    settings.apply_env();
    clear_env();

    assert_eq!(settings.port, 3000);
}

#[test]
#[serial]
fn test_empty_env_values_are_ignored() {
    clear_env();
    unsafe {
        std::env::set_var("ANTHROPIC_API_KEY", "");
        std::env::set_var("ANTHROPIC_MODEL", "");
    }

    let mut settings = Settings::default();
    settings.apply_env();
    clear_env();

    assert!(settings.api_key.is_none());
    assert_eq!(settings.model, DEFAULT_MODEL);
}

#[test]
fn test_settings_parse_from_toml() {
    let settings: Settings = toml::from_str(
        r#"
        port = 4000
        workers = 2
        model = "claude-sonnet-4-5"
        max_tokens = 512
        "#,
    )
    .unwrap();

    assert_eq!(settings.port, 4000);
    assert_eq!(settings.workers, 2);
    assert_eq!(settings.model, "claude-sonnet-4-5");
    assert_eq!(settings.max_tokens, 512);
    // unspecified fields fall back to defaults
    assert_eq!(settings.timeout_secs, 30);
}
