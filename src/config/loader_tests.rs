//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_bookscroll_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("bookscroll") && path_str.ends_with("config.toml"),
        "Path should contain 'bookscroll' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("bookscroll_test_config.toml");

    let toml_content = r#"
endpoint = "http://localhost:8080/books"
page_size = 12
initial_page = 2
debounce_ms = 150
scroll_threshold = 10
skeleton_count = 3
default_view = "list"
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(config) for existing file");

    assert_eq!(
        config.endpoint.as_deref(),
        Some("http://localhost:8080/books")
    );
    assert_eq!(config.page_size, Some(12));
    assert_eq!(config.initial_page, Some(2));
    assert_eq!(config.debounce_ms, Some(150));
    assert_eq!(config.scroll_threshold, Some(10));
    assert_eq!(config.skeleton_count, Some(3));
    assert_eq!(config.default_view, Some(ViewMode::List));

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("bookscroll_invalid.toml");
    fs::write(&config_path, "page_size = [unclosed").expect("Failed to write test config");

    let result = load_config_file(&config_path);

    assert!(
        matches!(result, Err(ConfigError::ParseError { .. })),
        "Invalid TOML should be a parse error, got: {:?}",
        result
    );

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"theme = "dark""#);
    assert!(result.is_err(), "Unknown keys should be rejected");
}

#[test]
fn config_file_rejects_unknown_view_mode() {
    let result: Result<ConfigFile, _> = toml::from_str(r#"default_view = "table""#);
    assert!(result.is_err(), "Only grid and list are valid layouts");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        page_size: Some(20),
        default_view: Some(ViewMode::List),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.page_size, 20);
    assert_eq!(resolved.default_view, ViewMode::List);
    assert_eq!(resolved.endpoint, defaults.endpoint);
    assert_eq!(resolved.debounce_ms, defaults.debounce_ms);
}

#[test]
fn merge_config_clamps_zero_page_values() {
    let config_file = ConfigFile {
        page_size: Some(0),
        initial_page: Some(0),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.page_size, 1);
    assert_eq!(resolved.initial_page, 1);
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.page_size, 9);
    assert_eq!(config.initial_page, 1);
    assert_eq!(config.debounce_ms, 300);
    assert_eq!(config.skeleton_count, 6);
    assert_eq!(config.default_view, ViewMode::Grid);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(bookscroll_endpoint)]
fn apply_env_overrides_respects_endpoint_var() {
    let _guard = EnvGuard::new(ENDPOINT_ENV_VAR);
    env::set_var(ENDPOINT_ENV_VAR, "http://mirror.example/books");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.endpoint, "http://mirror.example/books");
}

#[test]
#[serial(bookscroll_endpoint)]
fn apply_env_overrides_ignores_blank_endpoint() {
    let _guard = EnvGuard::new(ENDPOINT_ENV_VAR);
    env::set_var(ENDPOINT_ENV_VAR, "   ");

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base);
}

#[test]
#[serial(bookscroll_endpoint)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(ENDPOINT_ENV_VAR);

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base);
}

#[test]
#[serial(bookscroll_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let temp_dir = env::temp_dir();

    let explicit_path = temp_dir.join("bookscroll_explicit.toml");
    fs::write(&explicit_path, "page_size = 3").expect("Failed to write explicit config");

    let env_path = temp_dir.join("bookscroll_env.toml");
    fs::write(&env_path, "page_size = 4").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .expect("explicit config should load")
        .expect("explicit config exists");

    assert_eq!(
        config.page_size,
        Some(3),
        "Should use explicit path, not BOOKSCROLL_CONFIG"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(bookscroll_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);

    let env_path = env::temp_dir().join("bookscroll_env_only.toml");
    fs::write(&env_path, r#"default_view = "list""#).expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None)
        .expect("env config should load")
        .expect("env config exists");

    assert_eq!(config.default_view, Some(ViewMode::List));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(bookscroll_config)]
fn load_config_with_precedence_rejects_empty_env_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    env::set_var(CONFIG_ENV_VAR, "");

    let result = load_config_with_precedence(None);

    assert!(matches!(result, Err(ConfigError::InvalidPath(_))));
}

#[test]
fn apply_cli_overrides_replaces_given_flags_only() {
    let base = ResolvedConfig::default();

    let result = apply_cli_overrides(
        base.clone(),
        CliOverrides {
            page_size: Some(25),
            view: Some(ViewMode::List),
            ..CliOverrides::default()
        },
    );

    assert_eq!(result.page_size, 25);
    assert_eq!(result.default_view, ViewMode::List);
    assert_eq!(result.endpoint, base.endpoint);
}

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), CliOverrides::default()), base);
}

#[test]
#[serial(bookscroll_endpoint)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new(ENDPOINT_ENV_VAR);

    let file = ConfigFile {
        endpoint: Some("http://file.example/books".to_string()),
        page_size: Some(15),
        ..ConfigFile::default()
    };
    let merged = merge_config(Some(file));
    assert_eq!(merged.endpoint, "http://file.example/books");

    env::set_var(ENDPOINT_ENV_VAR, "http://env.example/books");
    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.endpoint, "http://env.example/books");

    let final_config = apply_cli_overrides(
        with_env,
        CliOverrides {
            endpoint: Some("http://cli.example/books".to_string()),
            ..CliOverrides::default()
        },
    );

    assert_eq!(final_config.endpoint, "http://cli.example/books");
    assert_eq!(final_config.page_size, 15, "File value survives when not overridden");
}
