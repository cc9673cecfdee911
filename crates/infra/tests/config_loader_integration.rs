//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;
use std::sync::Arc;

use authz_infra::{config, AuthzClients, TokenHolder};
use tempfile::NamedTempFile;

fn temp_config(contents: &str, extension: &str) -> std::path::PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let json_content = r#"{
        "endpoints": {
            "permission_management": "http://localhost:8081/permissionmanagement",
            "role_management": "http://localhost:8082/rolemanagement",
            "user_management": "http://localhost:8083/usermanagement"
        },
        "http": {
            "timeout_seconds": 15,
            "user_agent": "authz-integration"
        },
        "logging": {
            "level": "authz_core=debug",
            "json": true
        }
    }"#;
    let path = temp_config(json_content, "json");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load JSON config");

    assert_eq!(config.endpoints.permission_management, "http://localhost:8081/permissionmanagement");
    assert_eq!(config.endpoints.role_management, "http://localhost:8082/rolemanagement");
    assert_eq!(config.endpoints.user_management, "http://localhost:8083/usermanagement");
    assert_eq!(config.http.timeout_seconds, 15);
    assert_eq!(config.http.user_agent.as_deref(), Some("authz-integration"));
    assert_eq!(config.logging.level, "authz_core=debug");
    assert!(config.logging.json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_from_toml_file() {
    let toml_content = r#"
[endpoints]
permission_management = "http://pm.internal/permissionmanagement"
role_management = "http://rm.internal/rolemanagement"
user_management = "http://um.internal/usermanagement"
"#;
    let path = temp_config(toml_content, "toml");

    let config = config::load_from_file(Some(path.clone())).expect("Failed to load TOML config");

    assert_eq!(config.endpoints.role_management, "http://rm.internal/rolemanagement");
    assert_eq!(config.http.timeout_seconds, 30);
    assert_eq!(config.http.user_agent, None);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_loaded_config_builds_clients() {
    let toml_content = r#"
[endpoints]
permission_management = "http://localhost:8081/permissionmanagement"
role_management = "http://localhost:8082/rolemanagement"
user_management = "http://localhost:8083/usermanagement"

[http]
timeout_seconds = 3
"#;
    let path = temp_config(toml_content, "toml");
    let config = config::load_from_file(Some(path.clone())).expect("Failed to load TOML config");

    let clients = AuthzClients::from_config(&config, Arc::new(TokenHolder::default()));
    assert!(clients.is_ok(), "clients should build from loaded config: {:?}", clients.err());

    std::fs::remove_file(path).ok();
}

#[test]
fn test_invalid_toml_is_rejected() {
    let path = temp_config("[endpoints\npermission_management = ", "toml");

    let result = config::load_from_file(Some(path.clone()));
    assert!(result.is_err(), "Invalid TOML must not load");

    std::fs::remove_file(path).ok();
}
