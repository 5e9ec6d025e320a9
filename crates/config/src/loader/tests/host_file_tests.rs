//! Host config file loading and precedence tests.

use secrecy::ExposeSecret;
use serial_test::serial;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::{cleared_env, env_lock};
use crate::constants::*;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

fn write_host_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, body).unwrap();
    path
}

const HOST_CONFIG: &str = r#"{
    "Target": "https://api.host.example.com/",
    "AccessToken": "bearer host-token",
    "SSLDisabled": true
}"#;

#[test]
fn test_host_file_values_applied() {
    let dir = TempDir::new().unwrap();
    let path = write_host_config(dir.path(), HOST_CONFIG);

    let config = ConfigLoader::new()
        .with_config_path(path)
        .from_host_file()
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.connection.api_endpoint, "https://api.host.example.com");
    assert_eq!(config.auth.access_token.expose_secret(), "host-token");
    assert!(config.connection.skip_verify);
}

#[test]
fn test_missing_host_file_is_ignored() {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.json"))
        .from_host_file()
        .unwrap();
    assert!(matches!(loader.build(), Err(ConfigError::MissingApiEndpoint)));
}

#[test]
fn test_malformed_host_file_errors() {
    let dir = TempDir::new().unwrap();
    let path = write_host_config(dir.path(), "[1, 2");
    let result = ConfigLoader::new().with_config_path(path).from_host_file();
    assert!(matches!(result, Err(ConfigError::HostFileParse { .. })));
}

#[test]
#[serial]
fn test_env_overrides_host_file() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    let path = write_host_config(dir.path(), HOST_CONFIG);

    let mut vars = cleared_env();
    vars.push((ENV_ACCESS_TOKEN, Some("env-token")));
    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new()
            .with_config_path(path.clone())
            .from_host_file()
            .unwrap()
            .from_env()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.connection.api_endpoint, "https://api.host.example.com");
        assert_eq!(config.auth.access_token.expose_secret(), "env-token");
    });
}

#[test]
#[serial]
fn test_host_file_found_via_cf_home() {
    let _lock = env_lock().lock().unwrap();
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(CF_CONFIG_DIR)).unwrap();
    write_host_config(&dir.path().join(CF_CONFIG_DIR), HOST_CONFIG);

    let cf_home = dir.path().to_string_lossy().to_string();
    let mut vars: Vec<(&str, Option<String>)> = cleared_env()
        .into_iter()
        .map(|(k, v)| (k, v.map(str::to_string)))
        .collect();
    vars.retain(|(k, _)| *k != CF_HOME_VAR);
    vars.push((CF_HOME_VAR, Some(cf_home)));

    temp_env::with_vars(vars, || {
        let config = ConfigLoader::new()
            .from_host_file()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.connection.api_endpoint, "https://api.host.example.com");
    });
}
