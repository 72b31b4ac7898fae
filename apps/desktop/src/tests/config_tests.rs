use std::{collections::HashMap, fs};

use clap::Parser;

use super::*;

fn no_env(_: &str) -> Option<String> {
    None
}

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings =
        load_settings_with(&dir.path().join("absent.toml"), no_env).expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.secret_password, "123");
    assert_eq!(settings.store_scope, StoreScope::PerUser);
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.toml");
    fs::write(
        &path,
        "secret_password = \"hunter2\"\nstore_scope = \"session\"\nlog_filter = \"debug\"\n",
    )
    .expect("write config");

    let settings = load_settings_with(&path, no_env).expect("settings");
    assert_eq!(settings.secret_password, "hunter2");
    assert_eq!(settings.store_scope, StoreScope::Session);
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn env_overrides_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.toml");
    fs::write(&path, "secret_password = \"from-file\"\nstore_scope = \"session\"\n")
        .expect("write config");

    let env = env_from(&[
        ("APP__SECRET_PASSWORD", "from-env"),
        ("APP__STORE_SCOPE", "per-user"),
    ]);
    let settings = load_settings_with(&path, env).expect("settings");
    assert_eq!(settings.secret_password, "from-env");
    assert_eq!(settings.store_scope, StoreScope::PerUser);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.toml");
    fs::write(&path, "store_scope = \"everywhere\"\n").expect("write config");

    let err = load_settings_with(&path, no_env).expect_err("bad scope");
    assert!(err.to_string().contains("failed to parse config file"));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.toml");
    fs::write(&path, "bind_addr = \"127.0.0.1:8443\"\n").expect("write config");

    assert!(load_settings_with(&path, no_env).is_err());
}

#[test]
fn bad_scope_in_env_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let env = env_from(&[("APP__STORE_SCOPE", "global")]);
    let err = load_settings_with(&dir.path().join("absent.toml"), env).expect_err("bad scope");
    assert!(err.to_string().contains("APP__STORE_SCOPE"));
}

#[test]
fn flags_override_env_and_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("products.toml");
    fs::write(&path, "store_scope = \"per_user\"\nlog_filter = \"warn\"\n").expect("write config");

    let env = env_from(&[("APP__STORE_SCOPE", "per_user"), ("APP__LOG_FILTER", "error")]);
    let mut settings = load_settings_with(&path, env).expect("settings");

    let args = Args::try_parse_from([
        "product-gate",
        "--store-scope",
        "session",
        "--log-filter",
        "debug",
    ])
    .expect("args");
    settings.apply_args(&args);

    assert_eq!(settings.store_scope, StoreScope::Session);
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.secret_password, "123");
}

#[test]
fn absent_flags_keep_loaded_values() {
    let env = env_from(&[("APP__STORE_SCOPE", "session")]);
    let dir = tempfile::tempdir().expect("tempdir");
    let mut settings = load_settings_with(&dir.path().join("absent.toml"), env).expect("settings");

    let args = Args::try_parse_from(["product-gate"]).expect("args");
    settings.apply_args(&args);

    assert_eq!(settings.store_scope, StoreScope::Session);
    assert_eq!(settings.log_filter, "info");
    assert_eq!(args.config, PathBuf::from("products.toml"));
}

#[test]
fn store_scope_flag_accepts_dashed_name() {
    let args = Args::try_parse_from(["product-gate", "--store-scope", "per-user"]).expect("args");
    assert_eq!(args.store_scope, Some(StoreScope::PerUser));

    assert!(Args::try_parse_from(["product-gate", "--store-scope", "global"]).is_err());
}
