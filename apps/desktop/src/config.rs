use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::DEFAULT_SECRET_PASSWORD;
use serde::Deserialize;
use storage::StoreScope;

#[derive(Parser, Debug)]
#[command(name = "product-gate")]
pub struct Args {
    #[arg(long, default_value = "products.toml")]
    pub config: PathBuf,
    /// per-user or session
    #[arg(long)]
    pub store_scope: Option<StoreScope>,
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub secret_password: String,
    pub store_scope: StoreScope,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            secret_password: DEFAULT_SECRET_PASSWORD.into(),
            store_scope: StoreScope::PerUser,
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    /// Command-line flags take priority over file and environment values.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(scope) = args.store_scope {
            self.store_scope = scope;
        }
        if let Some(filter) = &args.log_filter {
            self.log_filter = filter.clone();
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    secret_password: Option<String>,
    store_scope: Option<StoreScope>,
    log_filter: Option<String>,
}

pub fn load_settings(path: &Path) -> Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

/// Defaults, then the optional TOML file, then `APP__*` variables from `env`.
pub fn load_settings_with(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            if let Some(v) = file_cfg.secret_password {
                settings.secret_password = v;
            }
            if let Some(v) = file_cfg.store_scope {
                settings.store_scope = v;
            }
            if let Some(v) = file_cfg.log_filter {
                settings.log_filter = v;
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
    }

    if let Some(v) = env("APP__SECRET_PASSWORD") {
        settings.secret_password = v;
    }
    if let Some(v) = env("APP__STORE_SCOPE") {
        settings.store_scope = v
            .parse()
            .context("invalid APP__STORE_SCOPE environment variable")?;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
