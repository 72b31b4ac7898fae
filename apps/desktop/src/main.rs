use anyhow::{Context, Result};
use clap::Parser;
use client_core::{FixedPasswordVerifier, ProductApp};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod ui;

use config::{load_settings, Args};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    settings.apply_args(&args);

    let filter = EnvFilter::try_new(&settings.log_filter)
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(store_scope = %settings.store_scope, "starting product gate");

    let mut app = ProductApp::new(
        settings.store_scope,
        FixedPasswordVerifier::new(settings.secret_password),
    );
    ui::app::run(
        &mut app,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        ui::password::for_stdin(),
    )
    .await
}
