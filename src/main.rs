use crate::adapters::{AdapterRegistry, SessionSettings};
use crate::app_config::{AppConfig, DEFAULT_LOG_DIRECTORY};
use crate::cli::Args;
use crate::domain::{CredentialStore, DeviceRecord, Family};
use crate::loader::{LoadError, load_credentials, load_inventory, select_address};
use crate::log_sink::{FileLogSinks, LogSinks};
use crate::orchestrator::Orchestrator;
use crate::reachability::PingProber;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

mod adapters;
mod app_config;
mod cli;
mod domain;
mod loader;
mod log_sink;
mod orchestrator;
mod provisioning;
mod reachability;
mod run_report;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    let args = Args::parse();
    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = match AppConfig::load().map_err(LoadError::from) {
        Ok(config) => config,
        Err(e) => {
            FileLogSinks::new(Path::new(DEFAULT_LOG_DIRECTORY)).general().error(&e.to_string());
            return Err(e.into());
        }
    };
    info!("✅  Loaded configuration");

    let sinks = Arc::new(FileLogSinks::new(config.logging().directory()));
    let (inventory, credentials) = match load(&args, &config) {
        Ok(loaded) => loaded,
        Err(e) => {
            sinks.general().error(&e.to_string());
            return Err(e.into());
        }
    };
    info!("✅  Loaded {} phone(s)", inventory.len());

    let registry = AdapterRegistry::new(&SessionSettings::from_config(&config));
    let orchestrator = Orchestrator::new(Arc::new(PingProber::from_config(&config)), registry, sinks);

    let report = orchestrator.run(&args.action, &inventory, &credentials).await;
    for family in [Family::Polycom, Family::Yealink, Family::Cisco] {
        let failures = report.failures_for(&family).count();
        if failures > 0 {
            warn!("⚠️ {} {} phone(s) need attention, see {}_errors.log", failures, family, family.key());
        }
    }
    for (device, outcome) in report.failures() {
        warn!("⚠️ {} ({} {}): {}", device.address(), device.family(), device.model(), outcome);
    }
    info!("🏁 Finished, {}", report.summary());

    Ok(())
}

fn load(args: &Args, config: &AppConfig) -> Result<(Vec<DeviceRecord>, CredentialStore), LoadError> {
    let inventory_path = args.csv.as_deref().unwrap_or(config.paths().inventory());
    let credentials_path = args.credentials.as_deref().unwrap_or(config.paths().credentials());

    let mut inventory = load_inventory(inventory_path)?;
    if let Some(address) = &args.ip {
        inventory = select_address(inventory, address)?;
    }

    let credentials = load_credentials(credentials_path)?.with_overrides(args.username.clone(), args.password.clone());
    Ok((inventory, credentials))
}
