//! `tenbasics`: tensor basics walkthrough
//!
//! Prints the walkthrough to stdout and logs to stderr. See
//! [`tenbasics::config`] for the environment variables it reads.

use anyhow::Result;
use tenbasics::config::DemoConfig;
use tenbasics::demo;
use tenbasics::tracing_support::{init_tracing, TracingConfig};
use tenbasics_device::DeviceManager;

fn main() -> Result<()> {
    init_tracing(TracingConfig::default())?;

    let config = DemoConfig::from_env()?;
    let manager = DeviceManager::global();
    tracing::debug!(devices = ?manager.list_devices(), "device registry ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = demo::run(&config, manager, &mut out)?;
    tracing::info!(transferred = report.transferred, "walkthrough finished");
    Ok(())
}
