//! steam-monitor - prints five simulated Steam download updates.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

use steam_monitor::{MonitorConfig, report};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = async { steam_monitor::run(MonitorConfig::load()?).await }.await;

    match &result {
        Ok(summary) => log::debug!("Run complete: {summary:?}"),
        Err(e) if e.is_interrupted() => {}
        Err(e) => log::error!("Monitoring failed: {e}"),
    }

    if let Err(e) = report::print_outcome(&mut std::io::stdout(), &result) {
        log::error!("Failed to report outcome: {e}");
    }
}
