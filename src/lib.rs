//! steam-monitor - A console demo that prints simulated Steam download updates.
//!
//! Nothing here reads real download state: samples are random, and the only
//! contact with the system is a best-effort lookup of the Steam directory.
//!
//! # Example
//!
//! ```no_run
//! use steam_monitor::{MonitorConfig, run};
//!
//! # async fn example() -> steam_monitor::Result<()> {
//! let summary = run(MonitorConfig::default()).await?;
//! println!("Printed {} updates", summary.ticks);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod format;
pub mod fs;
pub mod locate;
pub mod monitor;
pub mod report;
pub mod sample;

// Re-export main types for convenience
pub use config::MonitorConfig;
pub use error::{Error, Result};
pub use format::{Remaining, estimate_remaining, format_speed, progress_bar};
pub use fs::{FileSystem, TokioFileSystem};
pub use locate::{Platform, UNKNOWN_STEAM_DIR, locate};
pub use monitor::{RunSummary, run, run_until, run_with};
pub use sample::{DownloadSample, DownloadStatus, Game, Sampler};
