//! Console report: banners and the per-update status block.

use std::io::{self, Write};
use std::time::Duration;

use chrono::NaiveTime;
use console::style;

use crate::error::{Error, Result};
use crate::format::{estimate_remaining, format_clock, format_speed, progress_bar};
use crate::monitor::RunSummary;
use crate::sample::{DownloadSample, DownloadStatus};

const BANNER: &str = "============================================================";
const SEPARATOR: &str = "------------------------------------------------------------";
const TICK_SEPARATOR: &str = "----------------------------------------";

/// Work a real monitor would need, printed after the run.
pub const FUTURE_WORK: [&str; 3] = [
    "Parsing Steam logs (connection_log.txt)",
    "Reading configuration files in steamapps/",
    "Monitoring network activity of the Steam process",
];

/// Prints the opening banner, the Steam directory and the start time.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_header(out: &mut impl Write, steam_dir: &str, started: NaiveTime) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "STEAM DOWNLOAD MONITOR")?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "Steam path: {steam_dir}")?;
    writeln!(out, "Monitoring started: {}", format_clock(started))?;
    writeln!(out, "{SEPARATOR}")
}

/// Prints one status block.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_update(
    out: &mut impl Write,
    tick: u32,
    ticks: u32,
    now: NaiveTime,
    sample: &DownloadSample,
    bar_width: usize,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Update {tick}/{ticks}")?;
    writeln!(out, "Time: {}", format_clock(now))?;
    writeln!(out, "{TICK_SEPARATOR}")?;

    writeln!(out, "Game: {}", sample.game)?;
    writeln!(out, "Status: {}", styled_status(sample.status))?;
    writeln!(out, "Speed: {}", format_speed(sample.speed_mbps))?;
    writeln!(out, "Progress: {}%", sample.progress_percent)?;
    writeln!(
        out,
        "Downloaded: {} GB / {} GB",
        sample.downloaded_gb, sample.total_gb
    )?;
    writeln!(out, "[{}]", progress_bar(sample.progress_percent, bar_width))?;

    if let Some(remaining) = estimate_remaining(sample) {
        writeln!(out, "Estimated time remaining: {remaining}")?;
    }
    Ok(())
}

/// Prints the notice shown between two updates.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_next_update(out: &mut impl Write, interval: Duration) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Next update in {} seconds...", interval.as_secs())
}

/// Prints the closing banner and the list of unimplemented work.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_footer(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "MONITORING COMPLETE")?;
    writeln!(out, "{BANNER}")?;
    writeln!(out)?;
    writeln!(out, "Note:")?;
    writeln!(out, "A real implementation would require:")?;
    for (i, item) in FUTURE_WORK.iter().enumerate() {
        writeln!(out, "{}. {item}", i + 1)?;
    }
    Ok(())
}

/// Prints how a run ended: nothing on success, a distinct line for an
/// interrupt, and the error message otherwise.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome(out: &mut impl Write, result: &Result<RunSummary>) -> io::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(Error::Interrupted) => {
            writeln!(out)?;
            writeln!(out, "Monitoring interrupted")
        }
        Err(e) => {
            writeln!(out)?;
            writeln!(out, "Error: {e}")
        }
    }
}

fn styled_status(status: DownloadStatus) -> console::StyledObject<String> {
    let label = status.as_str().to_uppercase();
    match status {
        DownloadStatus::Downloading => style(label).green(),
        DownloadStatus::Paused => style(label).yellow(),
    }
}
