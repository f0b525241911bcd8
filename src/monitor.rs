//! The monitoring loop: locate Steam once, then print a fixed number of
//! simulated updates separated by a cancellable delay.

use std::io::{self, Write};

use chrono::Local;
use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::config::MonitorConfig;
use crate::error::{Error, Result};
use crate::fs::{FileSystem, TokioFileSystem};
use crate::locate::locate;
use crate::report::{print_footer, print_header, print_next_update, print_update};
use crate::sample::Sampler;

/// What a completed run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of updates printed.
    pub ticks: u32,
    /// Number of delays waited out between updates.
    pub delays: u32,
}

// ============================================================================
// Loop
// ============================================================================

/// Runs the monitoring loop against injected collaborators.
///
/// Cancelling `cancel` ends the run with [`Error::Interrupted`] at the next
/// tick boundary, or immediately while waiting between ticks.
///
/// # Errors
///
/// Returns [`Error::Interrupted`] when cancelled, or [`Error::Io`] if writing
/// the report fails.
pub async fn run_with<R: Rng, W: Write>(
    config: &MonitorConfig,
    sampler: &mut Sampler<R>,
    fs: &dyn FileSystem,
    out: &mut W,
    cancel: &CancellationToken,
) -> Result<RunSummary> {
    let steam_dir = locate(fs).await;
    print_header(out, &steam_dir, Local::now().time())?;
    out.flush()?;

    let mut summary = RunSummary::default();

    for tick in 1..=config.ticks {
        if cancel.is_cancelled() {
            return Err(Error::Interrupted);
        }

        let sample = sampler.sample();
        log::debug!("Update {tick}/{}: {sample:?}", config.ticks);
        print_update(
            out,
            tick,
            config.ticks,
            Local::now().time(),
            &sample,
            config.bar_width,
        )?;
        summary.ticks += 1;

        if tick < config.ticks {
            print_next_update(out, config.advertised_interval)?;
            out.flush()?;

            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    log::info!("Interrupted after update {tick}/{}", config.ticks);
                    return Err(Error::Interrupted);
                }
                () = tokio::time::sleep(config.tick_delay) => {}
            }
            summary.delays += 1;
        }
    }

    // An interrupt during the last update still counts.
    if cancel.is_cancelled() {
        return Err(Error::Interrupted);
    }

    print_footer(out)?;
    out.flush()?;
    log::info!("Monitoring finished after {} update(s)", summary.ticks);
    Ok(summary)
}

// ============================================================================
// Entry point
// ============================================================================

/// Runs the monitor on stdout with a fresh random source, stopping on Ctrl-C.
///
/// # Errors
///
/// Returns [`Error::Interrupted`] on Ctrl-C, [`Error::Signal`] if the
/// interrupt handler cannot be installed, or [`Error::Io`] if stdout fails.
pub async fn run(config: MonitorConfig) -> Result<RunSummary> {
    let interrupt = listen_for_interrupt()?;
    run_until(config, &mut io::stdout(), interrupt).await
}

/// Runs the monitor on `out` until it completes or `interrupt` resolves.
///
/// `interrupt` is watched from a separate task, so it fires even while the
/// loop is printing.
///
/// # Errors
///
/// Returns [`Error::Interrupted`] once `interrupt` has resolved, or
/// [`Error::Io`] if writing to `out` fails.
pub async fn run_until<W, F>(
    config: MonitorConfig,
    out: &mut W,
    interrupt: F,
) -> Result<RunSummary>
where
    W: Write,
    F: Future<Output = ()> + Send + 'static,
{
    let cancel = CancellationToken::new();

    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            interrupt.await;
            log::info!("Interrupt received");
            cancel.cancel();
        })
    };

    let mut sampler = Sampler::from_os_rng(config.pause_probability);
    let result = run_with(&config, &mut sampler, &TokioFileSystem::new(), out, &cancel).await;

    watcher.abort();
    result
}

/// Registers the interrupt handler now and returns a future that resolves on
/// the first interrupt.
#[cfg(unix)]
fn listen_for_interrupt() -> Result<impl Future<Output = ()> + Send + 'static> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt()).map_err(|e| Error::Signal(e.to_string()))?;
    Ok(async move {
        sigint.recv().await;
    })
}

#[cfg(windows)]
fn listen_for_interrupt() -> Result<impl Future<Output = ()> + Send + 'static> {
    let mut ctrl_c =
        tokio::signal::windows::ctrl_c().map_err(|e| Error::Signal(e.to_string()))?;
    Ok(async move {
        ctrl_c.recv().await;
    })
}

#[cfg(not(any(unix, windows)))]
fn listen_for_interrupt() -> Result<impl Future<Output = ()> + Send + 'static> {
    Ok(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    })
}
