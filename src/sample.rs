//! Synthetic download state.
//!
//! Every field of a [`DownloadSample`] is drawn independently, so the
//! downloaded/total sizes need not agree with the progress percentage.

use std::fmt;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Titles the sampler picks from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    CounterStrike2,
    Dota2,
    ApexLegends,
    BaldursGate3,
}

impl Game {
    /// Every title, in display order.
    pub const ALL: [Self; 4] = [
        Self::CounterStrike2,
        Self::Dota2,
        Self::ApexLegends,
        Self::BaldursGate3,
    ];

    /// Returns the store title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CounterStrike2 => "Counter-Strike 2",
            Self::Dota2 => "Dota 2",
            Self::ApexLegends => "Apex Legends",
            Self::BaldursGate3 => "Baldur's Gate 3",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Whether a download is currently transferring data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DownloadStatus {
    Downloading,
    Paused,
}

impl DownloadStatus {
    /// Returns the lowercase status name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Downloading => "downloading",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One simulated status update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DownloadSample {
    /// Title being downloaded.
    pub game: Game,
    /// Current status.
    pub status: DownloadStatus,
    /// Transfer speed in MB/s; exactly zero while paused.
    pub speed_mbps: f64,
    /// Reported progress in percent.
    pub progress_percent: u32,
    /// Downloaded size in GB.
    pub downloaded_gb: u32,
    /// Total size in GB.
    pub total_gb: u32,
}

/// Value ranges for one status.
struct Ranges {
    progress: RangeInclusive<u32>,
    downloaded: RangeInclusive<u32>,
    total: RangeInclusive<u32>,
}

const DOWNLOADING: Ranges = Ranges {
    progress: 10..=95,
    downloaded: 10..=80,
    total: 50..=150,
};

const PAUSED: Ranges = Ranges {
    progress: 10..=90,
    downloaded: 5..=30,
    total: 40..=120,
};

/// Speed range of an active download, in MB/s.
pub const SPEED_RANGE: RangeInclusive<f64> = 5.0..=60.0;

/// Default probability that a sample is paused.
pub const DEFAULT_PAUSE_PROBABILITY: f64 = 0.2;

/// Generates [`DownloadSample`]s from an injected random source.
#[derive(Debug, Clone)]
pub struct Sampler<R> {
    rng: R,
    pause_probability: f64,
}

impl<R: Rng> Sampler<R> {
    /// Creates a sampler drawing from `rng`.
    ///
    /// `pause_probability` is clamped to `[0, 1]`; NaN falls back to
    /// [`DEFAULT_PAUSE_PROBABILITY`].
    #[must_use]
    pub fn new(rng: R, pause_probability: f64) -> Self {
        let pause_probability = if pause_probability.is_nan() {
            DEFAULT_PAUSE_PROBABILITY
        } else {
            pause_probability.clamp(0.0, 1.0)
        };
        Self {
            rng,
            pause_probability,
        }
    }

    /// Draws the next sample.
    pub fn sample(&mut self) -> DownloadSample {
        let game = Game::ALL[self.rng.random_range(0..Game::ALL.len())];

        if self.rng.random_bool(self.pause_probability) {
            return self.draw(game, DownloadStatus::Paused, 0.0, &PAUSED);
        }

        let speed = round_tenths(self.rng.random_range(SPEED_RANGE));
        self.draw(game, DownloadStatus::Downloading, speed, &DOWNLOADING)
    }

    fn draw(
        &mut self,
        game: Game,
        status: DownloadStatus,
        speed_mbps: f64,
        ranges: &Ranges,
    ) -> DownloadSample {
        DownloadSample {
            game,
            status,
            speed_mbps,
            progress_percent: self.rng.random_range(ranges.progress.clone()),
            downloaded_gb: self.rng.random_range(ranges.downloaded.clone()),
            total_gb: self.rng.random_range(ranges.total.clone()),
        }
    }
}

impl Sampler<StdRng> {
    /// Creates a sampler seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_os_rng(pause_probability: f64) -> Self {
        Self::new(StdRng::from_os_rng(), pause_probability)
    }
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
