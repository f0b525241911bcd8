//! Formatting helpers for speeds, progress bars and remaining time.

use std::fmt;

use chrono::NaiveTime;

use crate::sample::{DownloadSample, DownloadStatus};

/// Glyph for a filled progress bar cell.
pub const FILLED: char = '#';
/// Glyph for an empty progress bar cell.
pub const EMPTY: char = '-';

/// Formats a speed given in MB/s (e.g. "0 MB/s", "42.4 MB/s", "1.5 GB/s").
#[must_use]
pub fn format_speed(mbps: f64) -> String {
    if mbps == 0.0 {
        "0 MB/s".to_string()
    } else if mbps > 1000.0 {
        format!("{:.1} GB/s", mbps / 1000.0)
    } else {
        format!("{mbps:.1} MB/s")
    }
}

/// Renders `percent` as a bar of `width` cells.
///
/// At the default width of 20 every cell stands for 5%. Values above 100
/// fill the whole bar.
#[must_use]
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent as usize).saturating_mul(width) / 100;
    let filled = filled.min(width);
    let mut bar = String::with_capacity(width);
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, width - filled));
    bar
}

/// Approximate time left on a download.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Remaining {
    /// More than one hour left, in hours.
    Hours(f64),
    /// At most one hour left, in minutes.
    Minutes(f64),
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours(h) => write!(f, "{h:.1} hours"),
            Self::Minutes(m) => write!(f, "{m:.0} minutes"),
        }
    }
}

/// Estimates the time left for an active download.
///
/// Returns `None` unless the sample is downloading at a non-zero speed with
/// data still outstanding. The `speed * 3.6` divisor is a rough conversion
/// kept as-is so estimates stay comparable with earlier output.
#[must_use]
pub fn estimate_remaining(sample: &DownloadSample) -> Option<Remaining> {
    if sample.status != DownloadStatus::Downloading || sample.speed_mbps <= 0.0 {
        return None;
    }
    let remaining_gb = i64::from(sample.total_gb) - i64::from(sample.downloaded_gb);
    if remaining_gb <= 0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let hours = remaining_gb as f64 / (sample.speed_mbps * 3.6);
    if hours > 1.0 {
        Some(Remaining::Hours(hours))
    } else {
        Some(Remaining::Minutes(hours * 60.0))
    }
}

/// Formats a wall-clock time as `HH:MM:SS`.
#[must_use]
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Game;

    fn downloading(speed_mbps: f64, downloaded_gb: u32, total_gb: u32) -> DownloadSample {
        DownloadSample {
            game: Game::Dota2,
            status: DownloadStatus::Downloading,
            speed_mbps,
            progress_percent: 50,
            downloaded_gb,
            total_gb,
        }
    }

    fn count(bar: &str, glyph: char) -> usize {
        bar.chars().filter(|&c| c == glyph).count()
    }

    #[test]
    fn format_speed_units() {
        assert_eq!(format_speed(0.0), "0 MB/s");
        assert_eq!(format_speed(1500.0), "1.5 GB/s");
        assert_eq!(format_speed(42.36), "42.4 MB/s");
        assert_eq!(format_speed(5.0), "5.0 MB/s");
    }

    #[test]
    fn format_speed_boundary_stays_in_mb() {
        assert_eq!(format_speed(1000.0), "1000.0 MB/s");
        assert_eq!(format_speed(1000.1), "1.0 GB/s");
    }

    #[test]
    fn progress_bar_half() {
        let bar = progress_bar(50, 20);
        assert_eq!(count(&bar, FILLED), 10);
        assert_eq!(count(&bar, EMPTY), 10);
        assert_eq!(bar, "##########----------");
    }

    #[test]
    fn progress_bar_edges() {
        assert_eq!(count(&progress_bar(0, 20), FILLED), 0);
        assert_eq!(count(&progress_bar(95, 20), FILLED), 19);
        assert_eq!(count(&progress_bar(99, 20), FILLED), 19);
        assert_eq!(count(&progress_bar(100, 20), FILLED), 20);
    }

    #[test]
    fn progress_bar_overflow_is_clamped() {
        assert_eq!(progress_bar(250, 20), "#".repeat(20));
        assert_eq!(progress_bar(u32::MAX, 20).len(), 20);
    }

    #[test]
    fn progress_bar_custom_width() {
        assert_eq!(progress_bar(50, 10), "#####-----");
        assert_eq!(progress_bar(50, 0), "");
    }

    #[test]
    fn remaining_in_minutes() {
        // 50 / (50 * 3.6) = 0.278 h = 16.7 min
        let remaining = estimate_remaining(&downloading(50.0, 50, 100)).unwrap();
        assert!(matches!(remaining, Remaining::Minutes(_)));
        assert_eq!(remaining.to_string(), "17 minutes");
    }

    #[test]
    fn remaining_in_hours() {
        // 140 / (10 * 3.6) = 3.89 h
        let remaining = estimate_remaining(&downloading(10.0, 10, 150)).unwrap();
        assert!(matches!(remaining, Remaining::Hours(_)));
        assert_eq!(remaining.to_string(), "3.9 hours");
    }

    #[test]
    fn exactly_one_hour_is_minutes() {
        // 36 / (10 * 3.6) = 1.0 h
        let remaining = estimate_remaining(&downloading(10.0, 14, 50)).unwrap();
        assert_eq!(remaining.to_string(), "60 minutes");
    }

    #[test]
    fn no_estimate_when_paused() {
        let sample = DownloadSample {
            status: DownloadStatus::Paused,
            speed_mbps: 0.0,
            ..downloading(0.0, 10, 100)
        };
        assert_eq!(estimate_remaining(&sample), None);
    }

    #[test]
    fn no_estimate_when_nothing_left() {
        assert_eq!(estimate_remaining(&downloading(20.0, 80, 80)), None);
        assert_eq!(estimate_remaining(&downloading(20.0, 80, 50)), None);
    }

    #[test]
    fn no_estimate_at_zero_speed() {
        assert_eq!(estimate_remaining(&downloading(0.0, 10, 100)), None);
    }

    #[test]
    fn format_clock_pads() {
        let t = NaiveTime::from_hms_opt(7, 5, 9).unwrap();
        assert_eq!(format_clock(t), "07:05:09");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn format_speed_never_panics(speed in 0.0f64..1e12) {
                let _ = format_speed(speed);
            }

            #[test]
            fn progress_bar_has_fixed_width(percent in any::<u32>(), width in 0usize..200) {
                prop_assert_eq!(progress_bar(percent, width).chars().count(), width);
            }

            #[test]
            fn progress_bar_cells_are_five_percent(percent in 0u32..=100) {
                let bar = progress_bar(percent, 20);
                prop_assert_eq!(count(&bar, FILLED), (percent / 5) as usize);
            }

            #[test]
            fn estimate_only_with_data_left(
                speed in 5.0f64..60.0,
                downloaded in 10u32..=80,
                total in 50u32..=150,
            ) {
                let estimate = estimate_remaining(&downloading(speed, downloaded, total));
                prop_assert_eq!(estimate.is_some(), total > downloaded);
            }
        }
    }
}
