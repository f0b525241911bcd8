//! Configuration types for a monitoring run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::sample::DEFAULT_PAUSE_PROBABILITY;

/// Configuration for a monitoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Number of status updates to print.
    pub ticks: u32,
    /// Probability that a sampled download is paused.
    pub pause_probability: f64,
    /// Number of cells in the textual progress bar.
    pub bar_width: usize,
    /// Real delay between two updates.
    pub tick_delay: Duration,
    /// Interval announced to the user in the "next update" notice.
    pub advertised_interval: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            ticks: 5,
            pause_probability: DEFAULT_PAUSE_PROBABILITY,
            bar_width: 20,
            // Shortened for the demo; a real monitor would wait the advertised minute.
            tick_delay: Duration::from_secs(3),
            advertised_interval: Duration::from_secs(60),
        }
    }
}

impl MonitorConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from defaults.
    ///
    /// Nothing is read from disk or the environment.
    ///
    /// # Errors
    ///
    /// Currently infallible.
    pub fn load() -> crate::Result<Self> {
        Ok(Self::default())
    }

    /// Sets the number of updates.
    #[must_use]
    pub const fn with_ticks(mut self, ticks: u32) -> Self {
        self.ticks = ticks;
        self
    }

    /// Sets the real delay between updates.
    #[must_use]
    pub const fn with_tick_delay(mut self, delay: Duration) -> Self {
        self.tick_delay = delay;
        self
    }

    /// Sets the interval announced in the "next update" notice.
    #[must_use]
    pub const fn with_advertised_interval(mut self, interval: Duration) -> Self {
        self.advertised_interval = interval;
        self
    }

    /// Sets the probability of sampling a paused download.
    #[must_use]
    pub const fn with_pause_probability(mut self, probability: f64) -> Self {
        self.pause_probability = probability;
        self
    }

    /// Sets the progress bar width in cells.
    #[must_use]
    pub const fn with_bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_monitor_config() {
        let config = MonitorConfig::default();
        assert_eq!(config.ticks, 5);
        assert_eq!(config.tick_delay, Duration::from_secs(3));
        assert_eq!(config.advertised_interval, Duration::from_secs(60));
        assert!((config.pause_probability - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.bar_width, 20);
    }

    #[test]
    fn builder_pattern() {
        let config = MonitorConfig::new()
            .with_ticks(2)
            .with_tick_delay(Duration::from_millis(10))
            .with_advertised_interval(Duration::from_secs(5))
            .with_pause_probability(1.0)
            .with_bar_width(10);

        assert_eq!(config.ticks, 2);
        assert_eq!(config.tick_delay, Duration::from_millis(10));
        assert_eq!(config.advertised_interval, Duration::from_secs(5));
        assert!((config.pause_probability - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.bar_width, 10);
    }

    #[test]
    fn monitor_config_serializes_to_toml() {
        let config = MonitorConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: MonitorConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn monitor_config_load() {
        let config = MonitorConfig::load().unwrap();
        assert_eq!(config, MonitorConfig::default());
    }
}
