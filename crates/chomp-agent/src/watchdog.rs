//! No-progress watchdog.

use crate::config::WatchdogConfig;

/// What the watchdog concluded after observing a tick's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchdogVerdict {
    /// The agent may keep going.
    Healthy,
    /// The agent has gone too long without scoring.
    Expired,
}

/// Counts consecutive ticks without a score increase.
///
/// The count resets whenever the score rises above the best seen so far.
/// With a stall limit of `n`, the first `n` stalled ticks pass and the next
/// one expires.
#[derive(Clone, Debug)]
pub struct Watchdog {
    config: WatchdogConfig,
    last_score: i64,
    stalled_ticks: u32,
}

impl Watchdog {
    /// A fresh watchdog; the starting score is 0.
    pub fn new(config: WatchdogConfig) -> Self {
        Self {
            config,
            last_score: 0,
            stalled_ticks: 0,
        }
    }

    /// Record this tick's score.
    pub fn observe(&mut self, score: i64) -> WatchdogVerdict {
        if score > self.last_score {
            self.last_score = score;
            self.stalled_ticks = 0;
        } else {
            self.stalled_ticks = self.stalled_ticks.saturating_add(1);
        }
        if self.stalled_ticks > self.config.stall_limit {
            WatchdogVerdict::Expired
        } else {
            WatchdogVerdict::Healthy
        }
    }

    /// Consecutive ticks without progress.
    pub fn stalled_ticks(&self) -> u32 {
        self.stalled_ticks
    }

    /// Best score seen.
    pub fn last_score(&self) -> i64 {
        self.last_score
    }
}
