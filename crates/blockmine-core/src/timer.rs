//! Microsecond-precision stopwatch for profiling parse and collect calls.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};

const MICROS_PER_SEC: u64 = 1_000_000;

/// An elapsed interval, normalised so that `micros < 1_000_000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Elapsed {
    pub secs: u64,
    pub micros: u32,
}

impl Elapsed {
    #[must_use]
    pub fn from_micros(total: u64) -> Self {
        Self {
            secs: total / MICROS_PER_SEC,
            micros: (total % MICROS_PER_SEC) as u32,
        }
    }

    #[must_use]
    pub fn as_micros(&self) -> u64 {
        self.secs * MICROS_PER_SEC + u64::from(self.micros)
    }
}

/// Renders as `<secs>.<millis>` with three zero-padded digits; sub-millisecond
/// precision is truncated.
impl std::fmt::Display for Elapsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:03}", self.secs, self.micros / 1000)
    }
}

/// Wall-clock stopwatch.
///
/// Not meant to be shared: start and stop take `&mut self`, so each
/// concurrent measurement needs its own instance.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    start_us: Option<u64>,
    stop_us: Option<u64>,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start timestamp and forget any previous stop.
    pub fn start(&mut self) -> Result<()> {
        self.start_us = Some(now_micros()?);
        self.stop_us = None;
        Ok(())
    }

    /// Record the stop timestamp.
    pub fn stop(&mut self) -> Result<()> {
        self.stop_us = Some(now_micros()?);
        Ok(())
    }

    /// Interval between the last `start()` and `stop()`.
    ///
    /// Fails instead of guessing when either timestamp is missing or the clock
    /// went backwards between the two readings.
    pub fn elapsed(&self) -> Result<Elapsed> {
        let start = self
            .start_us
            .ok_or_else(|| Error::Timer("elapsed time requested before start()".to_string()))?;
        let stop = self
            .stop_us
            .ok_or_else(|| Error::Timer("elapsed time requested before stop()".to_string()))?;
        let diff = stop.checked_sub(start).ok_or_else(|| {
            Error::Timer(format!(
                "stop timestamp {stop}us precedes start timestamp {start}us"
            ))
        })?;
        Ok(Elapsed::from_micros(diff))
    }

    /// `elapsed()` rendered as `<secs>.<millis>`.
    pub fn formatted_diff(&self) -> Result<String> {
        Ok(self.elapsed()?.to_string())
    }

    /// Run `f` between `start()` and `stop()`.
    pub fn time<T>(&mut self, f: impl FnOnce() -> T) -> Result<(T, Elapsed)> {
        self.start()?;
        let value = f();
        self.stop()?;
        Ok((value, self.elapsed()?))
    }
}

fn now_micros() -> Result<u64> {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::Clock(e.to_string()))?;
    u64::try_from(since_epoch.as_micros())
        .map_err(|_| Error::Clock("timestamp does not fit in 64 bits".to_string()))
}
