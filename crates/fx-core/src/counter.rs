use crate::constants::{
    COUNTER_DURATION_MS, COUNTER_EASE_POWER, COUNTER_INITIAL_DELAY_MS, COUNTER_STAGGER_MS,
};
use crate::ease::{clamp01, ease_out};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("missing data-target attribute")]
    Missing,
    #[error("data-target is not a non-negative integer: {0:?}")]
    Invalid(String),
}

/// Read a counter's target value from its raw attribute text.
pub fn parse_target(raw: Option<&str>) -> Result<u32, TargetError> {
    let raw = raw.ok_or(TargetError::Missing)?;
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| TargetError::Invalid(trimmed.to_string()))
}

#[derive(Clone, Debug)]
pub struct CounterOptions {
    pub duration_ms: f64,
    pub ease_power: u32,
    pub initial_delay_ms: u32,
    pub stagger_ms: u32,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            duration_ms: COUNTER_DURATION_MS,
            ease_power: COUNTER_EASE_POWER,
            initial_delay_ms: COUNTER_INITIAL_DELAY_MS,
            stagger_ms: COUNTER_STAGGER_MS,
        }
    }
}

/// Time-based animation of a displayed integer from 0 to `target`.
///
/// Sampling at increasing elapsed times yields a monotone non-decreasing
/// sequence that never exceeds `target`; at or past the nominal duration the
/// value is exactly `target`.
#[derive(Clone, Copy, Debug)]
pub struct Counter {
    pub target: u32,
    duration_ms: f64,
    power: u32,
}

impl Counter {
    pub fn new(target: u32, opts: &CounterOptions) -> Self {
        Self {
            target,
            duration_ms: opts.duration_ms,
            power: opts.ease_power,
        }
    }

    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        if elapsed_ms >= self.duration_ms {
            // snap, do not trust float rounding at the boundary
            return self.target;
        }
        let p = clamp01(elapsed_ms / self.duration_ms);
        (ease_out(p, self.power) * self.target as f64).floor() as u32
    }

    pub fn done_at(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

/// Start delay for the counter at `index` so a row of counters animates in
/// sequence rather than all at once.
pub fn start_delay_ms(index: usize, opts: &CounterOptions) -> u32 {
    opts.initial_delay_ms + (index as u32) * opts.stagger_ms
}
