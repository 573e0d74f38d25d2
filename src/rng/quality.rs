//! Digit-distribution audit for the key-stream generator.
//!
//! The recurrence behind legacy account keys ships with no verified
//! statistical guarantees: neither its period nor its digit balance was ever
//! characterized. This module records the hex digits the generator actually
//! emits into keys and summarizes their distribution, and provides a bounded
//! probe for state cycles. Tests pin the observed distribution; the CLI can
//! log the report on demand.

use std::collections::HashSet;
use tracing::{info, warn};

use crate::rng::WebkitRng;
use crate::utils::fraction_hex_digits;

/// Tally of emitted hex digits across generator output.
///
/// Digits are recorded exactly as the key synthesizer consumes them: the
/// terminating hex expansion of each fraction. Leading zeros of the 32-bit
/// state therefore count, while trailing zeros never occur.
#[derive(Debug, Clone)]
pub struct DigitHistogram {
    /// Occurrences per hex digit `0x0..=0xf`
    counts: [u64; 16],
    /// Total digits recorded
    observed: u64,
    /// Fractions sampled (each contributes up to 8 digits)
    samples: u64,
}

impl DigitHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self {
            counts: [0; 16],
            observed: 0,
            samples: 0,
        }
    }

    /// Record every digit of one fraction's hex expansion.
    pub fn record_fraction(&mut self, value: f64) {
        for c in fraction_hex_digits(value).chars() {
            if let Some(digit) = c.to_digit(16) {
                self.record_digit(digit as u8);
            }
        }
        self.samples += 1;
    }

    /// Record a single digit occurrence. Values above `0xf` are ignored.
    pub fn record_digit(&mut self, digit: u8) {
        if let Some(slot) = self.counts.get_mut(digit as usize) {
            *slot += 1;
            self.observed += 1;
        }
    }

    /// Total digits recorded so far.
    pub fn observed(&self) -> u64 {
        self.observed
    }

    /// Fractions sampled so far.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Per-digit occurrence counts, indexed by digit value.
    pub fn counts(&self) -> [u64; 16] {
        self.counts
    }

    /// Pearson chi-squared statistic against a uniform digit distribution
    /// (15 degrees of freedom). Zero when nothing was recorded.
    pub fn chi_squared(&self) -> f64 {
        if self.observed == 0 {
            return 0.0;
        }
        let expected = self.observed as f64 / 16.0;
        self.counts
            .iter()
            .map(|&c| {
                let delta = c as f64 - expected;
                delta * delta / expected
            })
            .sum()
    }

    /// Check that every hex digit occurred at least once.
    ///
    /// Returns a list of the missing digits in the error; only meaningful
    /// once a few hundred digits have been recorded.
    pub fn validate_coverage(&self) -> Result<(), String> {
        if self.observed == 0 {
            return Err("Histogram recorded no digits".to_string());
        }

        let missing: Vec<usize> = self
            .counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == 0)
            .map(|(digit, _)| digit)
            .collect();
        if !missing.is_empty() {
            return Err(format!("Digits never emitted: {missing:x?}"));
        }

        Ok(())
    }

    /// Human-readable distribution summary.
    pub fn summary(&self) -> String {
        let min = self.counts.iter().min().copied().unwrap_or(0);
        let max = self.counts.iter().max().copied().unwrap_or(0);
        format!(
            "{} digits over {} fractions: per-digit min {} / max {}, chi-squared {:.2}",
            self.observed,
            self.samples,
            min,
            max,
            self.chi_squared()
        )
    }

    /// Log the distribution report, warning on coverage gaps.
    pub fn log_report(&self) {
        info!("Digit audit: {}", self.summary());
        if let Err(e) = self.validate_coverage() {
            warn!("Digit audit incomplete: {}", e);
        }
    }
}

impl Default for DigitHistogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk the recurrence from `seed` until a state repeats, up to `max_steps`.
///
/// The recurrence is an invertible map on the 32-bit domain, so a trajectory
/// is a pure cycle: the first repeated state closes the cycle through the
/// starting seed, and the returned step count is that cycle's length. Returns
/// `None` when the budget runs out first, which is the expected outcome for
/// any budget that fits in a test run.
pub fn shortest_cycle(seed: u32, max_steps: u64) -> Option<u64> {
    let mut rng = WebkitRng::new();
    rng.set_seed(Some(seed));

    let mut seen = HashSet::new();
    seen.insert(rng.seed());

    for step in 1..=max_steps {
        rng.next_fraction();
        if !seen.insert(rng.seed()) {
            return Some(step);
        }
    }

    None
}
