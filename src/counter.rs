//! ## Stats counter
//!
//! Counts three landing page metrics up from zero to their targets in a
//! fixed number of equal steps, then stops.

use std::time::Duration;

use crate::{config::CounterOptions, timer::Animation};

/// One counted metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    /// Caption under the number.
    pub label: &'static str,
    /// Current value.
    pub value: u64,
    /// Final value.
    pub target: u64,
    /// Whether the value is shown with thousands separators.
    pub grouped: bool,
}

impl Metric {
    const fn new(label: &'static str, target: u64, grouped: bool) -> Self {
        Self {
            label,
            value: 0,
            target,
            grouped,
        }
    }

    /// Formats the current value for display.
    pub fn display(&self) -> String {
        if self.grouped {
            format_thousands(self.value)
        } else {
            self.value.to_string()
        }
    }
}

/// Linear counter over three metrics.
#[derive(Debug, Clone)]
pub struct StatsCounter {
    metrics: [Metric; 3],
    step: u32,
    steps: u32,
    interval: Duration,
}

impl StatsCounter {
    /// Constructs a new [`StatsCounter`] with every metric at zero.
    pub fn new(options: &CounterOptions) -> Self {
        let steps = options.steps.max(1);
        Self {
            metrics: [
                Metric::new("Students", options.students, true),
                Metric::new("Tutorials", options.tutorials, false),
                Metric::new("Code Examples", options.examples, true),
            ],
            step: 0,
            steps,
            interval: options.duration / steps,
        }
    }

    /// Returns the metrics.
    pub fn metrics(&self) -> &[Metric; 3] {
        &self.metrics
    }

    /// Returns the current values.
    pub fn values(&self) -> [u64; 3] {
        self.metrics.map(|metric| metric.value)
    }

    /// Returns `true` once every metric has reached its target.
    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }
}

impl Animation for StatsCounter {
    fn first_delay(&self) -> Duration {
        self.interval
    }

    fn step(&mut self) -> Option<Duration> {
        if self.is_done() {
            return None;
        }
        self.step += 1;
        for metric in &mut self.metrics {
            // Fits in u128 for any u64 target and u32 step count.
            let value = u128::from(metric.target) * u128::from(self.step) / u128::from(self.steps);
            metric.value = u64::try_from(value).unwrap_or(metric.target);
        }
        (!self.is_done()).then_some(self.interval)
    }
}

/// Formats `value` with a comma between groups of three digits.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }
    formatted
}
