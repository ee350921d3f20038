//! Pi approximation strategies.
//!
//! Two strategies are supported: the `f64` library constant, and a finite
//! Leibniz series summation `4 * sum((-1)^i / (2i + 1))`. The series
//! converges slowly (error is roughly `1 / (2N)` after `N` terms), which
//! makes it a convenient stand-in for "real" CPU-bound work: a million terms
//! take a measurable fraction of a millisecond.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Deserialize;

/// Pi approximation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiMethod {
    /// Return `std::f64::consts::PI` directly.
    Constant,
    /// Sum the Leibniz series over a fixed number of terms.
    #[default]
    Leibniz,
}

impl fmt::Display for PiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PiMethod::Constant => write!(f, "constant"),
            PiMethod::Leibniz => write!(f, "leibniz"),
        }
    }
}

/// Result of a timed pi computation.
#[derive(Debug, Clone, Copy)]
pub struct PiComputation {
    /// The approximated value.
    pub value: f64,
    /// Wall-clock duration of the computation.
    pub duration: Duration,
}

/// Approximate pi with the given strategy, timing the computation with a
/// monotonic clock.
pub fn compute(method: PiMethod, terms: u64) -> PiComputation {
    let start = Instant::now();
    let value = match method {
        PiMethod::Constant => std::f64::consts::PI,
        PiMethod::Leibniz => leibniz_pi(terms),
    };
    let duration = start.elapsed();

    PiComputation { value, duration }
}

/// Sum the first `terms` terms of the Leibniz series and scale by 4.
pub fn leibniz_pi(terms: u64) -> f64 {
    let mut sum = 0.0_f64;
    let mut sign = 1.0_f64;

    for i in 0..terms {
        sum += sign / (2 * i + 1) as f64;
        sign = -sign;
    }

    4.0 * sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leibniz_converges_within_tolerance() {
        let value = leibniz_pi(1_000_000);
        assert!((value - std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn leibniz_partial_sums() {
        // 4 * (1) and 4 * (1 - 1/3)
        assert_eq!(leibniz_pi(1), 4.0);
        assert!((leibniz_pi(2) - 4.0 * (1.0 - 1.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn constant_method_is_exact() {
        let result = compute(PiMethod::Constant, 0);
        assert_eq!(result.value, std::f64::consts::PI);
    }

    #[test]
    fn computation_duration_is_nonnegative() {
        let result = compute(PiMethod::Leibniz, 10_000);
        assert!(result.duration.as_secs_f64() >= 0.0);
    }
}
