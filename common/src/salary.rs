//! Point estimate of a vacancy salary from its reported range.

use crate::SalaryBounds;

/// Share of the upper bound assumed when only the upper bound is known.
const UPPER_ONLY_FACTOR: f64 = 0.8;
/// Markup over the lower bound assumed when only the lower bound is known.
const LOWER_ONLY_FACTOR: f64 = 1.2;

/// Estimates a single salary figure from `bounds`.
///
/// A zero bound counts as unknown. All branches round half away from zero and
/// saturate at the `i64` range.
pub fn estimate(bounds: SalaryBounds) -> Option<i64> {
    let lower = bounds.lower.filter(|value| *value != 0);
    let upper = bounds.upper.filter(|value| *value != 0);

    let estimate = match (lower, upper) {
        (None, None) => return None,
        (None, Some(upper)) => upper as f64 * UPPER_ONLY_FACTOR,
        (Some(lower), None) => lower as f64 * LOWER_ONLY_FACTOR,
        (Some(lower), Some(upper)) => (lower as f64 + upper as f64) / 2.0,
    };

    Some(estimate.round() as i64)
}
