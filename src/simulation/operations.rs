//! Time-column transforms applied while building tables
//!
//! Simulation output stores time as seconds since the Unix epoch, and the
//! first stored timestamp is a placeholder that has to be rebuilt from the
//! next two steps.

use crate::errors::{AtmoError, Result};
use chrono::{DateTime, Utc};
use ndarray::{ArrayView1, ArrayViewMut1};

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

/// Linear extrapolation of the first time step from rows 1 and 2.
#[must_use]
pub fn extrapolate_first_time(second: f64, third: f64) -> f64 {
    2.0 * second - third
}

/// Overwrites `times[0]` with `2 * times[1] - times[2]`.
///
/// # Errors
///
/// Returns `InsufficientRows` when fewer than three rows are present.
pub fn correct_first_time(var: &str, mut times: ArrayViewMut1<'_, f64>) -> Result<()> {
    if times.len() < 3 {
        return Err(AtmoError::InsufficientRows {
            var: var.to_string(),
            rows: times.len(),
        });
    }
    times[0] = extrapolate_first_time(times[1], times[2]);
    Ok(())
}

/// Converts seconds since the epoch into a UTC timestamp with nanosecond precision.
pub fn seconds_to_datetime(row: usize, value: f64) -> Result<DateTime<Utc>> {
    let invalid = || AtmoError::InvalidTimestamp { row, value };
    if !value.is_finite() {
        return Err(invalid());
    }

    let mut secs = value.floor();
    let mut nanos = ((value - secs) * NANOS_PER_SECOND).round();
    if nanos >= NANOS_PER_SECOND {
        secs += 1.0;
        nanos = 0.0;
    }
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return Err(invalid());
    }

    DateTime::from_timestamp(secs as i64, nanos as u32).ok_or_else(invalid)
}

/// Builds a calendar index from a column of epoch seconds.
pub fn time_index(times: ArrayView1<'_, f64>) -> Result<Vec<DateTime<Utc>>> {
    times
        .iter()
        .enumerate()
        .map(|(row, &value)| seconds_to_datetime(row, value))
        .collect()
}
