// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived display fields for the HR review.
//!
//! These are pure functions of current form state: recomputed on every
//! render and never persisted separately from their inputs.

/// Sums the three independent leave-category inputs.
///
/// A missing input counts as zero; the sum itself is always defined.
///
/// # Arguments
///
/// * `casual` - Casual leave days taken
/// * `sick` - Sick leave days taken
/// * `annual` - Annual leave days taken
#[must_use]
pub fn total_leave(casual: Option<f64>, sick: Option<f64>, annual: Option<f64>) -> f64 {
    casual.unwrap_or(0.0) + sick.unwrap_or(0.0) + annual.unwrap_or(0.0)
}

/// Calculates the attendance percentage: on-time over all recorded days.
///
/// Returns `None` when no days were recorded (zero denominator); callers
/// display that as "N/A" rather than a computation error.
///
/// # Arguments
///
/// * `on_time` - Days the employee arrived on time
/// * `delay` - Days the employee arrived late
/// * `early_exit` - Days the employee left early
#[must_use]
pub fn attendance_percentage(on_time: u32, delay: u32, early_exit: u32) -> Option<f64> {
    let denominator: u32 = on_time + delay + early_exit;
    if denominator == 0 {
        return None;
    }
    Some(f64::from(on_time) / f64::from(denominator) * 100.0)
}

/// Formats the attendance percentage for display.
///
/// Two decimal places with a percent sign, or "N/A" when no days were
/// recorded.
#[must_use]
pub fn format_attendance(on_time: u32, delay: u32, early_exit: u32) -> String {
    attendance_percentage(on_time, delay, early_exit)
        .map_or_else(|| String::from("N/A"), |pct| format!("{pct:.2}%"))
}

/// Derives the gross salary from a basic salary and the cycle's factor.
///
/// Returns `None` when either operand is absent or the factor is zero;
/// the caller renders a placeholder, never an error.
///
/// # Arguments
///
/// * `basic` - The basic salary
/// * `factor` - The divisor supplied by the parent cycle
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn gross_salary(basic: Option<f64>, factor: Option<f64>) -> Option<i64> {
    let basic: f64 = basic?;
    let factor: f64 = factor?;
    if factor.abs() < f64::EPSILON {
        return None;
    }
    Some((basic / factor).round() as i64)
}

/// Null-safe difference between proposed and current gross salary.
///
/// Returns `None` if either operand is `None`.
#[must_use]
pub fn gross_difference(proposed: Option<i64>, current: Option<i64>) -> Option<i64> {
    Some(proposed? - current?)
}
