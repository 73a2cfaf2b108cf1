// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

// Wire dates are plain ISO calendar dates.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// One appraisal cycle: one employee, one review period.
///
/// A cycle accepts new stage submissions while `active_status` is true.
/// Once `active_status` transitions to false the cycle is locked: no stage
/// record may thereafter be created or edited, view-only access remains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalCycle {
    /// The canonical numeric identifier assigned by the backend.
    /// `None` indicates the cycle has not been persisted yet.
    pub cycle_id: Option<i64>,
    /// The employee this cycle belongs to.
    pub employee_id: i64,
    /// The start of the review period.
    #[serde(with = "iso_date")]
    pub start_date: Date,
    /// The end of the review period.
    #[serde(with = "iso_date")]
    pub end_date: Date,
    /// Whether the cycle still accepts new submissions.
    pub active_status: bool,
    /// Divisor used to derive gross salary from basic salary.
    /// Absent when the cycle was configured without one.
    #[serde(default)]
    pub salary_factor: Option<f64>,
}

impl AppraisalCycle {
    /// Creates a new active cycle for an employee.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The employee the cycle belongs to
    /// * `start_date` - The start of the review period
    /// * `end_date` - The end of the review period
    ///
    /// # Errors
    ///
    /// Returns an error if the period is invalid.
    pub fn new(employee_id: i64, start_date: Date, end_date: Date) -> Result<Self, DomainError> {
        validate_period(start_date, end_date)?;
        Ok(Self {
            cycle_id: None,
            employee_id,
            start_date,
            end_date,
            active_status: true,
            salary_factor: None,
        })
    }

    /// Returns whether the cycle is locked.
    ///
    /// A locked cycle rejects record creation and edits on every stage.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        !self.active_status
    }
}

/// A validated request to change a cycle's review period.
///
/// Produced by the orchestrator's period-setting sub-operation and carried
/// to the backend as a PATCH.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePatch {
    /// The cycle being patched.
    pub cycle_id: i64,
    /// The new start date.
    #[serde(with = "iso_date")]
    pub start_date: Date,
    /// The new end date.
    #[serde(with = "iso_date")]
    pub end_date: Date,
}

/// Validates that an appraisal period is well-formed.
///
/// The start date must be strictly before the end date.
///
/// # Arguments
///
/// * `start_date` - The requested start date
/// * `end_date` - The requested end date
///
/// # Errors
///
/// Returns `DomainError::InvalidPeriod` if `start_date >= end_date`.
pub fn validate_period(start_date: Date, end_date: Date) -> Result<(), DomainError> {
    if start_date >= end_date {
        return Err(DomainError::InvalidPeriod {
            start_date,
            end_date,
        });
    }
    Ok(())
}
