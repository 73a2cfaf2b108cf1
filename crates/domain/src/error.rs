// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required free-text field is empty or whitespace-only.
    EmptyField {
        /// The name of the field.
        field: &'static str,
    },
    /// A required decision field has not been set.
    ///
    /// `Set(false)` is a valid decision; only `Unset` triggers this error.
    DecisionNotSet {
        /// The name of the decision field.
        field: &'static str,
    },
    /// A required numeric field has not been entered.
    ///
    /// Presence-based: an entered zero is valid, only an absent value fails.
    MissingNumericField {
        /// The name of the field.
        field: &'static str,
    },
    /// The parent appraisal reference is unset.
    ///
    /// Signals that the upstream employee stage was never created.
    MissingParentReference {
        /// The stage whose record lacks a parent reference.
        stage: String,
    },
    /// The appraisal period is invalid (start must be strictly before end).
    InvalidPeriod {
        /// The requested start date.
        start_date: time::Date,
        /// The requested end date.
        end_date: time::Date,
    },
    /// The appraisal cycle is locked and does not accept new submissions.
    CycleLocked {
        /// The cycle identifier, if persisted.
        cycle_id: Option<i64>,
    },
    /// A stage identifier could not be parsed.
    InvalidStage(String),
    /// A view-context identifier could not be parsed.
    InvalidViewContext(String),
    /// A stage status value could not be parsed.
    InvalidStageStatus(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => {
                write!(f, "Field '{field}' is required and cannot be empty")
            }
            Self::DecisionNotSet { field } => {
                write!(f, "Decision '{field}' must be set before submission")
            }
            Self::MissingNumericField { field } => {
                write!(f, "Numeric field '{field}' has not been entered")
            }
            Self::MissingParentReference { stage } => {
                write!(
                    f,
                    "Stage '{stage}' has no parent appraisal reference; the employee stage was never created"
                )
            }
            Self::InvalidPeriod {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Invalid appraisal period: start date {start_date} must be strictly before end date {end_date}"
                )
            }
            Self::CycleLocked { cycle_id } => match cycle_id {
                Some(id) => write!(f, "Appraisal cycle {id} is locked"),
                None => write!(f, "Appraisal cycle is locked"),
            },
            Self::InvalidStage(value) => write!(f, "Invalid stage: {value}"),
            Self::InvalidViewContext(value) => write!(f, "Invalid view context: {value}"),
            Self::InvalidStageStatus(value) => write!(f, "Invalid stage status: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
