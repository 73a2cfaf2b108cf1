// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::decision::DecisionSet;
use crate::error::DomainError;
use crate::stage::Stage;

/// Validates that a required free-text field is non-empty.
///
/// Whitespace-only input counts as empty.
///
/// # Arguments
///
/// * `field` - The field name, surfaced in the error
/// * `value` - The field value
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if the trimmed value is empty.
pub fn validate_required_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(())
}

/// Validates that all five decision fields have been set.
///
/// `Set(false)` is a valid decision; only `Unset` fails. The first unset
/// field in declaration order is surfaced.
///
/// # Arguments
///
/// * `decisions` - The decision set to check
///
/// # Errors
///
/// Returns `DomainError::DecisionNotSet` naming the first unset decision.
pub fn validate_decisions(decisions: &DecisionSet) -> Result<(), DomainError> {
    match decisions.unset_fields().first() {
        Some(&field) => Err(DomainError::DecisionNotSet { field }),
        None => Ok(()),
    }
}

/// Validates that a required numeric field has been entered.
///
/// Presence-based: an entered zero is a valid value, only `None` fails.
///
/// # Arguments
///
/// * `field` - The field name, surfaced in the error
/// * `value` - The field value
///
/// # Errors
///
/// Returns `DomainError::MissingNumericField` if the value is absent.
pub fn validate_numeric_present<T>(
    field: &'static str,
    value: Option<T>,
) -> Result<(), DomainError> {
    if value.is_none() {
        return Err(DomainError::MissingNumericField { field });
    }
    Ok(())
}

/// Validates that a stage record holds its parent appraisal reference.
///
/// An unset parent reference means the upstream employee stage was never
/// created.
///
/// # Arguments
///
/// * `stage` - The stage whose record is being validated
/// * `parent` - The parent reference held by the record
///
/// # Errors
///
/// Returns `DomainError::MissingParentReference` if the reference is unset.
pub fn validate_parent_reference(stage: Stage, parent: Option<i64>) -> Result<(), DomainError> {
    if parent.is_none() {
        return Err(DomainError::MissingParentReference {
            stage: stage.as_str().to_string(),
        });
    }
    Ok(())
}
