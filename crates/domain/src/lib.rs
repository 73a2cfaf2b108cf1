// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod capability;
mod cycle;
mod decision;
mod error;
mod metrics;
mod record;
mod stage;
mod status;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use capability::{CapabilitySet, PermissionScope};
pub use cycle::{AppraisalCycle, CyclePatch, validate_period};
pub use decision::{Decision, DecisionSet};
pub use error::DomainError;
pub use metrics::{
    attendance_percentage, format_attendance, gross_difference, gross_salary, total_leave,
};
pub use record::{
    CeoReview, CooReview, EmployeeReview, HodReview, HrReview, RmReview, StageFields,
};
pub use stage::{Stage, ViewContext};
pub use status::{StageStatus, StatusProjection};
pub use validation::{
    validate_decisions, validate_numeric_present, validate_parent_reference,
    validate_required_text,
};
