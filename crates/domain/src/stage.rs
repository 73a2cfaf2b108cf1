// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the six review stages of an appraisal cycle.
///
/// Stages are sequential in presentation but independently addressable:
/// each stage owns its own record, permission scope, and endpoint family.
/// The declaration order is the fixed tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// The employee's self-review.
    Employee,
    /// The reporting manager's review.
    ReportingManager,
    /// The human-resources review.
    HumanResource,
    /// The head-of-department review.
    HeadOfDepartment,
    /// The chief operating officer's review.
    ChiefOperatingOfficer,
    /// The chief executive officer's review.
    ChiefExecutiveOfficer,
}

impl Stage {
    /// All stages in fixed tab order.
    pub const ALL: [Self; 6] = [
        Self::Employee,
        Self::ReportingManager,
        Self::HumanResource,
        Self::HeadOfDepartment,
        Self::ChiefOperatingOfficer,
        Self::ChiefExecutiveOfficer,
    ];

    /// Converts this stage to its display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "Employee",
            Self::ReportingManager => "Reporting Manager",
            Self::HumanResource => "Human Resource",
            Self::HeadOfDepartment => "Head of Department",
            Self::ChiefOperatingOfficer => "Chief Operating Officer",
            Self::ChiefExecutiveOfficer => "Chief Executive Officer",
        }
    }

    /// Returns the endpoint slug for this stage.
    ///
    /// Slugs appear in the `{view}-{slug}-review` endpoint family.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Employee => "self",
            Self::ReportingManager => "rm",
            Self::HumanResource => "hr",
            Self::HeadOfDepartment => "hod",
            Self::ChiefOperatingOfficer => "coo",
            Self::ChiefExecutiveOfficer => "ceo",
        }
    }

    /// Returns the sub-workspace name fragment for this stage.
    ///
    /// Combined with a view-context prefix to form a permission
    /// sub-workspace, e.g. `"MyHrReview"` or `"AllHrReview"`.
    #[must_use]
    pub const fn sub_workspace_fragment(&self) -> &'static str {
        match self {
            Self::Employee => "SelfReview",
            Self::ReportingManager => "RmReview",
            Self::HumanResource => "HrReview",
            Self::HeadOfDepartment => "HodReview",
            Self::ChiefOperatingOfficer => "CooReview",
            Self::ChiefExecutiveOfficer => "CeoReview",
        }
    }

    /// Returns whether records for this stage reference the appraisal cycle
    /// directly.
    ///
    /// Employee and RM records reference the cycle; HR, HOD, COO and CEO
    /// records reference the employee-appraisal id instead.
    #[must_use]
    pub const fn references_cycle(&self) -> bool {
        matches!(self, Self::Employee | Self::ReportingManager)
    }
}

impl FromStr for Stage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Employee" => Ok(Self::Employee),
            "Reporting Manager" => Ok(Self::ReportingManager),
            "Human Resource" => Ok(Self::HumanResource),
            "Head of Department" => Ok(Self::HeadOfDepartment),
            "Chief Operating Officer" => Ok(Self::ChiefOperatingOfficer),
            "Chief Executive Officer" => Ok(Self::ChiefExecutiveOfficer),
            _ => Err(DomainError::InvalidStage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The authorization scope a screen operates under.
///
/// The view-context determines both the endpoint family used for stage
/// records and the workspace used for permission resolution. All three
/// contexts address the same record shape; only the authorization boundary
/// of the backend endpoint differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewContext {
    /// The actor acts on their own appraisal.
    My,
    /// The actor reviews a subordinate's appraisal.
    Review,
    /// The actor has organization-wide visibility.
    All,
}

impl ViewContext {
    /// Returns the endpoint prefix for this view-context.
    #[must_use]
    pub const fn endpoint_prefix(&self) -> &'static str {
        match self {
            Self::My => "my",
            Self::Review => "employee",
            Self::All => "all",
        }
    }

    /// Returns the permission workspace name for this view-context.
    #[must_use]
    pub const fn workspace(&self) -> &'static str {
        match self {
            Self::My => "MyAppraisal",
            Self::Review => "ReviewAppraisal",
            Self::All => "AllAppraisal",
        }
    }

    /// Returns the sub-workspace prefix for this view-context.
    #[must_use]
    pub const fn sub_workspace_prefix(&self) -> &'static str {
        match self {
            Self::My => "My",
            Self::Review => "Review",
            Self::All => "All",
        }
    }
}

impl FromStr for ViewContext {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "My" => Ok(Self::My),
            "Review" => Ok(Self::Review),
            "All" => Ok(Self::All),
            _ => Err(DomainError::InvalidViewContext(s.to_string())),
        }
    }
}

impl std::fmt::Display for ViewContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::My => write!(f, "My"),
            Self::Review => write!(f, "Review"),
            Self::All => write!(f, "All"),
        }
    }
}
