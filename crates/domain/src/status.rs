// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The projected completion status of one review stage.
///
/// Computed server-side and fetched verbatim; the client's only
/// responsibility is interpretation. `Na` is a third state beyond the
/// two-state record lifecycle: the stage is not applicable to this
/// employee and its tab must not be rendered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StageStatus {
    /// The stage record exists.
    Done,
    /// The stage record has not been created yet.
    #[default]
    Pending,
    /// The stage does not apply to this employee.
    #[serde(rename = "NA")]
    Na,
}

impl StageStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Done => "Done",
            Self::Pending => "Pending",
            Self::Na => "NA",
        }
    }

    /// Returns whether the stage's tab should be rendered.
    #[must_use]
    pub const fn is_applicable(&self) -> bool {
        !matches!(self, Self::Na)
    }
}

impl FromStr for StageStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Done" => Ok(Self::Done),
            "Pending" => Ok(Self::Pending),
            "NA" => Ok(Self::Na),
            _ => Err(DomainError::InvalidStageStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-employee read row aggregating per-stage completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusProjection {
    /// The employee this row describes.
    pub employee_id: i64,
    /// Completion of the employee self-review.
    #[serde(rename = "self", default)]
    pub self_review: StageStatus,
    /// Completion of the reporting-manager review.
    #[serde(default)]
    pub rm: StageStatus,
    /// Completion of the HR review.
    #[serde(default)]
    pub hr: StageStatus,
    /// Completion of the HOD review.
    #[serde(default)]
    pub hod: StageStatus,
    /// Completion of the COO review.
    #[serde(default)]
    pub coo: StageStatus,
    /// Completion of the CEO review.
    #[serde(default)]
    pub ceo: StageStatus,
}

impl StatusProjection {
    /// Returns the projected status for one stage.
    #[must_use]
    pub const fn status_for(&self, stage: Stage) -> StageStatus {
        match stage {
            Stage::Employee => self.self_review,
            Stage::ReportingManager => self.rm,
            Stage::HumanResource => self.hr,
            Stage::HeadOfDepartment => self.hod,
            Stage::ChiefOperatingOfficer => self.coo,
            Stage::ChiefExecutiveOfficer => self.ceo,
        }
    }

    /// Returns the stages whose tabs should be rendered, in fixed order.
    ///
    /// A stage is visible iff its projection is not `NA`, regardless of
    /// permission state. Tab order never varies with the visible subset.
    #[must_use]
    pub fn visible_stages(&self) -> Vec<Stage> {
        Stage::ALL
            .into_iter()
            .filter(|stage| self.status_for(*stage).is_applicable())
            .collect()
    }
}
