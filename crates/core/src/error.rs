// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use appraise_domain::{DomainError, Stage};

/// Errors that can occur while gating and planning stage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The actor does not hold the capability a mutating action requires.
    ///
    /// Raised locally, before any network traffic is generated.
    PermissionDenied {
        /// The action that was attempted.
        action: &'static str,
        /// The capability flag that was missing.
        capability: &'static str,
    },
    /// The appraisal cycle is locked and the stage gates on it.
    CycleLocked {
        /// The stage whose operation was blocked.
        stage: Stage,
    },
    /// The requested tab is not visible for this employee.
    StageNotVisible {
        /// The hidden stage.
        stage: Stage,
    },
    /// A cycle-level operation was requested before the cycle was persisted.
    CycleNotPersisted,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::PermissionDenied { action, capability } => {
                write!(f, "Permission denied: '{action}' requires the '{capability}' capability")
            }
            Self::CycleLocked { stage } => {
                write!(f, "Appraisal cycle is locked; '{stage}' stage is view-only")
            }
            Self::StageNotVisible { stage } => {
                write!(f, "Stage '{stage}' is not applicable to this employee")
            }
            Self::CycleNotPersisted => {
                write!(f, "Appraisal cycle has not been persisted yet")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
