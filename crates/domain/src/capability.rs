// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability sets and permission scopes for authorization-aware gating.
//!
//! Capabilities expose what actions an actor is permitted to perform
//! without leaking domain internals. They are advisory only and do not
//! replace backend authorization checks.

use crate::stage::{Stage, ViewContext};
use serde::{Deserialize, Serialize};

/// The four-boolean capability tuple for one permission scope.
///
/// The four flags are independent: `edit` does not imply `view`. Every
/// caller must check the specific capability its code path requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// Whether the actor may view records in this scope.
    #[serde(default)]
    pub view: bool,
    /// Whether the actor may create records in this scope.
    #[serde(default)]
    pub create: bool,
    /// Whether the actor may edit existing records in this scope.
    #[serde(default)]
    pub edit: bool,
    /// Whether the actor may delete records in this scope.
    #[serde(default)]
    pub delete: bool,
}

impl CapabilitySet {
    /// Returns the all-false capability set.
    ///
    /// This is the fail-safe default: a failed or skipped permission
    /// resolution must be treated identically to "no permissions granted".
    #[must_use]
    pub const fn none() -> Self {
        Self {
            view: false,
            create: false,
            edit: false,
            delete: false,
        }
    }

    /// Returns a fully granted capability set.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            view: true,
            create: true,
            edit: true,
            delete: true,
        }
    }

    /// Returns whether no capability is granted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.view && !self.create && !self.edit && !self.delete
    }
}

/// A permission lookup scope: `{role, workspace, sub_workspace}`.
///
/// Scopes are distinct per (workspace, sub-workspace) pair: for example
/// `("MyAppraisal", "MyHrReview")` and `("AllAppraisal", "AllHrReview")`
/// gate the same stage type but are separate permission rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionScope {
    /// The actor's role identifier.
    pub role: String,
    /// The workspace name.
    pub workspace: String,
    /// The sub-workspace name.
    pub sub_workspace: String,
}

impl PermissionScope {
    /// Creates a new permission scope.
    ///
    /// # Arguments
    ///
    /// * `role` - The actor's role identifier
    /// * `workspace` - The workspace name
    /// * `sub_workspace` - The sub-workspace name
    #[must_use]
    pub fn new(role: &str, workspace: &str, sub_workspace: &str) -> Self {
        Self {
            role: role.to_string(),
            workspace: workspace.to_string(),
            sub_workspace: sub_workspace.to_string(),
        }
    }

    /// Derives the permission scope for a stage under a view-context.
    ///
    /// # Arguments
    ///
    /// * `role` - The actor's role identifier
    /// * `view` - The view-context the screen operates under
    /// * `stage` - The review stage being gated
    #[must_use]
    pub fn for_stage(role: &str, view: ViewContext, stage: Stage) -> Self {
        Self {
            role: role.to_string(),
            workspace: view.workspace().to_string(),
            sub_workspace: format!(
                "{}{}",
                view.sub_workspace_prefix(),
                stage.sub_workspace_fragment()
            ),
        }
    }

    /// Derives the orchestrating permission scope for the details view.
    ///
    /// This scope is distinct from any individual stage's scope; it gates
    /// cycle-level operations such as period setting.
    #[must_use]
    pub fn for_details(role: &str, view: ViewContext) -> Self {
        Self {
            role: role.to_string(),
            workspace: view.workspace().to_string(),
            sub_workspace: format!("{}AppraisalDetails", view.sub_workspace_prefix()),
        }
    }

    /// Returns whether any scope component is empty.
    ///
    /// An incomplete scope must cause callers to skip resolution and fall
    /// back to the all-false capability set.
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.role.is_empty() || self.workspace.is_empty() || self.sub_workspace.is_empty()
    }
}
