// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Endpoint routing.
//!
//! Per stage the backend exposes a 3-way endpoint family keyed by
//! view-context. This is a routing table, not three behaviors: all three
//! paths address the same record shape and differ only in the
//! authorization boundary the backend enforces.

use appraise_domain::{PermissionScope, Stage, ViewContext};

/// Builds the stage-record path for a view-context.
///
/// Shapes:
/// - `{resource}/my-{stage}-review/[{id}/]`
/// - `{resource}/employee-{stage}-review/[{id}/]`
/// - `{resource}/all-{stage}-review/[{id}/]`
///
/// # Arguments
///
/// * `resource` - The endpoint resource the stage family lives under
/// * `view` - The view-context selecting the authorization boundary
/// * `stage` - The review stage
/// * `id` - The record locator, omitted for unscoped access
#[must_use]
pub fn stage_review_path(
    resource: &str,
    view: ViewContext,
    stage: Stage,
    id: Option<i64>,
) -> String {
    let base: String = format!(
        "{resource}/{}-{}-review/",
        view.endpoint_prefix(),
        stage.slug()
    );
    match id {
        Some(id) => format!("{base}{id}/"),
        None => base,
    }
}

/// Builds the permission-lookup path for a scope.
///
/// Shape: `system/role-permissions/{role}/{workspace}/{sub_workspace}/`.
#[must_use]
pub fn role_permission_path(scope: &PermissionScope) -> String {
    format!(
        "system/role-permissions/{}/{}/{}/",
        scope.role, scope.workspace, scope.sub_workspace
    )
}

/// Builds the status-projection path.
///
/// The list endpoint when `employee_id` is absent, the single-employee
/// endpoint otherwise.
#[must_use]
pub fn status_projection_path(employee_id: Option<i64>) -> String {
    match employee_id {
        Some(id) => format!("appraisal/appraisal-status/{id}/"),
        None => String::from("appraisal/appraisal-status/"),
    }
}

/// Builds the appraisal-cycle path for cycle-level operations.
#[must_use]
pub fn cycle_path(cycle_id: i64) -> String {
    format!("appraisal/employee-appraisal/{cycle_id}/")
}
