// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Permission resolution.
//!
//! Resolution is a pure lookup against server-held permission rows and it
//! fails closed: a transport failure, a missing row, or a malformed
//! payload all yield the all-false capability set, never an error. Callers
//! must treat a failed resolution identically to "no permissions granted".

use crate::endpoints::role_permission_path;
use crate::transport::Transport;
use appraise::ActorContext;
use appraise_domain::{CapabilitySet, PermissionScope, Stage};
use serde_json::Value;
use tracing::{debug, warn};

/// Resolves the capability set for a permission scope.
///
/// An incomplete scope (any empty component) skips resolution entirely,
/// the defined fail-safe, and no request is issued. Must be re-run
/// whenever the actor's role or view-context changes.
///
/// # Arguments
///
/// * `transport` - The REST transport
/// * `scope` - The `{role, workspace, sub_workspace}` lookup scope
#[must_use]
pub fn resolve_permissions<T: Transport>(transport: &T, scope: &PermissionScope) -> CapabilitySet {
    if scope.is_incomplete() {
        debug!(
            role = %scope.role,
            workspace = %scope.workspace,
            "Skipping permission resolution for incomplete scope"
        );
        return CapabilitySet::none();
    }

    let path: String = role_permission_path(scope);
    debug!(path = %path, "Resolving permissions");

    let value: Value = match transport.get(&path) {
        Ok(Some(value)) => value,
        Ok(None) => {
            debug!(path = %path, "No permission row; denying all capabilities");
            return CapabilitySet::none();
        }
        Err(err) => {
            warn!(path = %path, error = %err, "Permission lookup failed; denying all capabilities");
            return CapabilitySet::none();
        }
    };

    match serde_json::from_value::<CapabilitySet>(value) {
        Ok(capabilities) => capabilities,
        Err(err) => {
            warn!(path = %path, error = %err, "Malformed permission row; denying all capabilities");
            CapabilitySet::none()
        }
    }
}

/// Resolves the capability set for one stage under an actor context.
#[must_use]
pub fn resolve_stage_permissions<T: Transport>(
    transport: &T,
    context: &ActorContext,
    stage: Stage,
) -> CapabilitySet {
    resolve_permissions(transport, &context.stage_scope(stage))
}

/// Resolves the capability set for the orchestrating details scope.
#[must_use]
pub fn resolve_details_permissions<T: Transport>(
    transport: &T,
    context: &ActorContext,
) -> CapabilitySet {
    resolve_permissions(transport, &context.details_scope())
}
