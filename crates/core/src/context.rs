// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use appraise_domain::{PermissionScope, Stage, ViewContext};

/// The authenticated actor's context for one session.
///
/// Created at session start and torn down on logout; one instance per
/// session. The context is passed explicitly into controllers and the
/// orchestrator; there is no ambient global. Permission resolution must
/// be re-run whenever `role` or `view` changes, as those are the only two
/// inputs that vary at runtime for a given stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    /// The actor's unique identifier.
    pub actor_id: String,
    /// The actor's role identifier, as used in permission lookups.
    pub role: String,
    /// The view-context the current screen operates under.
    pub view: ViewContext,
}

impl ActorContext {
    /// Creates a new actor context.
    ///
    /// # Arguments
    ///
    /// * `actor_id` - The actor's unique identifier
    /// * `role` - The actor's role identifier
    /// * `view` - The view-context the screen operates under
    #[must_use]
    pub const fn new(actor_id: String, role: String, view: ViewContext) -> Self {
        Self {
            actor_id,
            role,
            view,
        }
    }

    /// Derives the permission scope for one stage under this context.
    #[must_use]
    pub fn stage_scope(&self, stage: Stage) -> PermissionScope {
        PermissionScope::for_stage(&self.role, self.view, stage)
    }

    /// Derives the orchestrating permission scope for the details view.
    #[must_use]
    pub fn details_scope(&self) -> PermissionScope {
        PermissionScope::for_details(&self.role, self.view)
    }
}
