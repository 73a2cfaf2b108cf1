// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The generic stage-form controller.
//!
//! One controller type serves all six review stages, parameterized by a
//! `StageSpec` and the stage's record type. It owns the load → edit →
//! submit cycle for one (appraisal cycle, actor, view-context) triple:
//! permission gating, validate-before-submit, and the create-vs-update
//! decision. The wire itself belongs to the client layer.

use crate::error::CoreError;
use crate::form::{RecordState, SubmitMethod};
use crate::stage_spec::StageSpec;
use appraise_domain::{CapabilitySet, StageFields};

/// A validated, capability-checked plan for one submission.
///
/// Produced by [`StageFormController::prepare_submit`]; consumed by the
/// client layer, which issues exactly one request per plan.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitPlan<F: StageFields> {
    /// POST (create) or PUT (update), decided solely by id presence.
    pub method: SubmitMethod,
    /// The record fields to send.
    pub fields: F,
}

/// Controller for one review stage's form.
///
/// Capability flags are independent and re-checked before every gated
/// action; `edit` never stands in for `view`.
#[derive(Debug, Clone)]
pub struct StageFormController<F: StageFields> {
    spec: StageSpec,
    permissions: CapabilitySet,
    cycle_active: bool,
    parent: Option<i64>,
    fields: F,
}

impl<F: StageFields> StageFormController<F> {
    /// Creates a controller with stage-specific default fields.
    ///
    /// # Arguments
    ///
    /// * `spec` - The stage configuration
    /// * `permissions` - The resolved capability set for the stage's scope
    /// * `cycle_active` - Whether the parent cycle still accepts submissions
    #[must_use]
    pub fn new(spec: StageSpec, permissions: CapabilitySet, cycle_active: bool) -> Self {
        Self {
            spec,
            permissions,
            cycle_active,
            parent: None,
            fields: F::default(),
        }
    }

    /// Binds the parent appraisal reference.
    ///
    /// The binding survives resets so a form that falls back to create-mode
    /// defaults keeps its cycle linkage.
    pub fn bind_parent(&mut self, id: i64) {
        self.parent = Some(id);
        self.fields.set_parent_reference(id);
    }

    /// Replaces the resolved capability set.
    ///
    /// Called after re-resolution when the actor's role or view-context
    /// changes.
    pub const fn set_permissions(&mut self, permissions: CapabilitySet) {
        self.permissions = permissions;
    }

    /// The stage configuration.
    #[must_use]
    pub const fn spec(&self) -> &StageSpec {
        &self.spec
    }

    /// The resolved capability set.
    #[must_use]
    pub const fn permissions(&self) -> &CapabilitySet {
        &self.permissions
    }

    /// The current form fields.
    #[must_use]
    pub const fn fields(&self) -> &F {
        &self.fields
    }

    /// Mutable access to the form fields for user edits.
    ///
    /// Advisory only: rendering should consult [`Self::is_editable`], and
    /// submission re-checks capabilities regardless of what was edited.
    #[must_use]
    pub const fn fields_mut(&mut self) -> &mut F {
        &mut self.fields
    }

    /// The record lifecycle state, derived from id presence alone.
    #[must_use]
    pub fn record_state(&self) -> RecordState {
        RecordState::from_record_id(self.fields.record_id())
    }

    /// Returns whether a load may be issued.
    ///
    /// Load is gated on `view`; when this is false no request may be made
    /// and the form keeps its defaults.
    #[must_use]
    pub const fn can_load(&self) -> bool {
        self.permissions.view
    }

    /// Replaces local form state with a loaded record.
    ///
    /// The record's id becomes the create-vs-update discriminator for
    /// subsequent submissions.
    pub fn apply_loaded(&mut self, fields: F) {
        self.fields = fields;
    }

    /// Resets the form to stage defaults (create mode).
    ///
    /// Used when a load finds no record or fails; the parent binding is
    /// reapplied.
    pub fn reset_to_defaults(&mut self) {
        self.fields = F::default();
        if let Some(id) = self.parent {
            self.fields.set_parent_reference(id);
        }
    }

    /// Returns whether the stage is blocked by a locked cycle.
    const fn cycle_blocks_edit(&self) -> bool {
        !self.cycle_active && self.spec.locks_on_inactive_cycle
    }

    /// Returns whether form fields should render as editable.
    ///
    /// Mode-aware, matching [`Self::offers_submit`]: in create mode the
    /// `create` capability suffices to fill in a new record; in edit mode
    /// the `edit` capability is required. A locked cycle makes gating
    /// stages view-only regardless of capability flags.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        match self.record_state() {
            RecordState::Absent => self.permissions.create && self.cycle_active,
            RecordState::Present(_) => self.permissions.edit && !self.cycle_blocks_edit(),
        }
    }

    /// Returns whether the submit affordance should exist at all.
    ///
    /// In create mode the `create` capability is required; in edit mode the
    /// `edit` capability. Without it the affordance is absent, not merely
    /// disabled.
    #[must_use]
    pub fn offers_submit(&self) -> bool {
        match self.record_state() {
            RecordState::Absent => self.permissions.create && self.cycle_active,
            RecordState::Present(_) => self.permissions.edit && !self.cycle_blocks_edit(),
        }
    }

    /// Validates and gates a submission, producing a plan.
    ///
    /// Runs synchronously before any network call: capability checks
    /// first, then cycle-lock checks, then field validation. The first
    /// failing field's error is surfaced.
    ///
    /// # Errors
    ///
    /// * `CoreError::PermissionDenied` when the required capability
    ///   (`create` for POST, `edit` for PUT) is not held
    /// * `CoreError::CycleLocked` when the cycle no longer accepts the
    ///   operation
    /// * `CoreError::DomainViolation` for the first failing field
    pub fn prepare_submit(&self) -> Result<SubmitPlan<F>, CoreError> {
        let method: SubmitMethod = self.record_state().submit_method();

        match method {
            SubmitMethod::Post => {
                if !self.permissions.create {
                    return Err(CoreError::PermissionDenied {
                        action: "submit",
                        capability: "create",
                    });
                }
                // A locked cycle never accepts new records.
                if !self.cycle_active {
                    return Err(CoreError::CycleLocked {
                        stage: self.spec.stage,
                    });
                }
            }
            SubmitMethod::Put(_) => {
                if !self.permissions.edit {
                    return Err(CoreError::PermissionDenied {
                        action: "submit",
                        capability: "edit",
                    });
                }
                if self.cycle_blocks_edit() {
                    return Err(CoreError::CycleLocked {
                        stage: self.spec.stage,
                    });
                }
            }
        }

        self.fields.validate()?;

        Ok(SubmitPlan {
            method,
            fields: self.fields.clone(),
        })
    }

    /// Adopts the server's response after a successful submission.
    ///
    /// The server is authoritative for generated ids and any
    /// server-computed fields; the returned record wholly replaces local
    /// state. A failed submission calls nothing; local state stays
    /// exactly as the user last edited it.
    pub fn apply_submit_success(&mut self, fields: F) {
        self.fields = fields;
    }
}
