// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The appraisal details orchestrator.
//!
//! Binds the actor context, the target cycle, and the visible-tabs
//! projection, and tracks which stage tab is active. Tab selection is a
//! flat selector: any visible tab is reachable from any other; stage
//! order is never enforced and there is no terminal state. Completion is
//! inferred externally via the status projection.

use crate::context::ActorContext;
use crate::error::CoreError;
use appraise_domain::{
    AppraisalCycle, CapabilitySet, CyclePatch, Stage, StatusProjection, validate_period,
};
use time::Date;

/// Orchestrator for one employee's appraisal details view.
#[derive(Debug, Clone)]
pub struct AppraisalDetails {
    context: ActorContext,
    cycle: AppraisalCycle,
    projection: StatusProjection,
    permissions: CapabilitySet,
    active: Option<Stage>,
}

impl AppraisalDetails {
    /// Creates the orchestrator.
    ///
    /// The initial active tab is the first visible stage (Employee, when
    /// applicable); `None` when every stage projects as NA.
    ///
    /// # Arguments
    ///
    /// * `context` - The actor's session context
    /// * `cycle` - The target appraisal cycle
    /// * `projection` - The employee's status projection
    /// * `permissions` - The capability set resolved for the orchestrating
    ///   scope (distinct from any stage's scope)
    #[must_use]
    pub fn new(
        context: ActorContext,
        cycle: AppraisalCycle,
        projection: StatusProjection,
        permissions: CapabilitySet,
    ) -> Self {
        let active: Option<Stage> = projection.visible_stages().first().copied();
        Self {
            context,
            cycle,
            projection,
            permissions,
            active,
        }
    }

    /// The actor's session context.
    #[must_use]
    pub const fn context(&self) -> &ActorContext {
        &self.context
    }

    /// The target appraisal cycle.
    #[must_use]
    pub const fn cycle(&self) -> &AppraisalCycle {
        &self.cycle
    }

    /// The currently active tab, if any stage is visible.
    #[must_use]
    pub const fn active_stage(&self) -> Option<Stage> {
        self.active
    }

    /// The stage tabs to render, in fixed order.
    ///
    /// A stage whose projection is NA never renders its tab, regardless of
    /// permission state.
    #[must_use]
    pub fn visible_tabs(&self) -> Vec<Stage> {
        self.projection.visible_stages()
    }

    /// Activates a stage tab.
    ///
    /// Any visible tab is reachable from any other. Activation has no side
    /// effect here; the mounted stage controller performs its own load.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::StageNotVisible` if the stage projects as NA.
    pub fn select_tab(&mut self, stage: Stage) -> Result<(), CoreError> {
        if !self.projection.status_for(stage).is_applicable() {
            return Err(CoreError::StageNotVisible { stage });
        }
        self.active = Some(stage);
        Ok(())
    }

    /// Replaces the status projection after a refetch.
    ///
    /// If the active tab became hidden, selection falls back to the first
    /// visible stage.
    pub fn update_projection(&mut self, projection: StatusProjection) {
        self.projection = projection;
        let still_visible: bool = self
            .active
            .is_some_and(|stage| self.projection.status_for(stage).is_applicable());
        if !still_visible {
            self.active = self.projection.visible_stages().first().copied();
        }
    }

    /// Validates and gates a review-period change, producing a PATCH plan.
    ///
    /// Requires the `edit` capability on the orchestrating scope and a
    /// strictly increasing period. Local state is not modified; the
    /// server's response is adopted via [`Self::apply_cycle`].
    ///
    /// # Errors
    ///
    /// * `CoreError::PermissionDenied` without `edit` on this scope
    /// * `CoreError::CycleNotPersisted` when the cycle has no id yet
    /// * `CoreError::DomainViolation` when `start_date >= end_date`
    pub fn set_period(&self, start_date: Date, end_date: Date) -> Result<CyclePatch, CoreError> {
        if !self.permissions.edit {
            return Err(CoreError::PermissionDenied {
                action: "set_period",
                capability: "edit",
            });
        }
        let cycle_id: i64 = self.cycle.cycle_id.ok_or(CoreError::CycleNotPersisted)?;
        validate_period(start_date, end_date)?;

        Ok(CyclePatch {
            cycle_id,
            start_date,
            end_date,
        })
    }

    /// Adopts the server's cycle state after a successful PATCH.
    pub fn apply_cycle(&mut self, cycle: AppraisalCycle) {
        self.cycle = cycle;
    }
}
