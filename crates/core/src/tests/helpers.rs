// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared builders for core tests.

use crate::{ActorContext, StageFormController, StageSpec};
use appraise_domain::{
    AppraisalCycle, CapabilitySet, Decision, HrReview, Stage, StageStatus, StatusProjection,
    ViewContext,
};
use time::macros::date;

/// Creates a capability set with only the named flags granted.
pub fn caps(view: bool, create: bool, edit: bool) -> CapabilitySet {
    CapabilitySet {
        view,
        create,
        edit,
        delete: false,
    }
}

/// Creates an HR-stage controller with a bound parent.
pub fn hr_controller(
    permissions: CapabilitySet,
    cycle_active: bool,
) -> StageFormController<HrReview> {
    let mut controller: StageFormController<HrReview> = StageFormController::new(
        StageSpec::builtin(Stage::HumanResource),
        permissions,
        cycle_active,
    );
    controller.bind_parent(10);
    controller
}

/// Fills every required HR field so validation passes.
pub fn fill_hr_fields(controller: &mut StageFormController<HrReview>) {
    let fields: &mut HrReview = controller.fields_mut();
    fields.casual_leave = Some(2.0);
    fields.sick_leave = Some(3.0);
    fields.annual_leave = Some(4.0);
    fields.on_time = Some(200);
    fields.delay = Some(10);
    fields.early_exit = Some(5);
    fields.current_basic = Some(50000.0);
    fields.proposed_basic = Some(56000.0);
    fields.hr_remarks = String::from("Consistent performer");
    fields.decisions.promo_w_increment = Decision::Set(true);
    fields.decisions.promo_w_pp = Decision::Set(false);
    fields.decisions.increment_w_no_promo = Decision::Set(false);
    fields.decisions.pp_only = Decision::Set(false);
    fields.decisions.deferred = Decision::Set(false);
}

/// Creates an active cycle for employee 3.
pub fn active_cycle() -> AppraisalCycle {
    AppraisalCycle {
        cycle_id: Some(4),
        employee_id: 3,
        start_date: date!(2026 - 01 - 01),
        end_date: date!(2026 - 12 - 31),
        active_status: true,
        salary_factor: Some(2.0),
    }
}

/// Creates a projection where every stage is applicable and pending.
pub fn all_pending_projection() -> StatusProjection {
    StatusProjection {
        employee_id: 3,
        self_review: StageStatus::Pending,
        rm: StageStatus::Pending,
        hr: StageStatus::Pending,
        hod: StageStatus::Pending,
        coo: StageStatus::Pending,
        ceo: StageStatus::Pending,
    }
}

/// Creates an actor context for an HR officer in the Review view.
pub fn review_context() -> ActorContext {
    ActorContext::new(
        String::from("op-17"),
        String::from("hr_officer"),
        ViewContext::Review,
    )
}
