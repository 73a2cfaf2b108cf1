// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AppraisalCycle, CapabilitySet, PermissionScope, Stage, StageStatus, StatusProjection,
    ViewContext, validate_period,
};
use std::str::FromStr;
use time::macros::date;

#[test]
fn test_stage_tab_order_is_fixed() {
    assert_eq!(
        Stage::ALL,
        [
            Stage::Employee,
            Stage::ReportingManager,
            Stage::HumanResource,
            Stage::HeadOfDepartment,
            Stage::ChiefOperatingOfficer,
            Stage::ChiefExecutiveOfficer,
        ]
    );
}

#[test]
fn test_stage_display_round_trips() {
    for stage in Stage::ALL {
        let parsed: Stage = Stage::from_str(stage.as_str()).unwrap();
        assert_eq!(parsed, stage);
    }
}

#[test]
fn test_stage_parse_rejects_unknown() {
    assert!(Stage::from_str("Intern").is_err());
}

#[test]
fn test_stage_slugs() {
    assert_eq!(Stage::Employee.slug(), "self");
    assert_eq!(Stage::ReportingManager.slug(), "rm");
    assert_eq!(Stage::HumanResource.slug(), "hr");
    assert_eq!(Stage::HeadOfDepartment.slug(), "hod");
    assert_eq!(Stage::ChiefOperatingOfficer.slug(), "coo");
    assert_eq!(Stage::ChiefExecutiveOfficer.slug(), "ceo");
}

#[test]
fn test_cycle_reference_split() {
    assert!(Stage::Employee.references_cycle());
    assert!(Stage::ReportingManager.references_cycle());
    assert!(!Stage::HumanResource.references_cycle());
    assert!(!Stage::HeadOfDepartment.references_cycle());
    assert!(!Stage::ChiefOperatingOfficer.references_cycle());
    assert!(!Stage::ChiefExecutiveOfficer.references_cycle());
}

#[test]
fn test_view_context_endpoint_prefixes() {
    assert_eq!(ViewContext::My.endpoint_prefix(), "my");
    assert_eq!(ViewContext::Review.endpoint_prefix(), "employee");
    assert_eq!(ViewContext::All.endpoint_prefix(), "all");
}

#[test]
fn test_permission_scope_for_stage_is_distinct_per_view() {
    let my: PermissionScope =
        PermissionScope::for_stage("hr_officer", ViewContext::My, Stage::HumanResource);
    let all: PermissionScope =
        PermissionScope::for_stage("hr_officer", ViewContext::All, Stage::HumanResource);

    assert_eq!(my.workspace, "MyAppraisal");
    assert_eq!(my.sub_workspace, "MyHrReview");
    assert_eq!(all.workspace, "AllAppraisal");
    assert_eq!(all.sub_workspace, "AllHrReview");
    assert_ne!(my, all);
}

#[test]
fn test_details_scope_is_distinct_from_stage_scopes() {
    let details: PermissionScope = PermissionScope::for_details("hr_officer", ViewContext::Review);
    assert_eq!(details.sub_workspace, "ReviewAppraisalDetails");
    for stage in Stage::ALL {
        let stage_scope: PermissionScope =
            PermissionScope::for_stage("hr_officer", ViewContext::Review, stage);
        assert_ne!(details, stage_scope);
    }
}

#[test]
fn test_incomplete_scope_detection() {
    let scope: PermissionScope = PermissionScope::new("", "MyAppraisal", "MyHrReview");
    assert!(scope.is_incomplete());
    let scope: PermissionScope = PermissionScope::new("hr_officer", "", "MyHrReview");
    assert!(scope.is_incomplete());
    let scope: PermissionScope = PermissionScope::new("hr_officer", "MyAppraisal", "MyHrReview");
    assert!(!scope.is_incomplete());
}

#[test]
fn test_capability_set_none_is_empty() {
    let caps: CapabilitySet = CapabilitySet::none();
    assert!(caps.is_empty());
    assert!(!caps.view);
    assert!(!caps.create);
    assert!(!caps.edit);
    assert!(!caps.delete);
}

#[test]
fn test_capability_flags_are_independent() {
    // edit without view is a representable state; callers check each flag
    let caps: CapabilitySet = CapabilitySet {
        edit: true,
        ..CapabilitySet::none()
    };
    assert!(caps.edit);
    assert!(!caps.view);
    assert!(!caps.is_empty());
}

#[test]
fn test_capability_set_deserializes_missing_flags_as_false() {
    let caps: CapabilitySet = serde_json::from_str(r#"{"view": true}"#).unwrap();
    assert!(caps.view);
    assert!(!caps.create);
    assert!(!caps.edit);
    assert!(!caps.delete);
}

#[test]
fn test_stage_status_parse_and_display() {
    assert_eq!(StageStatus::from_str("Done").unwrap(), StageStatus::Done);
    assert_eq!(
        StageStatus::from_str("Pending").unwrap(),
        StageStatus::Pending
    );
    assert_eq!(StageStatus::from_str("NA").unwrap(), StageStatus::Na);
    assert!(StageStatus::from_str("Skipped").is_err());
    assert_eq!(StageStatus::Na.to_string(), "NA");
}

#[test]
fn test_stage_status_wire_rename() {
    let status: StageStatus = serde_json::from_str("\"NA\"").unwrap();
    assert_eq!(status, StageStatus::Na);
    assert_eq!(serde_json::to_string(&StageStatus::Na).unwrap(), "\"NA\"");
}

#[test]
fn test_projection_visible_stages_skips_na() {
    let projection: StatusProjection = StatusProjection {
        employee_id: 7,
        self_review: StageStatus::Done,
        rm: StageStatus::Na,
        hr: StageStatus::Pending,
        hod: StageStatus::Pending,
        coo: StageStatus::Na,
        ceo: StageStatus::Pending,
    };

    assert_eq!(
        projection.visible_stages(),
        vec![
            Stage::Employee,
            Stage::HumanResource,
            Stage::HeadOfDepartment,
            Stage::ChiefExecutiveOfficer,
        ]
    );
}

#[test]
fn test_projection_order_fixed_regardless_of_subset() {
    let projection: StatusProjection = StatusProjection {
        employee_id: 7,
        self_review: StageStatus::Na,
        rm: StageStatus::Done,
        hr: StageStatus::Na,
        hod: StageStatus::Done,
        coo: StageStatus::Done,
        ceo: StageStatus::Na,
    };

    assert_eq!(
        projection.visible_stages(),
        vec![
            Stage::ReportingManager,
            Stage::HeadOfDepartment,
            Stage::ChiefOperatingOfficer,
        ]
    );
}

#[test]
fn test_projection_deserializes_self_field() {
    let projection: StatusProjection = serde_json::from_str(
        r#"{
            "employee_id": 12,
            "self": "Done",
            "rm": "Pending",
            "hr": "Pending",
            "hod": "NA",
            "coo": "NA",
            "ceo": "Pending"
        }"#,
    )
    .unwrap();

    assert_eq!(projection.self_review, StageStatus::Done);
    assert_eq!(projection.hod, StageStatus::Na);
}

#[test]
fn test_cycle_period_validation() {
    assert!(validate_period(date!(2026 - 01 - 01), date!(2026 - 12 - 31)).is_ok());
    assert!(validate_period(date!(2026 - 12 - 31), date!(2026 - 01 - 01)).is_err());
    // strict: equal dates are invalid
    assert!(validate_period(date!(2026 - 06 - 01), date!(2026 - 06 - 01)).is_err());
}

#[test]
fn test_cycle_lock_predicate() {
    let mut cycle: AppraisalCycle =
        AppraisalCycle::new(3, date!(2026 - 01 - 01), date!(2026 - 12 - 31)).unwrap();
    assert!(!cycle.is_locked());
    cycle.active_status = false;
    assert!(cycle.is_locked());
}

#[test]
fn test_cycle_rejects_inverted_period() {
    let result = AppraisalCycle::new(3, date!(2026 - 12 - 31), date!(2026 - 01 - 01));
    assert!(result.is_err());
}
