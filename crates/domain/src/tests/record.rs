// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CeoReview, CooReview, Decision, DomainError, EmployeeReview, HrReview, StageFields,
};

/// A fully-filled HR review suitable as a baseline for validation tests.
fn filled_hr_review() -> HrReview {
    let mut review: HrReview = HrReview {
        employee_appraisal: Some(10),
        casual_leave: Some(2.0),
        sick_leave: Some(3.0),
        annual_leave: Some(4.0),
        on_time: Some(200),
        delay: Some(10),
        early_exit: Some(5),
        current_basic: Some(50000.0),
        proposed_basic: Some(56000.0),
        hr_remarks: String::from("Consistent performer"),
        ..HrReview::default()
    };
    review.decisions.promo_w_increment = Decision::Set(true);
    review.decisions.promo_w_pp = Decision::Set(false);
    review.decisions.increment_w_no_promo = Decision::Set(false);
    review.decisions.pp_only = Decision::Set(false);
    review.decisions.deferred = Decision::Set(false);
    review
}

#[test]
fn test_employee_review_requires_parent() {
    let review: EmployeeReview = EmployeeReview {
        achievements: String::from("Shipped the billing migration"),
        strengths: String::from("Ownership"),
        improvement_areas: String::from("Delegation"),
        ..EmployeeReview::default()
    };
    assert!(matches!(
        review.validate(),
        Err(DomainError::MissingParentReference { .. })
    ));
}

#[test]
fn test_employee_review_valid_when_filled() {
    let mut review: EmployeeReview = EmployeeReview {
        achievements: String::from("Shipped the billing migration"),
        strengths: String::from("Ownership"),
        improvement_areas: String::from("Delegation"),
        ..EmployeeReview::default()
    };
    review.set_parent_reference(4);
    assert!(review.validate().is_ok());
    // support_required stays optional
    assert!(review.support_required.is_empty());
}

#[test]
fn test_employee_review_empty_text_blocks() {
    let mut review: EmployeeReview = EmployeeReview::default();
    review.set_parent_reference(4);
    assert_eq!(
        review.validate(),
        Err(DomainError::EmptyField {
            field: "achievements"
        })
    );
}

#[test]
fn test_hr_review_valid_baseline() {
    assert!(filled_hr_review().validate().is_ok());
}

#[test]
fn test_hr_review_zero_leave_is_valid() {
    let review: HrReview = HrReview {
        casual_leave: Some(0.0),
        sick_leave: Some(0.0),
        annual_leave: Some(0.0),
        ..filled_hr_review()
    };
    assert!(review.validate().is_ok());
}

#[test]
fn test_hr_review_missing_numeric_blocks() {
    let review: HrReview = HrReview {
        sick_leave: None,
        ..filled_hr_review()
    };
    assert_eq!(
        review.validate(),
        Err(DomainError::MissingNumericField {
            field: "sick_leave"
        })
    );
}

#[test]
fn test_hr_review_unset_decision_blocks() {
    let mut review: HrReview = filled_hr_review();
    review.decisions.deferred = Decision::Unset;
    assert_eq!(
        review.validate(),
        Err(DomainError::DecisionNotSet { field: "deferred" })
    );
}

#[test]
fn test_hr_review_derived_fields() {
    let review: HrReview = filled_hr_review();
    assert!((review.total_leave() - 9.0).abs() < f64::EPSILON);
    // 200 / 215
    assert_eq!(review.attendance_display(), "93.02%");
    assert_eq!(review.current_gross(Some(2.0)), Some(25000));
    assert_eq!(review.proposed_gross(Some(2.0)), Some(28000));
    assert_eq!(review.gross_difference(Some(2.0)), Some(3000));
    // absent factor yields placeholders, not errors
    assert_eq!(review.current_gross(None), None);
    assert_eq!(review.gross_difference(None), None);
}

#[test]
fn test_coo_review_does_not_require_decisions() {
    let review: CooReview = CooReview {
        employee_appraisal: Some(10),
        endorsement_remarks: String::from("Endorsed"),
        ..CooReview::default()
    };
    assert!(review.validate().is_ok());
}

#[test]
fn test_ceo_review_requires_decisions() {
    let review: CeoReview = CeoReview {
        employee_appraisal: Some(10),
        final_remarks: String::from("Approved"),
        ..CeoReview::default()
    };
    assert!(matches!(
        review.validate(),
        Err(DomainError::DecisionNotSet { .. })
    ));
}

#[test]
fn test_record_id_absent_on_fresh_records() {
    assert_eq!(EmployeeReview::default().record_id(), None);
    assert_eq!(HrReview::default().record_id(), None);
    let mut review: HrReview = HrReview::default();
    review.set_record_id(99);
    assert_eq!(review.record_id(), Some(99));
}

#[test]
fn test_hr_review_deserializes_wire_shape() {
    let review: HrReview = serde_json::from_str(
        r#"{
            "id": 31,
            "employee_appraisal": 10,
            "casual_leave": 1.5,
            "sick_leave": 0,
            "annual_leave": 2,
            "on_time": 180,
            "delay": 12,
            "early_exit": 3,
            "current_basic": 48000,
            "proposed_basic": 52000,
            "promo_w_increment": false,
            "promo_w_pp": null,
            "pp_only": "",
            "hr_remarks": "On track"
        }"#,
    )
    .unwrap();

    assert_eq!(review.record_id(), Some(31));
    assert_eq!(review.sick_leave, Some(0.0));
    assert_eq!(review.decisions.promo_w_increment, Decision::Set(false));
    assert_eq!(review.decisions.promo_w_pp, Decision::Unset);
    assert_eq!(review.decisions.pp_only, Decision::Unset);
    assert_eq!(review.decisions.deferred, Decision::Unset);
}

#[test]
fn test_fresh_record_serializes_without_id() {
    let review: EmployeeReview = EmployeeReview::default();
    let value: serde_json::Value = serde_json::to_value(&review).unwrap();
    assert!(value.get("id").is_none());
}
