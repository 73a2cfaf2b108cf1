// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Review stage records.
//!
//! One record per stage per appraisal cycle. A record has exactly two
//! lifecycle states observable to the client: absent (stage "Pending") and
//! present (stage "Completed"). The `StageFields` trait is the seam the
//! generic stage-form controller works against; it replaces six
//! near-identical per-stage forms.

use crate::decision::DecisionSet;
use crate::error::DomainError;
use crate::metrics;
use crate::stage::Stage;
use crate::validation::{
    validate_decisions, validate_numeric_present, validate_parent_reference,
    validate_required_text,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The fields of one review stage record.
///
/// Implementors are plain data: the controller owns lifecycle and
/// permission gating, the service owns the wire. `validate` runs
/// synchronously before any network call and surfaces the first failing
/// field.
pub trait StageFields: Clone + Default + Serialize + DeserializeOwned {
    /// The stage this record belongs to.
    const STAGE: Stage;

    /// The record's persisted identifier, if any.
    ///
    /// Presence of the id is the sole create-vs-update discriminator.
    fn record_id(&self) -> Option<i64>;

    /// Adopts a server-assigned identifier.
    fn set_record_id(&mut self, id: i64);

    /// The parent reference: the appraisal cycle for Employee/RM records,
    /// the employee-appraisal id for HR/HOD/COO/CEO records.
    fn parent_reference(&self) -> Option<i64>;

    /// Binds the parent reference.
    fn set_parent_reference(&mut self, id: i64);

    /// Validates the record for submission.
    ///
    /// # Errors
    ///
    /// Returns the first failing field's error.
    fn validate(&self) -> Result<(), DomainError>;
}

/// The employee's self-review record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeReview {
    /// The persisted record identifier.
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    /// The appraisal cycle this record belongs to.
    #[serde(default)]
    pub appraisal: Option<i64>,
    /// Key achievements during the review period.
    #[serde(default)]
    pub achievements: String,
    /// Self-assessed strengths.
    #[serde(default)]
    pub strengths: String,
    /// Self-assessed areas needing improvement.
    #[serde(default)]
    pub improvement_areas: String,
    /// Support requested from the organization. Optional.
    #[serde(default)]
    pub support_required: String,
}

impl StageFields for EmployeeReview {
    const STAGE: Stage = Stage::Employee;

    fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    fn set_record_id(&mut self, id: i64) {
        self.record_id = Some(id);
    }

    fn parent_reference(&self) -> Option<i64> {
        self.appraisal
    }

    fn set_parent_reference(&mut self, id: i64) {
        self.appraisal = Some(id);
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_parent_reference(Self::STAGE, self.appraisal)?;
        validate_required_text("achievements", &self.achievements)?;
        validate_required_text("strengths", &self.strengths)?;
        validate_required_text("improvement_areas", &self.improvement_areas)?;
        Ok(())
    }
}

/// The reporting manager's review record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RmReview {
    /// The persisted record identifier.
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    /// The appraisal cycle this record belongs to.
    #[serde(default)]
    pub appraisal: Option<i64>,
    /// The manager's assessment of the employee's performance.
    #[serde(default)]
    pub performance_remarks: String,
    /// Observed strengths.
    #[serde(default)]
    pub strengths: String,
    /// Observed areas needing improvement.
    #[serde(default)]
    pub improvement_areas: String,
    /// Recommended training. Optional.
    #[serde(default)]
    pub training_recommendation: String,
}

impl StageFields for RmReview {
    const STAGE: Stage = Stage::ReportingManager;

    fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    fn set_record_id(&mut self, id: i64) {
        self.record_id = Some(id);
    }

    fn parent_reference(&self) -> Option<i64> {
        self.appraisal
    }

    fn set_parent_reference(&mut self, id: i64) {
        self.appraisal = Some(id);
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_parent_reference(Self::STAGE, self.appraisal)?;
        validate_required_text("performance_remarks", &self.performance_remarks)?;
        validate_required_text("strengths", &self.strengths)?;
        validate_required_text("improvement_areas", &self.improvement_areas)?;
        Ok(())
    }
}

/// The HR review record.
///
/// Carries the attendance, leave and salary inputs plus the five enumerated
/// decisions. Numeric fields are presence-validated: an entered zero is a
/// valid value, only an absent value blocks submission.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HrReview {
    /// The persisted record identifier.
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    /// The employee-appraisal record this review references.
    #[serde(default)]
    pub employee_appraisal: Option<i64>,
    /// Casual leave days taken.
    #[serde(default)]
    pub casual_leave: Option<f64>,
    /// Sick leave days taken.
    #[serde(default)]
    pub sick_leave: Option<f64>,
    /// Annual leave days taken.
    #[serde(default)]
    pub annual_leave: Option<f64>,
    /// Days arrived on time.
    #[serde(default)]
    pub on_time: Option<u32>,
    /// Days arrived late.
    #[serde(default)]
    pub delay: Option<u32>,
    /// Days left early.
    #[serde(default)]
    pub early_exit: Option<u32>,
    /// Current basic salary.
    #[serde(default)]
    pub current_basic: Option<f64>,
    /// Proposed basic salary.
    #[serde(default)]
    pub proposed_basic: Option<f64>,
    /// The five enumerated decisions with their remarks.
    #[serde(flatten)]
    pub decisions: DecisionSet,
    /// HR's overall remarks.
    #[serde(default)]
    pub hr_remarks: String,
}

impl HrReview {
    /// Total leave across the three categories; missing inputs count as 0.
    #[must_use]
    pub fn total_leave(&self) -> f64 {
        metrics::total_leave(self.casual_leave, self.sick_leave, self.annual_leave)
    }

    /// Attendance percentage for display; "N/A" when no days are recorded.
    #[must_use]
    pub fn attendance_display(&self) -> String {
        metrics::format_attendance(
            self.on_time.unwrap_or(0),
            self.delay.unwrap_or(0),
            self.early_exit.unwrap_or(0),
        )
    }

    /// Current gross salary derived via the cycle's factor.
    #[must_use]
    pub fn current_gross(&self, salary_factor: Option<f64>) -> Option<i64> {
        metrics::gross_salary(self.current_basic, salary_factor)
    }

    /// Proposed gross salary derived via the cycle's factor.
    #[must_use]
    pub fn proposed_gross(&self, salary_factor: Option<f64>) -> Option<i64> {
        metrics::gross_salary(self.proposed_basic, salary_factor)
    }

    /// Null-safe difference between proposed and current gross.
    #[must_use]
    pub fn gross_difference(&self, salary_factor: Option<f64>) -> Option<i64> {
        metrics::gross_difference(
            self.proposed_gross(salary_factor),
            self.current_gross(salary_factor),
        )
    }
}

impl StageFields for HrReview {
    const STAGE: Stage = Stage::HumanResource;

    fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    fn set_record_id(&mut self, id: i64) {
        self.record_id = Some(id);
    }

    fn parent_reference(&self) -> Option<i64> {
        self.employee_appraisal
    }

    fn set_parent_reference(&mut self, id: i64) {
        self.employee_appraisal = Some(id);
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_parent_reference(Self::STAGE, self.employee_appraisal)?;
        validate_required_text("hr_remarks", &self.hr_remarks)?;
        validate_numeric_present("casual_leave", self.casual_leave)?;
        validate_numeric_present("sick_leave", self.sick_leave)?;
        validate_numeric_present("annual_leave", self.annual_leave)?;
        validate_numeric_present("on_time", self.on_time)?;
        validate_numeric_present("delay", self.delay)?;
        validate_numeric_present("early_exit", self.early_exit)?;
        validate_numeric_present("current_basic", self.current_basic)?;
        validate_numeric_present("proposed_basic", self.proposed_basic)?;
        validate_decisions(&self.decisions)?;
        Ok(())
    }
}

/// The head-of-department review record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HodReview {
    /// The persisted record identifier.
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    /// The employee-appraisal record this review references.
    #[serde(default)]
    pub employee_appraisal: Option<i64>,
    /// The five enumerated decisions with their remarks.
    #[serde(flatten)]
    pub decisions: DecisionSet,
    /// HOD's overall remarks.
    #[serde(default)]
    pub hod_remarks: String,
}

impl StageFields for HodReview {
    const STAGE: Stage = Stage::HeadOfDepartment;

    fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    fn set_record_id(&mut self, id: i64) {
        self.record_id = Some(id);
    }

    fn parent_reference(&self) -> Option<i64> {
        self.employee_appraisal
    }

    fn set_parent_reference(&mut self, id: i64) {
        self.employee_appraisal = Some(id);
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_parent_reference(Self::STAGE, self.employee_appraisal)?;
        validate_required_text("hod_remarks", &self.hod_remarks)?;
        validate_decisions(&self.decisions)?;
        Ok(())
    }
}

/// The chief operating officer's review record.
///
/// The five-decision completeness invariant binds HR/HOD/CEO only; the COO
/// record carries endorsement remarks without a required decision set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CooReview {
    /// The persisted record identifier.
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    /// The employee-appraisal record this review references.
    #[serde(default)]
    pub employee_appraisal: Option<i64>,
    /// COO's endorsement remarks.
    #[serde(default)]
    pub endorsement_remarks: String,
    /// Recommendation forwarded to the CEO. Optional.
    #[serde(default)]
    pub recommendation: String,
}

impl StageFields for CooReview {
    const STAGE: Stage = Stage::ChiefOperatingOfficer;

    fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    fn set_record_id(&mut self, id: i64) {
        self.record_id = Some(id);
    }

    fn parent_reference(&self) -> Option<i64> {
        self.employee_appraisal
    }

    fn set_parent_reference(&mut self, id: i64) {
        self.employee_appraisal = Some(id);
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_parent_reference(Self::STAGE, self.employee_appraisal)?;
        validate_required_text("endorsement_remarks", &self.endorsement_remarks)?;
        Ok(())
    }
}

/// The chief executive officer's review record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CeoReview {
    /// The persisted record identifier.
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<i64>,
    /// The employee-appraisal record this review references.
    #[serde(default)]
    pub employee_appraisal: Option<i64>,
    /// The five enumerated decisions with their remarks.
    #[serde(flatten)]
    pub decisions: DecisionSet,
    /// CEO's final remarks.
    #[serde(default)]
    pub final_remarks: String,
}

impl StageFields for CeoReview {
    const STAGE: Stage = Stage::ChiefExecutiveOfficer;

    fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    fn set_record_id(&mut self, id: i64) {
        self.record_id = Some(id);
    }

    fn parent_reference(&self) -> Option<i64> {
        self.employee_appraisal
    }

    fn set_parent_reference(&mut self, id: i64) {
        self.employee_appraisal = Some(id);
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_parent_reference(Self::STAGE, self.employee_appraisal)?;
        validate_required_text("final_remarks", &self.final_remarks)?;
        validate_decisions(&self.decisions)?;
        Ok(())
    }
}
