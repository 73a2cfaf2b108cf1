// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared test doubles and builders for client tests.

use crate::transport::{Transport, TransportError};
use appraise::{StageFormController, StageSpec};
use appraise_domain::{CapabilitySet, Decision, HrReview, Stage};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

/// One request as seen by the recording transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// An in-memory transport that records every request.
///
/// GET responses are stubbed per path (unknown paths answer `Ok(None)`,
/// the not-found shape). Mutating responses are consumed from a queue in
/// order; an empty queue answers with a network failure so an unexpected
/// request fails loudly.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: RefCell<Vec<RecordedCall>>,
    gets: RefCell<HashMap<String, Result<Option<Value>, TransportError>>>,
    responses: RefCell<VecDeque<Result<Value, TransportError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stubs the response for a GET of `path`.
    pub fn stub_get(&self, path: &str, response: Result<Option<Value>, TransportError>) {
        self.gets.borrow_mut().insert(String::from(path), response);
    }

    /// Queues the next POST/PUT/PATCH response.
    pub fn queue_response(&self, response: Result<Value, TransportError>) {
        self.responses.borrow_mut().push_back(response);
    }

    /// All recorded calls in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// Number of requests issued.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, method: &'static str, path: &str, body: Option<&Value>) {
        self.calls.borrow_mut().push(RecordedCall {
            method,
            path: String::from(path),
            body: body.cloned(),
        });
    }

    fn next_response(&self) -> Result<Value, TransportError> {
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network(String::from("no stubbed response"))))
    }
}

impl Transport for RecordingTransport {
    fn get(&self, path: &str) -> Result<Option<Value>, TransportError> {
        self.record("GET", path, None);
        self.gets.borrow().get(path).cloned().unwrap_or(Ok(None))
    }

    fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.record("POST", path, Some(body));
        self.next_response()
    }

    fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.record("PUT", path, Some(body));
        self.next_response()
    }

    fn patch(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        self.record("PATCH", path, Some(body));
        self.next_response()
    }
}

/// Creates a capability set with only the named flags granted.
pub fn caps(view: bool, create: bool, edit: bool) -> CapabilitySet {
    CapabilitySet {
        view,
        create,
        edit,
        delete: false,
    }
}

/// Creates an HR-stage controller with a bound parent and an active cycle.
pub fn hr_controller(permissions: CapabilitySet) -> StageFormController<HrReview> {
    let mut controller: StageFormController<HrReview> =
        StageFormController::new(StageSpec::builtin(Stage::HumanResource), permissions, true);
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
