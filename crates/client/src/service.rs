// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stage record services.
//!
//! These functions drive a stage-form controller through its load and
//! submit cycle over the transport. Every operation is single-attempt: a
//! failed request is terminal for that user interaction and requires a
//! manual re-trigger. Errors stop here and become user-facing notices.

use crate::endpoints::{cycle_path, stage_review_path};
use crate::error::ClientError;
use crate::transport::Transport;
use appraise::{StageFormController, SubmitMethod, SubmitPlan};
use appraise_domain::{AppraisalCycle, CyclePatch, StageFields, ViewContext};
use serde_json::Value;
use tracing::{debug, info, warn};

/// The outcome of a load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The `view` capability is not held; no request was issued.
    Skipped,
    /// A record was loaded and now backs the form.
    Loaded,
    /// No record exists (or the load failed); the form was reset to
    /// create-mode defaults.
    Reset,
}

/// Loads a stage record into a controller.
///
/// Gated on the `view` capability: without it the transport is never
/// touched. Not-found and failure both reset the form to stage defaults:
/// "no record yet" is an ordinary state, and a failed load must leave the
/// user in a coherent create-mode form rather than an error screen.
///
/// # Arguments
///
/// * `controller` - The stage-form controller to populate
/// * `transport` - The REST transport
/// * `view` - The view-context selecting the endpoint family
/// * `locator` - The record locator; `None` for the self-scoped endpoint
pub fn load_stage_record<F, T>(
    controller: &mut StageFormController<F>,
    transport: &T,
    view: ViewContext,
    locator: Option<i64>,
) -> LoadOutcome
where
    F: StageFields,
    T: Transport,
{
    if !controller.can_load() {
        debug!(stage = %controller.spec().stage, "Load skipped: view capability not held");
        return LoadOutcome::Skipped;
    }

    let path: String = stage_review_path(
        controller.spec().resource,
        view,
        controller.spec().stage,
        locator,
    );
    debug!(path = %path, "Loading stage record");

    match transport.get(&path) {
        Ok(Some(value)) => match serde_json::from_value::<F>(value) {
            Ok(fields) => {
                controller.apply_loaded(fields);
                LoadOutcome::Loaded
            }
            Err(err) => {
                warn!(path = %path, error = %err, "Undecodable stage record; resetting form");
                controller.reset_to_defaults();
                LoadOutcome::Reset
            }
        },
        Ok(None) => {
            debug!(path = %path, "No stage record yet; form in create mode");
            controller.reset_to_defaults();
            LoadOutcome::Reset
        }
        Err(err) => {
            warn!(path = %path, error = %err, "Stage record load failed; resetting form");
            controller.reset_to_defaults();
            LoadOutcome::Reset
        }
    }
}

/// Submits a stage record.
///
/// The controller gates and validates first; nothing reaches the wire on a
/// local failure. POST and PUT are chosen solely by id presence. On
/// success the server's record wholly replaces local state; on failure
/// local state is left exactly as the user last edited it.
///
/// # Errors
///
/// * `ClientError::Gate` for pre-flight permission/validation failures
/// * `ClientError::Transport` when the request fails
/// * `ClientError::Payload` when the response cannot be decoded
pub fn submit_stage_record<F, T>(
    controller: &mut StageFormController<F>,
    transport: &T,
    view: ViewContext,
) -> Result<(), ClientError>
where
    F: StageFields,
    T: Transport,
{
    let plan: SubmitPlan<F> = controller.prepare_submit()?;
    let body: Value = serde_json::to_value(&plan.fields)
        .map_err(|err| ClientError::Payload(err.to_string()))?;

    let stage = controller.spec().stage;
    let resource: &str = controller.spec().resource;

    let response: Value = match plan.method {
        SubmitMethod::Post => {
            let path: String = stage_review_path(resource, view, stage, None);
            info!(path = %path, stage = %stage, "Creating stage record");
            transport.post(&path, &body).map_err(|err| {
                warn!(path = %path, error = %err, "Stage record creation failed");
                ClientError::Transport(err)
            })?
        }
        SubmitMethod::Put(id) => {
            let path: String = stage_review_path(resource, view, stage, Some(id));
            info!(path = %path, stage = %stage, "Updating stage record");
            transport.put(&path, &body).map_err(|err| {
                warn!(path = %path, error = %err, "Stage record update failed");
                ClientError::Transport(err)
            })?
        }
    };

    let fields: F = serde_json::from_value::<F>(response)
        .map_err(|err| ClientError::Payload(err.to_string()))?;
    controller.apply_submit_success(fields);
    Ok(())
}

/// Submits a validated cycle-period change.
///
/// # Errors
///
/// Returns an error if the request fails or the response cannot be
/// decoded.
pub fn submit_cycle_period<T: Transport>(
    transport: &T,
    patch: &CyclePatch,
) -> Result<AppraisalCycle, ClientError> {
    let path: String = cycle_path(patch.cycle_id);
    let body: Value =
        serde_json::to_value(patch).map_err(|err| ClientError::Payload(err.to_string()))?;

    info!(path = %path, "Patching appraisal period");
    let response: Value = transport.patch(&path, &body)?;

    serde_json::from_value::<AppraisalCycle>(response)
        .map_err(|err| ClientError::Payload(err.to_string()))
}
