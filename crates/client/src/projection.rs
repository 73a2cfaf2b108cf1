// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status-projection queries.
//!
//! Projections are computed server-side and fetched verbatim; the client
//! only interprets them. The list endpoint sometimes answers with a single
//! object instead of an array (an interface quirk of the backend, not a
//! client bug), so responses are normalized to a list before decoding.

use crate::endpoints::status_projection_path;
use crate::error::ClientError;
use crate::transport::Transport;
use appraise_domain::StatusProjection;
use serde_json::Value;
use tracing::debug;

/// Normalizes an endpoint response that may be an object or an array.
fn normalize_rows(value: Value) -> Vec<Value> {
    match value {
        Value::Array(rows) => rows,
        other => vec![other],
    }
}

/// Fetches the status-projection rows for all employees.
///
/// # Errors
///
/// Returns an error if the request fails or a row cannot be decoded.
pub fn fetch_status_projections<T: Transport>(
    transport: &T,
) -> Result<Vec<StatusProjection>, ClientError> {
    let path: String = status_projection_path(None);
    debug!(path = %path, "Fetching status projections");

    let Some(value) = transport.get(&path)? else {
        return Ok(Vec::new());
    };

    normalize_rows(value)
        .into_iter()
        .map(|row| {
            serde_json::from_value::<StatusProjection>(row)
                .map_err(|err| ClientError::Payload(err.to_string()))
        })
        .collect()
}

/// Fetches the status projection for one employee.
///
/// Returns `Ok(None)` when the backend has no row for the employee.
///
/// # Errors
///
/// Returns an error if the request fails or the row cannot be decoded.
pub fn fetch_employee_projection<T: Transport>(
    transport: &T,
    employee_id: i64,
) -> Result<Option<StatusProjection>, ClientError> {
    let path: String = status_projection_path(Some(employee_id));
    debug!(path = %path, "Fetching employee status projection");

    let Some(value) = transport.get(&path)? else {
        return Ok(None);
    };

    // Single-employee endpoint shares the object-or-array quirk.
    let row: Value = normalize_rows(value)
        .into_iter()
        .next()
        .ok_or_else(|| ClientError::Payload(String::from("empty projection response")))?;

    serde_json::from_value::<StatusProjection>(row)
        .map(Some)
        .map_err(|err| ClientError::Payload(err.to_string()))
}
