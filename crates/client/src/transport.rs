// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transport seam to the REST backend.
//!
//! The backend is an external collaborator; this layer only fixes the
//! request shape. Implementations decide how requests are actually issued
//! (blocking client, async bridge, test double); nothing above this trait
//! knows or cares.

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by a transport implementation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response.
    #[error("Network failure: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    ///
    /// Authorization failures (401/403) are not treated specially; a stale
    /// permission cache fails the same way any other server error does.
    #[error("Server returned status {code}: {message}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The response body or reason phrase.
        message: String,
    },
}

/// A JSON REST transport.
///
/// All payloads are JSON values; typed structs live above this seam.
/// Implementations perform exactly one attempt per call; retry policy, if
/// any ever exists, belongs to the caller, and none is applied here.
pub trait Transport {
    /// Issues a GET.
    ///
    /// Returns `Ok(None)` for a 404: at this layer "not found" is an
    /// ordinary answer, not an error.
    ///
    /// # Errors
    ///
    /// Returns a transport error for network failures or non-success,
    /// non-404 statuses.
    fn get(&self, path: &str) -> Result<Option<Value>, TransportError>;

    /// Issues a POST with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a transport error for network failures or non-success
    /// statuses.
    fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;

    /// Issues a PUT with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a transport error for network failures or non-success
    /// statuses.
    fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError>;

    /// Issues a PATCH with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns a transport error for network failures or non-success
    /// statuses.
    fn patch(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
}
