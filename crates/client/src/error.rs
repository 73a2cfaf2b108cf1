// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the client layer.

use crate::transport::TransportError;
use appraise::CoreError;
use thiserror::Error;

/// Errors surfaced by client-layer operations.
///
/// Every variant stops here: callers convert these to user-facing notices,
/// nothing propagates further up a call chain.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The request failed at the transport.
    ///
    /// Local form state is left exactly as the user last edited it.
    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),
    /// The operation was blocked locally, before any network traffic.
    #[error("{0}")]
    Gate(#[from] CoreError),
    /// A response could not be interpreted.
    #[error("Malformed response payload: {0}")]
    Payload(String),
}
