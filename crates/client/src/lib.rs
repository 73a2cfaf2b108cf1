// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod endpoints;
mod error;
mod permissions;
mod projection;
mod service;
mod transport;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use endpoints::{cycle_path, role_permission_path, stage_review_path, status_projection_path};
pub use error::ClientError;
pub use permissions::{resolve_details_permissions, resolve_permissions, resolve_stage_permissions};
pub use projection::{fetch_employee_projection, fetch_status_projections};
pub use service::{LoadOutcome, load_stage_record, submit_cycle_period, submit_stage_record};
pub use transport::{Transport, TransportError};
