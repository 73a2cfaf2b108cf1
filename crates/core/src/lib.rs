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

mod context;
mod controller;
mod error;
mod form;
mod orchestrator;
mod stage_spec;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use context::ActorContext;
pub use controller::{StageFormController, SubmitPlan};
pub use error::CoreError;
pub use form::{RecordState, SubmitMethod};
pub use orchestrator::AppraisalDetails;
pub use stage_spec::StageSpec;
