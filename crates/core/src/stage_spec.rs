// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use appraise_domain::Stage;

/// Static configuration for one review stage.
///
/// The spec is data only: it describes which endpoint resource the stage's
/// records live under and how the stage reacts to a locked cycle. Field
/// requirements live on the record types themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSpec {
    /// The stage this configuration describes.
    pub stage: Stage,
    /// The endpoint resource the stage's record family lives under.
    pub resource: &'static str,
    /// Whether a locked cycle blocks edits to an existing record.
    ///
    /// Creation is blocked on a locked cycle regardless of this flag. All
    /// built-in stages set it; it exists so a deliberately non-locking
    /// stage can be described without touching the controller.
    pub locks_on_inactive_cycle: bool,
}

impl StageSpec {
    /// Returns the built-in configuration for a stage.
    #[must_use]
    pub const fn builtin(stage: Stage) -> Self {
        Self {
            stage,
            resource: "appraisal",
            locks_on_inactive_cycle: true,
        }
    }
}
