// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The lifecycle state of a stage record as seen by the client.
///
/// Exactly two states exist: absent (the stage is "Pending") and present
/// (the stage is "Completed"). There is no intermediate or rollback state
/// observable at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordState {
    /// The record has not been created yet. Submission creates it.
    Absent,
    /// The record exists under the given server-assigned identifier.
    Present(i64),
}

impl RecordState {
    /// Derives the record state from an optional persisted identifier.
    #[must_use]
    pub const fn from_record_id(record_id: Option<i64>) -> Self {
        match record_id {
            None => Self::Absent,
            Some(id) => Self::Present(id),
        }
    }

    /// Returns whether the record exists.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns the persisted identifier, if any.
    #[must_use]
    pub const fn record_id(&self) -> Option<i64> {
        match self {
            Self::Absent => None,
            Self::Present(id) => Some(*id),
        }
    }

    /// Chooses the submission method for this record state.
    ///
    /// POST iff the id is absent, PUT iff it is present. Nothing else may
    /// influence this choice.
    #[must_use]
    pub const fn submit_method(&self) -> SubmitMethod {
        match self {
            Self::Absent => SubmitMethod::Post,
            Self::Present(id) => SubmitMethod::Put(*id),
        }
    }
}

/// The HTTP method a submission will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMethod {
    /// Create the record.
    Post,
    /// Update the existing record with the given identifier.
    Put(i64),
}

impl SubmitMethod {
    /// Returns whether this submission creates a new record.
    #[must_use]
    pub const fn is_create(&self) -> bool {
        matches!(self, Self::Post)
    }
}
