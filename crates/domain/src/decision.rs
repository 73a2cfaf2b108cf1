// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tri-state decision fields for review stage records.
//!
//! A decision is explicitly `Unset` until an actor records it. `Set(false)`
//! is a valid, complete decision and must never collapse to `Unset` through
//! (de)serialization or defaulting.

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A tri-state decision value: unset, or set to true/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decision {
    /// The decision has not been recorded.
    #[default]
    Unset,
    /// The decision has been recorded.
    Set(bool),
}

impl Decision {
    /// Returns whether the decision has been recorded.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns the recorded value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(*value),
        }
    }
}

impl From<bool> for Decision {
    fn from(value: bool) -> Self {
        Self::Set(value)
    }
}

impl Serialize for Decision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unset => serializer.serialize_none(),
            Self::Set(value) => serializer.serialize_bool(*value),
        }
    }
}

struct DecisionVisitor;

impl<'de> Visitor<'de> for DecisionVisitor {
    type Value = Decision;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a boolean, null, or an empty string")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Decision::Set(value))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Decision::Unset)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Decision::Unset)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Self)
    }

    // Some backends send "" for a decision that was never touched.
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if value.is_empty() {
            Ok(Decision::Unset)
        } else {
            Err(de::Error::invalid_value(de::Unexpected::Str(value), &self))
        }
    }
}

impl<'de> Deserialize<'de> for Decision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecisionVisitor)
    }
}

/// The five enumerated decisions recorded by HR, HOD and CEO reviews.
///
/// Each decision pairs with a free-text remark. A record carrying a
/// `DecisionSet` cannot be submitted until all five decisions are set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecisionSet {
    /// Promotion with increment.
    #[serde(default)]
    pub promo_w_increment: Decision,
    /// Remark paired with the promotion-with-increment decision.
    #[serde(default)]
    pub promo_w_increment_remarks: String,
    /// Promotion with performance pay.
    #[serde(default)]
    pub promo_w_pp: Decision,
    /// Remark paired with the promotion-with-performance-pay decision.
    #[serde(default)]
    pub promo_w_pp_remarks: String,
    /// Increment without promotion.
    #[serde(default)]
    pub increment_w_no_promo: Decision,
    /// Remark paired with the increment-without-promotion decision.
    #[serde(default)]
    pub increment_w_no_promo_remarks: String,
    /// Performance pay only.
    #[serde(default)]
    pub pp_only: Decision,
    /// Remark paired with the performance-pay-only decision.
    #[serde(default)]
    pub pp_only_remarks: String,
    /// Decision deferred.
    #[serde(default)]
    pub deferred: Decision,
    /// Remark paired with the deferred decision.
    #[serde(default)]
    pub deferred_remarks: String,
}

impl DecisionSet {
    /// The field names of the five decisions, in declaration order.
    pub const FIELD_NAMES: [&'static str; 5] = [
        "promo_w_increment",
        "promo_w_pp",
        "increment_w_no_promo",
        "pp_only",
        "deferred",
    ];

    /// Returns the decision values in declaration order.
    #[must_use]
    pub const fn values(&self) -> [Decision; 5] {
        [
            self.promo_w_increment,
            self.promo_w_pp,
            self.increment_w_no_promo,
            self.pp_only,
            self.deferred,
        ]
    }

    /// Returns the names of decisions that have not been set.
    #[must_use]
    pub fn unset_fields(&self) -> Vec<&'static str> {
        Self::FIELD_NAMES
            .iter()
            .zip(self.values())
            .filter_map(|(name, value)| if value.is_set() { None } else { Some(*name) })
            .collect()
    }

    /// Returns whether all five decisions have been set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.values().iter().all(Decision::is_set)
    }
}
