// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::TestFailure;
use sieve_core::ComparisonOutcome;
use std::fmt::{self, Display};

pub fn one_fish() -> String {
    "onefish".to_string()
}

pub fn two_fish() -> String {
    "twofish".to_string()
}

pub fn red_fish() -> String {
    "redfish".to_string()
}

pub fn blue_fish() -> String {
    "bluefish".to_string()
}

/// A record whose identity is its `id`; the label is payload.
///
/// Deliberately not `PartialEq`: tests must pick a comparator explicitly.
#[derive(Debug, Clone)]
pub struct Tagged {
    pub id: u32,
    pub label: String,
}

impl Tagged {
    #[must_use]
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

impl Display for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tagged[id={}, label={}]", self.id, self.label)
    }
}

pub fn tagged(id: u32) -> Tagged {
    Tagged::new(id, format!("item-{id}"))
}

/// `{id:1}, {id:1}, {id:2}, {id:2}, {id:1}`
pub fn tagged_run() -> Vec<Tagged> {
    [1, 1, 2, 2, 1].into_iter().map(tagged).collect()
}

/// `{id:1}, {id:1}, {id:2}, {id:2}, {id:5}`
pub fn tagged_run_ending_in_five() -> Vec<Tagged> {
    [1, 1, 2, 2, 5].into_iter().map(tagged).collect()
}

/// Compares by `id`, refusing any pair that involves `forbidden_id`.
pub fn id_comparator_rejecting(
    forbidden_id: u32,
) -> impl FnMut(&Tagged, &Tagged) -> ComparisonOutcome<TestFailure> + Send + Clone {
    move |previous, candidate| {
        if previous.id == forbidden_id || candidate.id == forbidden_id {
            ComparisonOutcome::ComparisonFailed(TestFailure::RejectedId(forbidden_id))
        } else {
            ComparisonOutcome::from_equality(previous.id == candidate.id)
        }
    }
}
