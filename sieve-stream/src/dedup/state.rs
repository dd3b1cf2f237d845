// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::comparator::Comparator;
use core::marker::PhantomData;
use sieve_core::ComparisonOutcome;

/// How a terminated stage ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEnd {
    /// Upstream completed normally.
    Completed,
    /// Upstream failed or the comparator failed.
    Failed,
}

/// Decision taken for a single value pushed into [`DedupState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T, E> {
    /// Forward the value downstream.
    Emit(T),
    /// Drop the value, it duplicates the last emitted one.
    Suppress,
    /// The comparator failed: forward the reason as the terminal error.
    Fail(E),
    /// The stage is already terminated; the value was not looked at.
    Ignored,
}

#[derive(Debug)]
enum Phase<T> {
    Unstarted,
    Active { last_accepted: T },
    Terminated(StageEnd),
}

/// Synchronous state machine behind [`DedupStage`](super::DedupStage).
///
/// Drive it with [`on_value`](Self::on_value) for every value and one of
/// [`on_completed`](Self::on_completed) / [`on_failed`](Self::on_failed) for the
/// terminal signal. Phases only move forward:
/// `Unstarted → Active → Terminated`, and `Terminated` holds no value.
///
/// ```
/// use sieve_stream::comparator::ByEquality;
/// use sieve_stream::dedup::{DedupState, Step};
///
/// let mut state = DedupState::<&str, (), _>::new(ByEquality);
///
/// assert_eq!(state.on_value("onefish"), Step::Emit("onefish"));
/// assert_eq!(state.on_value("onefish"), Step::Suppress);
/// assert_eq!(state.on_value("twofish"), Step::Emit("twofish"));
/// assert_eq!(state.last_accepted(), Some(&"twofish"));
/// ```
#[derive(Debug)]
pub struct DedupState<T, E, C> {
    phase: Phase<T>,
    comparator: C,
    _error: PhantomData<fn() -> E>,
}

impl<T, E, C> DedupState<T, E, C>
where
    T: Clone,
    C: Comparator<T, E>,
{
    /// Creates an unstarted state around `comparator`.
    pub const fn new(comparator: C) -> Self {
        Self {
            phase: Phase::Unstarted,
            comparator,
            _error: PhantomData,
        }
    }

    /// Processes one value from upstream.
    pub fn on_value(&mut self, value: T) -> Step<T, E> {
        let outcome = match &self.phase {
            Phase::Terminated(_) => return Step::Ignored,
            Phase::Unstarted => ComparisonOutcome::NotEqual,
            Phase::Active { last_accepted } => self.comparator.compare(last_accepted, &value),
        };

        match outcome {
            ComparisonOutcome::Equal => Step::Suppress,
            ComparisonOutcome::NotEqual => {
                self.phase = Phase::Active {
                    last_accepted: value.clone(),
                };
                Step::Emit(value)
            }
            ComparisonOutcome::ComparisonFailed(reason) => {
                self.phase = Phase::Terminated(StageEnd::Failed);
                Step::Fail(reason)
            }
        }
    }

    /// Upstream completed. Returns `false` if the stage had already terminated.
    pub fn on_completed(&mut self) -> bool {
        self.terminate(StageEnd::Completed)
    }

    /// Upstream failed. Returns `false` if the stage had already terminated.
    pub fn on_failed(&mut self) -> bool {
        self.terminate(StageEnd::Failed)
    }

    fn terminate(&mut self, how: StageEnd) -> bool {
        if self.is_terminated() {
            return false;
        }
        self.phase = Phase::Terminated(how);
        true
    }
}

impl<T, E, C> DedupState<T, E, C> {
    /// The value duplicates are currently compared against.
    pub const fn last_accepted(&self) -> Option<&T> {
        match &self.phase {
            Phase::Active { last_accepted } => Some(last_accepted),
            Phase::Unstarted | Phase::Terminated(_) => None,
        }
    }

    /// `true` once a terminal signal was processed or the comparator failed.
    pub const fn is_terminated(&self) -> bool {
        matches!(self.phase, Phase::Terminated(_))
    }

    /// How the stage ended, if it has.
    pub const fn termination(&self) -> Option<StageEnd> {
        match self.phase {
            Phase::Terminated(how) => Some(how),
            Phase::Unstarted | Phase::Active { .. } => None,
        }
    }
}
