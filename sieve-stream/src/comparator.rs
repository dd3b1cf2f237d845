// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Comparators deciding whether a candidate duplicates the last emitted value.

use sieve_core::ComparisonOutcome;

/// Judges whether `candidate` duplicates `previous`, the most recently emitted value.
///
/// `E` is the error type of the stream the comparator is attached to, so a
/// failure reason reaches downstream exactly as the comparator produced it.
///
/// Comparators are expected to be pure and deterministic. They take `&mut self`
/// only so that closures capturing mutable state can be used; the stage calls
/// them at most once per incoming value and never concurrently.
pub trait Comparator<T, E> {
    /// Compare the last emitted value with a newly received one.
    fn compare(&mut self, previous: &T, candidate: &T) -> ComparisonOutcome<E>;
}

/// Structural equality through `PartialEq`. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByEquality;

impl<T: PartialEq, E> Comparator<T, E> for ByEquality {
    fn compare(&mut self, previous: &T, candidate: &T) -> ComparisonOutcome<E> {
        ComparisonOutcome::from_equality(previous == candidate)
    }
}

/// Infallible predicate returning `true` when the two values are duplicates.
#[derive(Debug, Clone, Copy)]
pub struct ByPredicate<F>(pub F);

impl<T, E, F> Comparator<T, E> for ByPredicate<F>
where
    F: FnMut(&T, &T) -> bool,
{
    fn compare(&mut self, previous: &T, candidate: &T) -> ComparisonOutcome<E> {
        ComparisonOutcome::from_equality((self.0)(previous, candidate))
    }
}

/// Fallible comparator returning a full [`ComparisonOutcome`].
#[derive(Debug, Clone, Copy)]
pub struct ByFallible<F>(pub F);

impl<T, E, F> Comparator<T, E> for ByFallible<F>
where
    F: FnMut(&T, &T) -> ComparisonOutcome<E>,
{
    fn compare(&mut self, previous: &T, candidate: &T) -> ComparisonOutcome<E> {
        (self.0)(previous, candidate)
    }
}
