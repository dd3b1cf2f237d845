// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::SieveError;

/// A stream item that can be either a value or an error.
///
/// An `Error` item is the stream's `Failed` terminal signal: operators forward it
/// and then end. The end of the underlying stream (`None`) is the `Completed`
/// terminal signal.
///
/// The error type defaults to [`SieveError`] but any caller-defined type can be
/// used, in which case it flows through operators untouched.
#[derive(Debug, Clone)]
pub enum StreamItem<T, E = SieveError> {
    /// A successful value
    Value(T),
    /// An error that terminates the stream
    Error(E),
}

impl<T: PartialEq, E> PartialEq for StreamItem<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T, E> StreamItem<T, E> {
    /// Returns `true` if this is a `Value`.
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamItem::Value(_))
    }

    /// Returns `true` if this is an `Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// Converts from `StreamItem<T, E>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            StreamItem::Value(v) => Some(v),
            StreamItem::Error(_) => None,
        }
    }

    /// Converts from `StreamItem<T, E>` to `Option<E>`, discarding values.
    pub fn err(self) -> Option<E> {
        match self {
            StreamItem::Value(_) => None,
            StreamItem::Error(e) => Some(e),
        }
    }

    /// Maps the contained value, leaving errors untouched.
    pub fn map<U, F>(self, f: F) -> StreamItem<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(f(v)),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// Maps the contained error, leaving values untouched.
    pub fn map_err<E2, O>(self, op: O) -> StreamItem<T, E2>
    where
        O: FnOnce(E) -> E2,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(v),
            StreamItem::Error(e) => StreamItem::Error(op(e)),
        }
    }

    /// Returns the contained value, panicking if it's an error.
    ///
    /// # Panics
    ///
    /// Panics if the item is an `Error`.
    pub fn unwrap(self) -> T
    where
        E: std::fmt::Debug,
    {
        match self {
            StreamItem::Value(v) => v,
            StreamItem::Error(e) => {
                panic!("called `StreamItem::unwrap()` on an `Error` value: {e:?}")
            }
        }
    }

    /// Returns the contained error, panicking if it's a value.
    ///
    /// # Panics
    ///
    /// Panics if the item is a `Value`.
    pub fn unwrap_err(self) -> E
    where
        T: std::fmt::Debug,
    {
        match self {
            StreamItem::Value(v) => {
                panic!("called `StreamItem::unwrap_err()` on a `Value`: {v:?}")
            }
            StreamItem::Error(e) => e,
        }
    }
}

impl<T, E> From<Result<T, E>> for StreamItem<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => StreamItem::Value(v),
            Err(e) => StreamItem::Error(e),
        }
    }
}

impl<T, E> From<StreamItem<T, E>> for Result<T, E> {
    fn from(item: StreamItem<T, E>) -> Self {
        match item {
            StreamItem::Value(v) => Ok(v),
            StreamItem::Error(e) => Err(e),
        }
    }
}
