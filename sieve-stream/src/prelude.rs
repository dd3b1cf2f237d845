// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operator extension traits, for glob import.

pub use crate::distinct_until_changed::DistinctUntilChangedExt;
pub use crate::distinct_until_changed_by::DistinctUntilChangedByExt;
pub use crate::into_sieve_stream::IntoSieveStream;
pub use crate::try_distinct_until_changed_by::TryDistinctUntilChangedByExt;
