// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The deduplication stage shared by all `distinct_until_changed*` operators.
//!
//! [`DedupState`] holds the decision logic and can be driven synchronously;
//! [`DedupStage`] adapts it to a pull-based [`Stream`](futures::Stream).

mod stage;
mod state;

pub use stage::DedupStage;
pub use state::{DedupState, Step, StageEnd};
