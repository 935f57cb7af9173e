//! Context carries request-scoped data across framework calls
//!
//! Helpers that receive a Context never act on it themselves; they hand it
//! through to whatever they call so the host can bound the request.

use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context the host expects to be finished with by `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
