//! Pipeline clock — owns the reference date every stage measures against.
//!
//! "Today" is read exactly once per run and threaded through, so signup
//! windows, order-date windows, and lifespan all agree even if the run
//! straddles midnight. Tests pin it to a fixed date.

use crate::types::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineClock {
    today: Date,
}

impl PipelineClock {
    /// Clock anchored to the local calendar date.
    pub fn system() -> Self {
        Self { today: chrono::Local::now().date_naive() }
    }

    /// Clock pinned to a fixed date, for reproducible fixtures.
    pub fn fixed(today: Date) -> Self {
        Self { today }
    }

    pub fn today(&self) -> Date {
        self.today
    }
}
