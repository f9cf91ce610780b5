//! Source of "now" for id generation, fixture dates and attendance recomputation.

use chrono::{Local, NaiveDate};

pub trait Clock: Send + Sync {
    /// Current local calendar date
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch
    fn timestamp_millis(&self) -> i64;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn timestamp_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub today: NaiveDate,
    pub timestamp_millis: i64,
}

impl FixedClock {
    pub fn new(today: NaiveDate, timestamp_millis: i64) -> Self {
        Self { today, timestamp_millis }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }
}
