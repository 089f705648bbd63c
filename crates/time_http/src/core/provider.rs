use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

use crate::core::{
    clock::{Clock, SystemClock},
    error::{TimeServerError, TimeServerResult},
    models::CurrentTimeReading,
    utils,
};

/// Time server implementation
#[derive(Clone)]
pub struct TimeServer {
    clock: Arc<dyn Clock>,
}

impl TimeServer {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }

    /// Read the clock and render it in West Africa Time
    pub fn current_time(&self) -> TimeServerResult<CurrentTimeReading> {
        self.reading_at(self.clock.now_utc())
    }

    pub fn reading_at(&self, instant: DateTime<Utc>) -> TimeServerResult<CurrentTimeReading> {
        let offset = utils::wat_offset()?;

        // Local wall time must stay representable after the shift
        let shift = TimeDelta::seconds(i64::from(offset.local_minus_utc()));
        let _ = instant
            .naive_utc()
            .checked_add_signed(shift)
            .ok_or_else(|| TimeServerError::ClockUnavailable {
                reason: format!("{instant} is out of range for offset {offset}"),
            })?;

        let local = instant.with_timezone(&offset);
        Ok(CurrentTimeReading::from_datetime(&local))
    }
}

impl Default for TimeServer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TimeServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeServer").finish_non_exhaustive()
    }
}
