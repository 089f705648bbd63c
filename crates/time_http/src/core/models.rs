use chrono::{DateTime, FixedOffset, SubsecRound};
use serde::{Deserialize, Serialize};

use crate::core::utils::{DATETIME_FORMAT, ZONE_ABBREVIATION};

/// A single clock reading in the fixed WAT offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTimeReading {
    /// Instant truncated to whole seconds
    pub timestamp: DateTime<FixedOffset>,
    /// `YYYY-MM-DD HH:MM:SS WAT`
    pub formatted: String,
}

impl CurrentTimeReading {
    /// Create a reading from an offset-aware datetime
    pub fn from_datetime(dt: &DateTime<FixedOffset>) -> CurrentTimeReading {
        let timestamp = dt.trunc_subsecs(0);
        let formatted = format!("{} {}", timestamp.format(DATETIME_FORMAT), ZONE_ABBREVIATION);

        CurrentTimeReading {
            timestamp,
            formatted,
        }
    }
}

/// JSON body of `GET /time`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTimeResponse {
    pub current_time: String,
}

impl From<CurrentTimeReading> for CurrentTimeResponse {
    fn from(reading: CurrentTimeReading) -> Self {
        CurrentTimeResponse {
            current_time: reading.formatted,
        }
    }
}
