use chrono::FixedOffset;

use crate::core::error::{TimeServerError, TimeServerResult};

// Constants for format strings and the fixed zone
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const ZONE_ABBREVIATION: &str = "WAT";

/// West Africa Time offset east of UTC, in seconds. WAT has no DST.
pub const WAT_OFFSET_SECONDS: i32 = 3600;

/// Build a fixed offset east of UTC
///
/// # Arguments
///
/// * `seconds` - The offset in seconds, must lie strictly within one day
///
/// # Returns
///
/// The offset, or `InvalidOffset` when it is out of range
pub fn fixed_offset(seconds: i32) -> TimeServerResult<FixedOffset> {
    FixedOffset::east_opt(seconds).ok_or(TimeServerError::InvalidOffset { seconds })
}

/// The West Africa Time offset (+01:00)
pub fn wat_offset() -> TimeServerResult<FixedOffset> {
    fixed_offset(WAT_OFFSET_SECONDS)
}
