use anyhow::Context;
use chrono::{DateTime, FixedOffset, Utc};

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Converts a UTC instant to Indian Standard Time (UTC+05:30).
pub fn to_ist(utc: DateTime<Utc>) -> anyhow::Result<DateTime<FixedOffset>> {
    let ist = FixedOffset::east_opt(IST_OFFSET_SECS).context("invalid IST offset")?;
    Ok(utc.with_timezone(&ist))
}

/// The display timestamp shown next to a generated response, e.g. "14:05:09 IST".
pub fn display_time(utc: DateTime<Utc>) -> anyhow::Result<String> {
    Ok(format!("{} IST", to_ist(utc)?.format("%H:%M:%S")))
}
