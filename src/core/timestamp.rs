//! Timestamp formatting utilities
//!
//! Log lines carry a second-resolution local timestamp; rotated files carry a
//! compact 14-digit suffix of the rotation time.

use chrono::{DateTime, Local, NaiveDateTime};

/// strftime format of the timestamp at the start of every log line
pub const LINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// strftime format of the suffix appended to rotated files after `.bak`
pub const BACKUP_SUFFIX_FORMAT: &str = "%Y%m%d%H%M%S";

/// Number of digits produced by [`BACKUP_SUFFIX_FORMAT`]
pub const BACKUP_SUFFIX_LEN: usize = 14;

/// Current local time formatted for a log line, e.g. `2025-01-08 10:30:45`
pub fn now_line() -> String {
    line(&Local::now())
}

#[must_use]
pub fn line(datetime: &DateTime<Local>) -> String {
    datetime.format(LINE_FORMAT).to_string()
}

/// Rotation suffix for `datetime`, e.g. `20250108103045`
#[must_use]
pub fn backup_suffix(datetime: &DateTime<Local>) -> String {
    datetime.format(BACKUP_SUFFIX_FORMAT).to_string()
}

/// Parse a suffix produced by [`backup_suffix`]
pub fn parse_backup_suffix(suffix: &str) -> Option<NaiveDateTime> {
    if suffix.len() != BACKUP_SUFFIX_LEN || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDateTime::parse_from_str(suffix, BACKUP_SUFFIX_FORMAT).ok()
}
