//! Time display formatting

/// Format whole seconds as zero-padded `HH:MM:SS`
///
/// Hours widen past two digits rather than wrap, so a long-running
/// stopwatch keeps counting visibly.
pub fn format_hms(total_seconds: u64) -> String {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

fn clamp(value: u64, min: u64, max: u64) -> u64 {
    value.clamp(min, max)
}

/// Total seconds from an hours/minutes/seconds creation input
///
/// Hours are clamped to 0-99, minutes and seconds to 0-59, matching the
/// creation form limits.
pub fn hms_to_seconds(hours: u64, minutes: u64, seconds: u64) -> u64 {
    clamp(hours, 0, 99) * 3600 + clamp(minutes, 0, 59) * 60 + clamp(seconds, 0, 59)
}
