//! Human-readable duration formatting
//!
//! Episode listings show durations as zero-padded `HH:MM:SS`.

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;

/// Format a duration in seconds as `HH:MM:SS`.
///
/// Hours are padded to two digits but not capped, so a 100 hour
/// recording renders as `100:00:00`.
///
/// # Examples
///
/// ```
/// use podcastr_common::human_time::format_duration;
///
/// assert_eq!(format_duration(0), "00:00:00");
/// assert_eq!(format_duration(59), "00:00:59");
/// assert_eq!(format_duration(3661), "01:01:01");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = seconds % SECONDS_PER_MINUTE;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0), "00:00:00");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(60), "00:01:00");
        assert_eq!(format_duration(330), "00:05:30");
    }

    #[test]
    fn test_format_duration_typical_episode() {
        // 1h 23m 45s
        assert_eq!(format_duration(5025), "01:23:45");
    }

    #[test]
    fn test_format_duration_past_one_day() {
        assert_eq!(format_duration(90000), "25:00:00");
        assert_eq!(format_duration(360000), "100:00:00");
    }
}
