//! Wall-clock helpers for the snapshot filename.

use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the UNIX epoch.
pub fn current_time_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// `YYYYMMDD_HHMMSS` (UTC) for default snapshot filenames.
pub fn filename_timestamp() -> String {
    format_timestamp(current_time_secs())
}

/// Format epoch seconds as `YYYYMMDD_HHMMSS` (UTC).
pub fn format_timestamp(epoch_secs: u64) -> String {
    let days = (epoch_secs / 86_400) as i64;
    let rem = epoch_secs % 86_400;
    let (year, month, day) = civil_from_days(days);
    let (hour, minute, second) = (rem / 3600, (rem % 3600) / 60, rem % 60);
    format!("{year:04}{month:02}{day:02}_{hour:02}{minute:02}{second:02}")
}

/// Convert days since 1970-01-01 to a (year, month, day) civil date.
/// Standard Gregorian era arithmetic over 400-year cycles.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097); // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32; // [1, 12]
    let year = if month <= 2 { year + 1 } else { year };
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_day_one() {
        assert_eq!(format_timestamp(0), "19700101_000000");
    }

    #[test]
    fn known_dates_round_trip() {
        // 2000-03-01 00:00:00 UTC (day after a century leap day)
        assert_eq!(format_timestamp(951_868_800), "20000301_000000");
        // 2024-02-29 12:34:56 UTC
        assert_eq!(format_timestamp(1_709_210_096), "20240229_123456");
    }

    #[test]
    fn time_of_day_fields() {
        assert_eq!(format_timestamp(86_399), "19700101_235959");
        assert_eq!(format_timestamp(86_400), "19700102_000000");
    }
}
