use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Tz;

/// Format a duration as `H:MM:SS`, prefixed with whole days when it spans
/// one or more of them (`1 day, 2:03:04`).
pub fn format_day_length(length: Duration) -> String {
    let total = length.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    match days {
        0 => format!("{}{}:{:02}:{:02}", sign, hours, minutes, seconds),
        1 => format!("{}1 day, {}:{:02}:{:02}", sign, hours, minutes, seconds),
        _ => format!("{}{} days, {}:{:02}:{:02}", sign, days, hours, minutes, seconds),
    }
}

/// Absolute wall-clock time in the bot's timezone, to the second.
pub fn format_local_time(instant: DateTime<Utc>, tz: Tz) -> String {
    tz.from_utc_datetime(&instant.naive_utc())
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Reply header timestamp, to the minute.
pub fn format_reply_timestamp(instant: DateTime<Utc>, tz: Tz) -> String {
    tz.from_utc_datetime(&instant.naive_utc())
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
