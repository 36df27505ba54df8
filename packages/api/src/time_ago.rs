use time::{Month, OffsetDateTime};

const MINUTE: i64 = 60;
const HOUR: i64 = MINUTE * 60;
const DAY: i64 = HOUR * 24;

/// Short "time ago" label shown under each recording card.
///
/// `now` is explicit so the label is a pure function of its two inputs.
/// Anything a week or older is rendered as an absolute date in the
/// timestamp's own UTC offset, e.g. `Jan 5 2024 at 14:03`.
///
/// Timestamps in the future read as "Just now".
pub fn time_ago(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    let delta = elapsed_seconds(timestamp, now);

    // Branch order matters: the "1 hour ago" check runs before the generic
    // hour range and only after every sub-hour case.
    if delta < MINUTE {
        "Just now".to_string()
    } else if delta < 2 * MINUTE {
        "1 min".to_string()
    } else if delta < HOUR {
        format!("{} mins", delta / MINUTE)
    } else if delta / HOUR == 1 {
        "1 hour ago".to_string()
    } else if delta < DAY {
        format!("{} hours ago", delta / HOUR)
    } else if delta < 2 * DAY {
        "yesterday".to_string()
    } else if delta < 7 * DAY {
        format!("{} days ago", delta / DAY)
    } else {
        absolute_date(timestamp)
    }
}

/// [`time_ago`] against the current wall clock.
pub fn time_ago_now(timestamp: OffsetDateTime) -> String {
    time_ago(timestamp, OffsetDateTime::now_utc())
}

/// Whole seconds between `timestamp` and `now`, rounded toward negative infinity.
fn elapsed_seconds(timestamp: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let elapsed = now - timestamp;
    let whole = elapsed.whole_seconds();
    if elapsed.subsec_nanoseconds() < 0 {
        whole - 1
    } else {
        whole
    }
}

fn absolute_date(timestamp: OffsetDateTime) -> String {
    format!(
        "{} {} {} at {:02}:{:02}",
        month_abbrev(timestamp.month()),
        timestamp.day(),
        timestamp.year(),
        timestamp.hour(),
        timestamp.minute(),
    )
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
