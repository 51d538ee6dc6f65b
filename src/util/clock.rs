use time::{macros::format_description, OffsetDateTime};

/// Local wall-clock time, or UTC when the local offset cannot be determined.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn format_clock(moment: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    moment
        .format(&format)
        .unwrap_or_else(|_| moment.unix_timestamp().to_string())
}
