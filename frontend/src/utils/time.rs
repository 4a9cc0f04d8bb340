use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

fn app_time_zone() -> Tz {
    config::current_time_zone()
}

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&app_time_zone())
}

pub fn today_in_app_tz() -> NaiveDate {
    now_in_app_tz().date_naive()
}

/// Short month/day/year date in the app time zone, e.g. `1/5/2025`.
pub fn format_date(value: &DateTime<Utc>) -> String {
    format_date_in(value, app_time_zone())
}

pub fn format_date_in(value: &DateTime<Utc>, tz: Tz) -> String {
    value.with_timezone(&tz).format("%-m/%-d/%Y").to_string()
}

pub fn format_naive_date(value: &NaiveDate) -> String {
    value.format("%-m/%-d/%Y").to_string()
}
