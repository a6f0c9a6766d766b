//! Date helpers shared by the pipeline and the charts.
//!
//! Polars stores `Date` values as days since the Unix epoch; these helpers
//! convert between that representation and [`NaiveDate`].

use chrono::{Datelike, NaiveDate, ParseResult};

/// Input date format of every source file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days from 0001-01-01 (CE day 1) to 1970-01-01.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

pub fn parse_date(value: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

pub fn date_to_days(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - EPOCH_DAYS_FROM_CE
}

/// `None` when the day count falls outside chrono's date range.
pub fn days_to_date(days: i32) -> Option<NaiveDate> {
    days.checked_add(EPOCH_DAYS_FROM_CE)
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}
