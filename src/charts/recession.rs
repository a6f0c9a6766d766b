//! Recession periods shaded on every chart panel.

use crate::data::dates::parse_date;
use chrono::NaiveDate;

/// A historical recession as start and end date strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecessionInterval {
    pub start: &'static str,
    pub end: &'static str,
}

impl RecessionInterval {
    /// Parse both bounds.
    pub fn parse(&self) -> chrono::ParseResult<(NaiveDate, NaiveDate)> {
        Ok((parse_date(self.start)?, parse_date(self.end)?))
    }
}

pub const RECESSIONS: [RecessionInterval; 3] = [
    RecessionInterval {
        start: "2001-03-01",
        end: "2001-11-30",
    },
    RecessionInterval {
        start: "2007-12-01",
        end: "2009-06-30",
    },
    RecessionInterval {
        start: "2020-02-01",
        end: "2020-04-30",
    },
];
