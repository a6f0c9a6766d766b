//! Data Processor Module
//! Stacks the normalized series into one long table (row-wise, no join),
//! parses dates and drops rows before the start date.

use crate::data::catalog::{Indicator, DATE_COLUMN};
use crate::data::dates::{date_to_days, parse_date};
use crate::data::normalizer::SemanticSeries;
use chrono::NaiveDate;
use polars::prelude::*;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum AlignError {
    #[error("Unparseable date '{value}' in {file}: {source}")]
    DateParse {
        file: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Missing date in {file} at row {row}")]
    MissingDate { file: &'static str, row: usize },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles the stack-and-filter step of the pipeline.
pub struct DataProcessor;

impl DataProcessor {
    /// Concatenate all series into the long table.
    ///
    /// Output columns: [`DATE` (Date), one nullable Float64 per indicator].
    /// Each row comes from exactly one source, so only that source's
    /// indicator columns are populated. Row order follows source order; the
    /// table is not sorted.
    pub fn stack_to_long(
        series: &[SemanticSeries],
        start_date: NaiveDate,
    ) -> Result<DataFrame, AlignError> {
        let mut days: Vec<i32> = Vec::new();
        let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); Indicator::ALL.len()];

        for s in series {
            let file = s.source.file_name;
            let date_col = s.frame.column(DATE_COLUMN)?.cast(&DataType::String)?;
            let date_ca = date_col.str()?;

            let mut populated: Vec<(usize, Float64Chunked)> = Vec::new();
            for col in s.source.columns {
                let ca = s.frame.column(col.indicator.label())?.f64()?.clone();
                populated.push((col.indicator.index(), ca));
            }

            for row in 0..s.frame.height() {
                let raw = date_ca
                    .get(row)
                    .ok_or(AlignError::MissingDate { file, row })?;
                let date = parse_date(raw).map_err(|source| AlignError::DateParse {
                    file,
                    value: raw.to_string(),
                    source,
                })?;
                days.push(date_to_days(date));

                for column in values.iter_mut() {
                    column.push(None);
                }
                for (idx, ca) in &populated {
                    if let Some(last) = values[*idx].last_mut() {
                        *last = ca.get(row);
                    }
                }
            }
        }

        let stacked = days.len();
        let mut columns = Vec::with_capacity(Indicator::ALL.len() + 1);
        columns.push(Column::new(DATE_COLUMN.into(), days.clone()).cast(&DataType::Date)?);
        for (indicator, column) in Indicator::ALL.iter().zip(values) {
            columns.push(Column::new(indicator.label().into(), column));
        }
        let df = DataFrame::new(columns)?;

        let cutoff = date_to_days(start_date);
        let keep: Vec<bool> = days.iter().map(|&d| d >= cutoff).collect();
        let mask = BooleanChunked::from_slice("keep".into(), &keep);
        let filtered = df.filter(&mask)?;

        info!(
            stacked,
            kept = filtered.height(),
            start = %start_date,
            "aligned long table"
        );
        Ok(filtered)
    }

    /// Read the `DATE` column of a table as epoch days.
    pub fn date_days(df: &DataFrame) -> PolarsResult<Vec<Option<i32>>> {
        let days = df.column(DATE_COLUMN)?.cast(&DataType::Int32)?;
        let days = days.i32()?.into_iter().collect();
        Ok(days)
    }
}
