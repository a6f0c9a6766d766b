//! Group-by-date aggregation of the long table.

use super::calculator::{SeriesStats, StatsCalculator};
use super::{f64_values, stat_column, SchemaError, Statistic};
use crate::data::{DataProcessor, Indicator, DATE_COLUMN};
use polars::prelude::*;
use std::collections::BTreeMap;
use tracing::info;

/// Group the long table by exact date and describe every indicator.
///
/// Output: one row per distinct date, ascending, with `DATE` followed by
/// `<label>_{mean,median,std,mode}` for each indicator. Only rows at the
/// same date contribute to a group, and only whichever indicator columns
/// those rows populate.
pub fn aggregate_by_date(long: &DataFrame) -> Result<DataFrame, SchemaError> {
    if long.column(DATE_COLUMN).is_err() {
        return Err(SchemaError::MissingColumn(DATE_COLUMN.to_string()));
    }

    let mut groups: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (row, day) in DataProcessor::date_days(long)?.into_iter().enumerate() {
        if let Some(day) = day {
            groups.entry(day).or_default().push(row);
        }
    }

    let days: Vec<i32> = groups.keys().copied().collect();
    let mut columns = Vec::with_capacity(1 + Indicator::ALL.len() * Statistic::ALL.len());
    columns.push(Column::new(DATE_COLUMN.into(), days).cast(&DataType::Date)?);

    for indicator in Indicator::ALL {
        let values = f64_values(long, indicator.label())?;
        let stats: Vec<SeriesStats> = groups
            .values()
            .map(|rows| {
                let present: Vec<f64> = rows
                    .iter()
                    .filter_map(|&row| values[row])
                    .filter(|v| !v.is_nan())
                    .collect();
                StatsCalculator::compute_descriptive_stats(&present)
            })
            .collect();

        for stat in Statistic::ALL {
            let name = stat_column(indicator, stat);
            let column = match stat {
                Statistic::Mean => Column::new(name.into(), collect(&stats, |s| s.mean)),
                Statistic::Median => Column::new(name.into(), collect(&stats, |s| s.median)),
                Statistic::Std => Column::new(name.into(), collect(&stats, |s| s.std)),
                Statistic::Mode => {
                    let modes: Vec<Option<f64>> = stats.iter().map(|s| s.mode).collect();
                    Column::new(name.into(), modes)
                }
            };
            columns.push(column);
        }
    }

    let df = DataFrame::new(columns)?;
    info!(dates = df.height(), rows = long.height(), "aggregated by date");
    Ok(df)
}

fn collect(stats: &[SeriesStats], f: impl Fn(&SeriesStats) -> f64) -> Vec<f64> {
    stats.iter().map(f).collect()
}
