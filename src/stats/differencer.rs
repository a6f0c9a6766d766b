//! First differences of the per-date means.

use super::{diff_column, stat_column, SchemaError, Statistic};
use crate::data::{Indicator, DATE_COLUMN};
use polars::prelude::*;
use tracing::info;

/// Sort the stats table by date and append `<label>_mean_diff` for every
/// indicator.
///
/// The difference is taken against the previous row, not the previous
/// calendar month, so gaps between dates are not filled. Row 0 is null;
/// NaN means propagate through the subtraction.
pub fn append_mean_diffs(stats: DataFrame) -> Result<DataFrame, SchemaError> {
    for name in std::iter::once(DATE_COLUMN.to_string())
        .chain(Indicator::ALL.iter().map(|&i| stat_column(i, Statistic::Mean)))
    {
        if stats.column(&name).is_err() {
            return Err(SchemaError::MissingColumn(name));
        }
    }

    let mut df = stats.sort([DATE_COLUMN], SortMultipleOptions::default())?;

    for indicator in Indicator::ALL {
        let means = df
            .column(&stat_column(indicator, Statistic::Mean))?
            .as_materialized_series()
            .clone();
        let diffs = (&means - &means.shift(1))?.with_name(diff_column(indicator).into());
        df.with_column(diffs)?;
    }

    info!(rows = df.height(), "appended mean differences");
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dates::{date_to_days, parse_date};
    use crate::data::DataProcessor;
    use crate::stats::f64_values;

    fn stats_table(dates: &[&str], means: &[(Indicator, &[f64])]) -> DataFrame {
        let days: Vec<i32> = dates
            .iter()
            .map(|d| date_to_days(parse_date(d).unwrap()))
            .collect();
        let mut columns = vec![Column::new(DATE_COLUMN.into(), days)
            .cast(&DataType::Date)
            .unwrap()];
        for indicator in Indicator::ALL {
            let values: Vec<f64> = means
                .iter()
                .find(|(i, _)| *i == indicator)
                .map(|(_, v)| v.to_vec())
                .unwrap_or_else(|| vec![f64::NAN; dates.len()]);
            columns.push(Column::new(
                stat_column(indicator, Statistic::Mean).into(),
                values,
            ));
        }
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn test_diff_matches_consecutive_means() {
        let means = [146.3, 146.7, 147.1, 146.9];
        let table = stats_table(
            &["1994-01-01", "1994-02-01", "1994-03-01", "1994-05-01"],
            &[(Indicator::ConsumerPriceIndex, &means)],
        );

        let df = append_mean_diffs(table).unwrap();
        let diffs = f64_values(&df, "ConsumerPriceIndex_mean_diff").unwrap();
        assert_eq!(diffs[0], None);
        for i in 1..means.len() {
            assert_eq!(diffs[i], Some(means[i] - means[i - 1]));
        }
    }

    #[test]
    fn test_unsorted_input_is_sorted_before_differencing() {
        let table = stats_table(
            &["1995-01-01", "1994-01-01"],
            &[(Indicator::FedFundsRate, &[5.0, 3.0])],
        );

        let df = append_mean_diffs(table).unwrap();
        let days = DataProcessor::date_days(&df).unwrap();
        assert_eq!(
            days[0],
            Some(date_to_days(parse_date("1994-01-01").unwrap()))
        );
        let diffs = f64_values(&df, &diff_column(Indicator::FedFundsRate)).unwrap();
        assert_eq!(diffs, vec![None, Some(2.0)]);
    }

    #[test]
    fn test_nan_propagates() {
        let table = stats_table(
            &["1994-01-01", "1994-02-01", "1994-03-01"],
            &[(Indicator::JobHoldersBothPt, &[1.0, f64::NAN, 4.0])],
        );

        let df = append_mean_diffs(table).unwrap();
        let diffs = f64_values(&df, &diff_column(Indicator::JobHoldersBothPt)).unwrap();
        assert_eq!(diffs[0], None);
        assert!(diffs[1].unwrap().is_nan());
        assert!(diffs[2].unwrap().is_nan());
    }

    #[test]
    fn test_appends_one_column_per_indicator() {
        let table = stats_table(&["1994-01-01"], &[]);
        let width = table.width();

        let df = append_mean_diffs(table).unwrap();
        assert_eq!(df.width(), width + Indicator::ALL.len());
    }

    #[test]
    fn test_missing_mean_column_is_schema_error() {
        let table = stats_table(&["1994-01-01"], &[])
            .drop("DelinquencyCreditCLoans_mean")
            .unwrap();

        let err = append_mean_diffs(table).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MissingColumn(name) if name == "DelinquencyCreditCLoans_mean"
        ));
    }
}
