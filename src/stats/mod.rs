//! Stats module - per-date aggregation and mean differencing

mod aggregator;
mod calculator;
mod differencer;

pub use aggregator::aggregate_by_date;
pub use differencer::append_mean_diffs;

use crate::data::Indicator;
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Expected column '{0}' is missing")]
    MissingColumn(String),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Statistic computed per (date, indicator) group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    Mean,
    Median,
    Std,
    Mode,
}

impl Statistic {
    pub const ALL: [Statistic; 4] = [
        Statistic::Mean,
        Statistic::Median,
        Statistic::Std,
        Statistic::Mode,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Std => "std",
            Statistic::Mode => "mode",
        }
    }
}

/// Flattened `(series, statistic)` column name, e.g. `ConsumerPriceIndex_mean`.
pub fn stat_column(indicator: Indicator, stat: Statistic) -> String {
    format!("{}_{}", indicator.label(), stat.suffix())
}

/// Name of the first-difference column appended for an indicator.
pub fn diff_column(indicator: Indicator) -> String {
    format!("{}_mean_diff", indicator.label())
}

/// Read a Float64 column by name, reporting absence as a schema error.
pub fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>, SchemaError> {
    let column = df
        .column(name)
        .map_err(|_| SchemaError::MissingColumn(name.to_string()))?;
    Ok(column.f64()?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        assert_eq!(
            stat_column(Indicator::DelinquencyCreditLoans, Statistic::Mean),
            "DelinquencyCreditCLoans_mean"
        );
        assert_eq!(
            stat_column(Indicator::FedFundsRate, Statistic::Std),
            "FedFundsEffectiveRate_MonthlyAve_std"
        );
        assert_eq!(
            diff_column(Indicator::ConsumerPriceIndex),
            "ConsumerPriceIndex_mean_diff"
        );
    }

    #[test]
    fn test_f64_values_missing_column() {
        let df = DataFrame::new(vec![Column::new("a".into(), [1.0f64])]).unwrap();
        assert_eq!(f64_values(&df, "a").unwrap(), vec![Some(1.0)]);
        assert!(matches!(
            f64_values(&df, "b"),
            Err(SchemaError::MissingColumn(name)) if name == "b"
        ));
    }
}
