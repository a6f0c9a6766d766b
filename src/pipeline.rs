//! Pipeline orchestration.
//!
//! Runs load → normalize → align → aggregate → difference → render in
//! order. The first failing stage is logged and returned; later stages never
//! run.

use crate::charts::{ChartData, RecessionInterval, RenderError};
use crate::config::PipelineConfig;
use crate::data::{
    AlignError, ColumnNormalizer, DataLoader, DataProcessor, LoaderError, NormalizationError,
};
use crate::gui::IndicatorsApp;
use crate::stats::{aggregate_by_date, append_mean_diffs, SchemaError};
use polars::prelude::DataFrame;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("load stage failed: {0}")]
    Load(#[from] LoaderError),
    #[error("normalize stage failed: {0}")]
    Normalize(#[from] NormalizationError),
    #[error("align stage failed: {0}")]
    Align(#[from] AlignError),
    #[error("aggregate stage failed: {0}")]
    Aggregate(#[source] SchemaError),
    #[error("difference stage failed: {0}")]
    Difference(#[source] SchemaError),
    #[error("render stage failed: {0}")]
    Render(#[from] RenderError),
}

/// Run every data stage and return the date-sorted stats table with
/// `<label>_mean_diff` columns.
pub fn compute(config: &PipelineConfig) -> Result<DataFrame, PipelineError> {
    let result = run_stages(config);
    if let Err(e) = &result {
        error!("{e}");
    }
    result
}

/// Build the chart from the computed table and show it.
pub fn render(table: &DataFrame, recessions: &[RecessionInterval]) -> Result<(), PipelineError> {
    let result = ChartData::from_table(table, recessions)
        .and_then(IndicatorsApp::run)
        .map_err(PipelineError::from);
    if let Err(e) = &result {
        error!("{e}");
    }
    result
}

fn run_stages(config: &PipelineConfig) -> Result<DataFrame, PipelineError> {
    info!(data_dir = %config.data_dir.display(), "starting pipeline");

    let raw = DataLoader::load_all(config)?;
    let semantic = ColumnNormalizer::normalize(raw)?;
    let long = DataProcessor::stack_to_long(&semantic, config.start_date)?;
    let stats = aggregate_by_date(&long).map_err(PipelineError::Aggregate)?;
    let table = append_mean_diffs(stats).map_err(PipelineError::Difference)?;

    info!(
        rows = table.height(),
        columns = table.width(),
        "pipeline complete"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::SOURCES;
    use crate::data::Indicator;
    use crate::stats::{diff_column, f64_values, stat_column, Statistic};
    use std::fs;
    use tempfile::TempDir;

    /// Write every source with a single pre-1994 row.
    fn write_pre_start_sources(dir: &TempDir) {
        for source in SOURCES {
            let values = vec!["1.0"; source.columns.len()].join(",");
            fs::write(
                dir.path().join(source.file_name),
                format!("1990-01-01,{values}\n"),
            )
            .unwrap();
        }
    }

    fn delinquency_file() -> &'static str {
        SOURCES
            .iter()
            .find(|s| {
                s.columns
                    .iter()
                    .any(|c| c.indicator == Indicator::DelinquencyCreditLoans)
            })
            .map(|s| s.file_name)
            .unwrap()
    }

    #[test]
    fn test_delinquency_only_scenario() {
        let dir = TempDir::new().unwrap();
        write_pre_start_sources(&dir);
        fs::write(
            dir.path().join(delinquency_file()),
            "1994-03-01,3.2\n1995-03-01,2.9\n2008-06-01,4.5\n",
        )
        .unwrap();
        let config = PipelineConfig::default().with_data_dir(dir.path());

        let table = compute(&config).unwrap();
        assert_eq!(table.height(), 3);

        let means = f64_values(
            &table,
            &stat_column(Indicator::DelinquencyCreditLoans, Statistic::Mean),
        )
        .unwrap();
        assert_eq!(means, vec![Some(3.2), Some(2.9), Some(4.5)]);

        let diffs = f64_values(&table, &diff_column(Indicator::DelinquencyCreditLoans)).unwrap();
        assert_eq!(diffs[0], None);
        assert!((diffs[1].unwrap() - (-0.3)).abs() < 1e-9);
        assert!((diffs[2].unwrap() - 1.6).abs() < 1e-9);

        // Every other series is empty after the date filter.
        let cpi = f64_values(
            &table,
            &stat_column(Indicator::ConsumerPriceIndex, Statistic::Mean),
        )
        .unwrap();
        assert!(cpi.iter().all(|v| v.unwrap().is_nan()));
    }

    #[test]
    fn test_one_stats_row_per_distinct_date() {
        let dir = TempDir::new().unwrap();
        write_pre_start_sources(&dir);
        fs::write(
            dir.path().join(SOURCES[0].file_name),
            "1994-01-01,146.3\n1994-02-01,146.7\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(SOURCES[1].file_name),
            "1994-01-01,160.0,170.0\n1994-03-01,161.0,171.0\n",
        )
        .unwrap();
        let config = PipelineConfig::default().with_data_dir(dir.path());

        let table = compute(&config).unwrap();
        assert_eq!(table.height(), 3);

        let rent = f64_values(
            &table,
            &stat_column(Indicator::RentPrimaryResidence, Statistic::Mean),
        )
        .unwrap();
        assert_eq!(rent[0], Some(160.0));
        assert!(rent[1].unwrap().is_nan());
        assert_eq!(rent[2], Some(161.0));
    }

    #[test]
    fn test_missing_source_aborts_before_stats() {
        let dir = TempDir::new().unwrap();
        write_pre_start_sources(&dir);
        fs::remove_file(dir.path().join(SOURCES[9].file_name)).unwrap();
        let config = PipelineConfig::default().with_data_dir(dir.path());

        let err = compute(&config).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Load(LoaderError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_bad_date_aborts_in_align_stage() {
        let dir = TempDir::new().unwrap();
        write_pre_start_sources(&dir);
        fs::write(dir.path().join(SOURCES[3].file_name), "03/01/1994,3.05\n").unwrap();
        let config = PipelineConfig::default().with_data_dir(dir.path());

        let err = compute(&config).unwrap_err();
        assert!(matches!(err, PipelineError::Align(AlignError::DateParse { .. })));
        assert!(err.to_string().starts_with("align stage failed"));
    }
}
