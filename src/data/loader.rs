//! CSV Data Loader Module
//! Reads each headerless source file into a DataFrame using Polars.

use crate::config::PipelineConfig;
use crate::data::catalog::{SourceSpec, DATE_COLUMN, SOURCES};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Source unavailable: {}", path.display())]
    SourceUnavailable { path: PathBuf },
    #[error("Failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
    #[error("Failed to load {}: expected {expected} columns, found {found}", path.display())]
    Arity {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

/// A source file as read from disk: `DATE` (string) plus its raw value columns.
#[derive(Debug, Clone)]
pub struct RawSeries {
    pub source: &'static SourceSpec,
    pub frame: DataFrame,
}

/// Loads the fixed set of source files.
pub struct DataLoader;

impl DataLoader {
    /// Load every catalog source in order. Stops at the first failure.
    pub fn load_all(config: &PipelineConfig) -> Result<Vec<RawSeries>, LoaderError> {
        let series = SOURCES
            .iter()
            .map(|source| Self::load_source(config, source))
            .collect::<Result<Vec<_>, _>>()?;

        let rows: usize = series.iter().map(|s| s.frame.height()).sum();
        info!(sources = series.len(), rows, "loaded all sources");
        Ok(series)
    }

    /// Load a single source file.
    pub fn load_source(
        config: &PipelineConfig,
        source: &'static SourceSpec,
    ) -> Result<RawSeries, LoaderError> {
        let path = config.source_path(source.file_name);
        if !path.is_file() {
            return Err(LoaderError::SourceUnavailable { path });
        }

        let frame = Self::read_csv(&path, source)?;
        debug!(file = source.file_name, rows = frame.height(), "loaded source");
        Ok(RawSeries { source, frame })
    }

    fn read_csv(path: &Path, source: &SourceSpec) -> Result<DataFrame, LoaderError> {
        let load_err = |err: PolarsError| LoaderError::Load {
            path: path.to_path_buf(),
            source: err,
        };

        let df = LazyCsvReader::new(path)
            .with_has_header(false)
            .with_infer_schema_length(Some(10000))
            .finish()
            .and_then(|lazy| lazy.collect())
            .map_err(load_err)?;

        let expected = source.raw_column_names().len();
        if df.width() != expected {
            return Err(LoaderError::Arity {
                path: path.to_path_buf(),
                expected,
                found: df.width(),
            });
        }

        // Columns are positional: date first, then the raw value columns.
        // Dates stay as text until alignment; values must be numeric.
        let raw = df.get_columns();
        let mut columns = Vec::with_capacity(expected);
        columns.push(
            raw[0]
                .cast(&DataType::String)
                .map_err(load_err)?
                .with_name(DATE_COLUMN.into()),
        );
        for (column, spec) in raw[1..].iter().zip(source.columns) {
            let values = column
                .as_materialized_series()
                .strict_cast(&DataType::Float64)
                .map_err(load_err)?
                .with_name(spec.raw.into());
            columns.push(Column::from(values));
        }

        DataFrame::new(columns).map_err(load_err)
    }
}
