//! Column Normalizer Module
//! Renames raw upstream identifiers to semantic indicator labels.

use crate::data::catalog::SourceSpec;
use crate::data::loader::RawSeries;
use polars::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum NormalizationError {
    #[error("Column '{column}' missing from {file}")]
    MissingColumn {
        file: &'static str,
        column: &'static str,
    },
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// A source table whose value columns carry indicator labels.
#[derive(Debug, Clone)]
pub struct SemanticSeries {
    pub source: &'static SourceSpec,
    pub frame: DataFrame,
}

pub struct ColumnNormalizer;

impl ColumnNormalizer {
    /// Rename every series using the mapping of the source it was loaded from.
    pub fn normalize(series: Vec<RawSeries>) -> Result<Vec<SemanticSeries>, NormalizationError> {
        series.into_iter().map(Self::normalize_one).collect()
    }

    fn normalize_one(raw: RawSeries) -> Result<SemanticSeries, NormalizationError> {
        let RawSeries { source, mut frame } = raw;

        for col in source.columns {
            if frame.get_column_index(col.raw).is_none() {
                return Err(NormalizationError::MissingColumn {
                    file: source.file_name,
                    column: col.raw,
                });
            }
            frame.rename(col.raw, col.indicator.label().into())?;
        }

        debug!(file = source.file_name, "normalized columns");
        Ok(SemanticSeries { source, frame })
    }
}
