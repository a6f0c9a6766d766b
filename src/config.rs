//! Pipeline configuration.

use chrono::NaiveDate;
use std::path::PathBuf;

/// First date kept after alignment.
pub const DEFAULT_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1994, 1, 1) {
    Some(date) => date,
    None => panic!("default start date is not a calendar date"),
};

/// Settings shared by all pipeline stages.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory the source CSV files are read from.
    pub data_dir: PathBuf,
    /// Rows dated before this are dropped by the aligner.
    pub start_date: NaiveDate,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            start_date: DEFAULT_START_DATE,
        }
    }
}

impl PipelineConfig {
    #[cfg(test)]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Resolve a source file name against the data directory.
    pub fn source_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_start_date() {
        let config = PipelineConfig::default();
        assert_eq!(
            config.start_date,
            NaiveDate::from_ymd_opt(1994, 1, 1).unwrap()
        );
        assert_eq!(config.start_date, DEFAULT_START_DATE);
        assert_eq!(config.source_path("a.csv"), PathBuf::from("./a.csv"));
    }

    #[test]
    fn test_with_data_dir() {
        let config = PipelineConfig::default().with_data_dir("/tmp/data");
        assert_eq!(
            config.source_path("ConsumerPriceIndex.csv"),
            PathBuf::from("/tmp/data/ConsumerPriceIndex.csv")
        );
    }
}
