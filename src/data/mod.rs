//! Data module - source loading, normalization and alignment

pub mod catalog;
pub mod dates;
mod loader;
mod normalizer;
mod processor;

pub use catalog::{Indicator, DATE_COLUMN};
pub use loader::{DataLoader, LoaderError};
pub use normalizer::{ColumnNormalizer, NormalizationError};
pub use processor::{AlignError, DataProcessor};
