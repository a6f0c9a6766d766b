//! Economic Indicators - Macroeconomic Series Statistics & Recession Chart
//!
//! Loads ten monthly indicator series, aligns them on one date axis from
//! 1994 onwards, computes per-date statistics and mean differences, and
//! shows the result as linked chart panels with recession bands.

mod charts;
mod config;
mod data;
mod gui;
mod pipeline;
mod stats;

use charts::RECESSIONS;
use config::PipelineConfig;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = PipelineConfig::default();
    let table = pipeline::compute(&config)?;
    pipeline::render(&table, &RECESSIONS)?;

    Ok(())
}
