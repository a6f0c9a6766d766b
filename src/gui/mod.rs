//! GUI module - chart window

mod app;
mod chart_viewer;

pub use app::IndicatorsApp;
pub use chart_viewer::ChartViewer;
