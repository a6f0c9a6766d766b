//! Charts module - panel data preparation, plotting and recession bands

mod plotter;
mod recession;

pub use plotter::{ChartData, ChartPlotter, RenderError, CHART_TITLE};
pub use recession::{RecessionInterval, RECESSIONS};
