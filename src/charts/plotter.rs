//! Chart Plotter Module
//! Turns the stats table into panel data and draws it with egui_plot.

use crate::charts::recession::RecessionInterval;
use crate::data::dates::{date_to_days, days_to_date};
use crate::data::{DataProcessor, Indicator};
use crate::stats::{diff_column, f64_values, stat_column, SchemaError, Statistic};
use chrono::NaiveDate;
use egui::{Color32, RichText, Stroke};
use egui_plot::{Legend, Line, Plot, PlotPoints, Polygon};
use polars::prelude::*;
use thiserror::Error;

pub const CHART_TITLE: &str = "Economic Indicators Over Time with Recession Periods";

/// All panels share x axis bounds and cursor through this group.
const LINK_GROUP: &str = "indicator_panels";

/// LightSkyBlue at 20% opacity (premultiplied).
pub const RECESSION_FILL: Color32 = Color32::from_rgba_premultiplied(27, 41, 50, 51);

pub const PALETTE: [Color32; 4] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
];

/// Panel titles and the mean series each one overlays.
const PANELS: [(&str, &[(Indicator, &str)]); 3] = [
    (
        "Consumer Price Index (CPI)",
        &[(Indicator::ConsumerPriceIndex, "CPI Mean")],
    ),
    (
        "Rent and Owner Equivalent Rent",
        &[
            (Indicator::RentPrimaryResidence, "Rent Primary Residence Mean"),
            (Indicator::OwnerEquivalentRent, "Owner Equivalent Rent Mean"),
        ],
    ),
    (
        "Delinquency Credit Loans",
        &[(Indicator::DelinquencyCreditLoans, "Delinquency Credit Loans Mean")],
    ),
];

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Chart column unavailable: {0}")]
    Schema(#[from] SchemaError),
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Invalid recession interval {start}..{end}: {source}")]
    Recession {
        start: &'static str,
        end: &'static str,
        #[source]
        source: chrono::ParseError,
    },
    #[error("Chart window failed: {0}")]
    Window(String),
}

/// One plotted series: `[epoch day, value]` points with NaN rows skipped.
#[derive(Debug, Clone)]
pub struct LineData {
    pub name: &'static str,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone)]
pub struct PanelData {
    pub title: &'static str,
    pub lines: Vec<LineData>,
}

impl PanelData {
    /// Value range across all lines of the panel.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .flat_map(|l| l.points.iter().map(|p| p[1]))
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }

    /// Vertical extent of the recession bands. Flat or empty panels get a
    /// unit margin so the bands stay visible.
    pub fn band_range(&self) -> (f64, f64) {
        match self.y_range() {
            Some((lo, hi)) if hi > lo => (lo, hi),
            Some((lo, hi)) => (lo - 1.0, hi + 1.0),
            None => (-1.0, 1.0),
        }
    }
}

/// Latest defined statistics of one indicator.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub indicator: Indicator,
    pub date: Option<NaiveDate>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub std: Option<f64>,
    pub mode: Option<f64>,
    pub mean_diff: Option<f64>,
}

/// Everything the viewer draws, prepared up front.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub panels: Vec<PanelData>,
    /// Recession bands as `[start day, end day]`.
    pub recessions: Vec<(f64, f64)>,
    pub summary: Vec<SummaryRow>,
}

impl ChartData {
    pub fn from_table(
        table: &DataFrame,
        recessions: &[RecessionInterval],
    ) -> Result<Self, RenderError> {
        let days = DataProcessor::date_days(table)?;

        let mut panels = Vec::with_capacity(PANELS.len());
        for (title, series) in PANELS {
            let mut lines = Vec::with_capacity(series.len());
            for &(indicator, name) in series {
                let means = f64_values(table, &stat_column(indicator, Statistic::Mean))?;
                let points = days
                    .iter()
                    .zip(means)
                    .filter_map(|(day, mean)| match (day, mean) {
                        (Some(day), Some(mean)) if !mean.is_nan() => Some([*day as f64, mean]),
                        _ => None,
                    })
                    .collect();
                lines.push(LineData { name, points });
            }
            panels.push(PanelData { title, lines });
        }

        let recessions = recessions
            .iter()
            .map(|r| -> Result<(f64, f64), RenderError> {
                let (start, end) = r.parse().map_err(|source| RenderError::Recession {
                    start: r.start,
                    end: r.end,
                    source,
                })?;
                Ok((date_to_days(start) as f64, date_to_days(end) as f64))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let summary = Indicator::ALL
            .iter()
            .map(|&indicator| Self::summarize(table, &days, indicator))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            panels,
            recessions,
            summary,
        })
    }

    fn summarize(
        table: &DataFrame,
        days: &[Option<i32>],
        indicator: Indicator,
    ) -> Result<SummaryRow, RenderError> {
        let column = |stat| f64_values(table, &stat_column(indicator, stat));
        let means = column(Statistic::Mean)?;
        let defined = |v: Option<f64>| v.filter(|x| !x.is_nan());

        let Some(row) = means.iter().rposition(|m| defined(*m).is_some()) else {
            return Ok(SummaryRow {
                indicator,
                date: None,
                mean: None,
                median: None,
                std: None,
                mode: None,
                mean_diff: None,
            });
        };

        Ok(SummaryRow {
            indicator,
            date: days[row].and_then(days_to_date),
            mean: defined(means[row]),
            median: defined(column(Statistic::Median)?[row]),
            std: defined(column(Statistic::Std)?[row]),
            mode: defined(column(Statistic::Mode)?[row]),
            mean_diff: defined(f64_values(table, &diff_column(indicator))?[row]),
        })
    }
}

/// Format an x-axis position (epoch days) as a date.
pub fn format_day(x: f64) -> String {
    days_to_date(x.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn format_value(v: Option<f64>) -> String {
    v.map(|v| format!("{:.3}", v)).unwrap_or_else(|| "-".to_string())
}

/// Draws the indicator panels using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw one time-series panel with recession bands below its lines.
    pub fn draw_panel(
        ui: &mut egui::Ui,
        panel: &PanelData,
        recessions: &[(f64, f64)],
        height: f32,
    ) {
        let (lo, hi) = panel.band_range();

        Plot::new(format!("panel_{}", panel.title))
            .height(height)
            .link_axis(LINK_GROUP, [true, false])
            .link_cursor(LINK_GROUP, [true, false].into())
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Date")
            .y_axis_label("Value")
            .x_axis_formatter(|mark, _range| format_day(mark.value))
            .label_formatter(|name, value| {
                let date = format_day(value.x);
                if name.is_empty() {
                    date
                } else {
                    format!("{}\n{}: {:.3}", date, name, value.y)
                }
            })
            .show(ui, |plot_ui| {
                for &(start, end) in recessions {
                    let band = vec![[start, lo], [end, lo], [end, hi], [start, hi]];
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(band))
                            .fill_color(RECESSION_FILL)
                            .stroke(Stroke::NONE)
                            .name("Recession"),
                    );
                }

                for (i, line) in panel.lines.iter().enumerate() {
                    plot_ui.line(
                        Line::new(PlotPoints::new(line.points.clone()))
                            .color(PALETTE[i % PALETTE.len()])
                            .width(1.5)
                            .name(line.name),
                    );
                }
            });
    }

    /// Draw the latest-statistics table
    pub fn draw_summary_table(ui: &mut egui::Ui, summary: &[SummaryRow]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("summary_table")
                    .striped(true)
                    .min_col_width(55.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["Series", "Date", "Mean", "Median", "Std", "Mode", "Δ Mean"] {
                            ui.label(RichText::new(header).strong().size(11.0));
                        }
                        ui.end_row();

                        for row in summary {
                            ui.label(RichText::new(row.indicator.label()).size(11.0));
                            let date = row
                                .date
                                .map(|d| d.format("%Y-%m-%d").to_string())
                                .unwrap_or_else(|| "-".to_string());
                            ui.label(RichText::new(date).size(11.0));
                            for value in [row.mean, row.median, row.std, row.mode] {
                                ui.label(RichText::new(format_value(value)).size(11.0));
                            }

                            let diff_color = match row.mean_diff {
                                Some(d) if d > 0.0 => Color32::from_rgb(40, 167, 69),
                                Some(d) if d < 0.0 => Color32::from_rgb(220, 53, 69),
                                _ => ui.visuals().text_color(),
                            };
                            ui.label(
                                RichText::new(format_value(row.mean_diff))
                                    .size(11.0)
                                    .color(diff_color),
                            );
                            ui.end_row();
                        }
                    });
            });
    }
}
