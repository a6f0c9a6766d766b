//! Main application window hosting the chart viewer.

use crate::charts::{ChartData, RenderError, CHART_TITLE};
use crate::gui::ChartViewer;
use eframe::egui;

/// Main application window.
pub struct IndicatorsApp {
    chart_viewer: ChartViewer,
}

impl IndicatorsApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart_data: ChartData) -> Self {
        Self {
            chart_viewer: ChartViewer::new(chart_data),
        }
    }

    /// Open the window and block until it is closed.
    pub fn run(chart_data: ChartData) -> Result<(), RenderError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1400.0, 900.0])
                .with_min_inner_size([900.0, 700.0])
                .with_title(CHART_TITLE),
            ..Default::default()
        };

        eframe::run_native(
            CHART_TITLE,
            options,
            Box::new(|cc| Ok(Box::new(IndicatorsApp::new(cc, chart_data)))),
        )
        .map_err(|e| RenderError::Window(e.to_string()))
    }
}

impl eframe::App for IndicatorsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
