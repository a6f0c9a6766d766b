//! Chart Viewer Widget
//! Three stacked indicator panels with shared x axis, plus the latest
//! statistics table.

use crate::charts::{ChartData, ChartPlotter, CHART_TITLE};
use egui::{RichText, ScrollArea};

const PANEL_SPACING: f32 = 10.0;
const MIN_PANEL_HEIGHT: f32 = 180.0;

pub struct ChartViewer {
    pub chart_data: ChartData,
}

impl ChartViewer {
    pub fn new(chart_data: ChartData) -> Self {
        Self { chart_data }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(CHART_TITLE).size(20.0).strong());
        });
        ui.add_space(PANEL_SPACING);

        // Panels split the window height; the table scrolls below them.
        let panel_count = self.chart_data.panels.len().max(1) as f32;
        let panel_height = ((ui.available_height() - 60.0) / panel_count - PANEL_SPACING * 2.0)
            .max(MIN_PANEL_HEIGHT);

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for panel in &self.chart_data.panels {
                    ui.label(RichText::new(panel.title).size(14.0).strong());
                    ChartPlotter::draw_panel(
                        ui,
                        panel,
                        &self.chart_data.recessions,
                        panel_height,
                    );
                    ui.add_space(PANEL_SPACING);
                }

                egui::CollapsingHeader::new("Latest statistics")
                    .default_open(false)
                    .show(ui, |ui| {
                        ChartPlotter::draw_summary_table(ui, &self.chart_data.summary);
                    });
            });
    }
}
