use anyhow::Result;
use eframe::egui;

use crate::data::model::CameraDataset;
use crate::ui::plot::Chart;
use crate::ui::{panels, plot, ChartRenderer};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// A window showing a single chart.
pub struct ChartApp {
    pub chart: Chart,
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.chart);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.chart);
        });
    }
}

// ---------------------------------------------------------------------------
// Native window backend for the menu
// ---------------------------------------------------------------------------

/// Opens each chart in its own native window and blocks until it is closed.
#[derive(Debug, Default)]
pub struct NativeCharts;

impl NativeCharts {
    fn show(&self, chart: Chart) -> Result<()> {
        log::debug!("Opening chart '{}'", chart.title());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1000.0, 600.0])
                .with_min_inner_size([500.0, 300.0]),
            // Hand control back to the menu loop once the window closes.
            run_and_return: true,
            ..Default::default()
        };

        let title = chart.title();
        eframe::run_native(
            title,
            options,
            Box::new(|_cc| Ok(Box::new(ChartApp { chart }))),
        )
        .map_err(|e| anyhow::anyhow!("cannot display '{title}': {e}"))
    }
}

impl ChartRenderer for NativeCharts {
    fn price_distribution(&mut self, dataset: &CameraDataset) -> Result<()> {
        self.show(Chart::price_distribution(dataset))
    }

    fn resolution_vs_price(&mut self, dataset: &CameraDataset) -> Result<()> {
        self.show(Chart::resolution_vs_price(dataset))
    }
}
